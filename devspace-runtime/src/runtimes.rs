use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use devspace_core::{
    Command, Environment, Result, RuntimeIdentity, RuntimeTarget, Warning, Workspace,
    WorkspaceConfig, WorkspaceError, WorkspaceStatus, ERROR_MESSAGE_ATTRIBUTE,
    INFRASTRUCTURE_NAMESPACE_ATTRIBUTE, STOPPED_ABNORMALLY_ATTRIBUTE, STOPPED_ATTRIBUTE,
};

use crate::cache::WorkspaceStatusCache;
use crate::dao::{DevfileConverter, WorkspaceDao};
use crate::environment::{InternalEnvironment, InternalEnvironmentFactory, NO_ENVIRONMENT_RECIPE_TYPE};
use crate::events::{RuntimeAbnormalStoppedEvent, RuntimeAbnormalStoppingEvent, RuntimeEvent};
use crate::infrastructure::{InternalRuntime, RuntimeInfrastructure};
use crate::lock::WorkspaceLocks;

/// Tracks every workspace runtime this node knows about.
///
/// Holds the status cache and the registry of live runtimes, and runs the
/// crash-recovery protocol that rebuilds both after a restart. All
/// mutations for one workspace id serialize on a per-workspace lock.
pub struct WorkspaceRuntimes {
    runtimes: RwLock<HashMap<String, InternalRuntime>>,
    statuses: WorkspaceStatusCache,
    locks: WorkspaceLocks,
    infrastructure: Arc<dyn RuntimeInfrastructure>,
    environment_factories: HashMap<String, Arc<dyn InternalEnvironmentFactory>>,
    workspace_dao: Arc<dyn WorkspaceDao>,
    devfile_converter: Arc<dyn DevfileConverter>,
}

impl WorkspaceRuntimes {
    pub fn new(
        infrastructure: Arc<dyn RuntimeInfrastructure>,
        environment_factories: HashMap<String, Arc<dyn InternalEnvironmentFactory>>,
        workspace_dao: Arc<dyn WorkspaceDao>,
        devfile_converter: Arc<dyn DevfileConverter>,
    ) -> Self {
        Self {
            runtimes: RwLock::new(HashMap::new()),
            statuses: WorkspaceStatusCache::new(),
            locks: WorkspaceLocks::new(),
            infrastructure,
            environment_factories,
            workspace_dao,
            devfile_converter,
        }
    }

    /// Checks that the requested environment exists in the workspace before
    /// any start is attempted. `None` means the default/no-environment case
    /// and always passes.
    pub fn validate(&self, workspace: &Workspace, env_name: Option<&str>) -> Result<()> {
        let Some(env_name) = env_name else {
            return Ok(());
        };
        let known = self
            .effective_config(workspace)?
            .map(|config| config.environments.contains_key(env_name))
            .unwrap_or(false);
        if !known {
            return Err(WorkspaceError::NotFound(format!(
                "Workspace '{}' doesn't contain environment '{}'",
                workspace.display_name(),
                env_name
            )));
        }
        Ok(())
    }

    pub fn get_status(&self, workspace_id: &str) -> WorkspaceStatus {
        self.statuses
            .get(workspace_id)
            .unwrap_or(WorkspaceStatus::Stopped)
    }

    /// True iff the status cache tracks the workspace. The local registry
    /// may lag behind (tracked-but-unregistered after a node restart); the
    /// cache is the authority.
    pub fn has_runtime(&self, workspace_id: &str) -> bool {
        self.statuses.get(workspace_id).is_some()
    }

    /// Workspace ids with any non-stopped status.
    pub fn get_active(&self) -> HashSet<String> {
        self.statuses.as_map().into_keys().collect()
    }

    pub fn get_running(&self) -> HashSet<String> {
        self.statuses
            .as_map()
            .into_iter()
            .filter(|(_, status)| *status == WorkspaceStatus::Running)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn status_cache(&self) -> &WorkspaceStatusCache {
        &self.statuses
    }

    /// Attaches the live runtime view and cached status to a workspace
    /// record. A workspace with no cached status is reported stopped
    /// without ever touching the infrastructure; a tracked workspace whose
    /// runtime is not registered yet triggers recovery first.
    pub async fn inject_runtime(&self, workspace: &mut Workspace) {
        if self.statuses.get(&workspace.id).is_none() {
            workspace.status = WorkspaceStatus::Stopped;
            workspace.runtime = None;
            return;
        }
        match self.get_internal_runtime(&workspace.id).await {
            Ok(runtime) => {
                workspace.runtime = Some(runtime.as_runtime());
                workspace.status = self.get_status(&workspace.id);
            }
            Err(err) => {
                warn!(
                    workspace_id = %workspace.id,
                    error = %err,
                    "couldn't inject runtime into workspace"
                );
                workspace.status = WorkspaceStatus::Stopped;
                workspace.runtime = None;
            }
        }
    }

    /// Rebuilds the tracker state from whatever the infrastructure reports
    /// as alive. Called once on node startup.
    pub async fn recover_runtimes(self: Arc<Self>) -> Result<()> {
        let identities = self.infrastructure.get_identities().await?;
        info!(count = identities.len(), "recovering workspace runtimes");
        self.recover_all(identities).await;
        Ok(())
    }

    /// Recovers each identity in its own task. A failed or panicked
    /// recovery is logged and never aborts the rest of the batch.
    pub async fn recover_all(self: Arc<Self>, identities: impl IntoIterator<Item = RuntimeIdentity>) {
        let mut tasks = Vec::new();
        for identity in identities {
            let runtimes = Arc::clone(&self);
            tasks.push(tokio::spawn(async move {
                if let Err(err) = runtimes.recover_one(&identity).await {
                    warn!(
                        runtime = %identity.display_ref(),
                        error = %err,
                        "runtime recovery failed"
                    );
                }
            }));
        }
        for task in tasks {
            if task.await.is_err() {
                warn!("runtime recovery task panicked");
            }
        }
    }

    /// Rebuilds one runtime: loads the workspace record, resolves its
    /// environment, re-prepares the infrastructure context, and registers
    /// the resulting runtime plus its reported status.
    pub async fn recover_one(&self, identity: &RuntimeIdentity) -> Result<InternalRuntime> {
        let _guard = self.locks.lock(&identity.workspace_id).await;

        if let Some(existing) = self.get_runtime(&identity.workspace_id) {
            return Ok(existing);
        }

        let workspace = match self.workspace_dao.get(&identity.workspace_id).await {
            Ok(workspace) => workspace,
            // A gone workspace means there is nothing to rebuild from; an
            // operational store failure keeps its own cause.
            Err(err) if err.is_not_found() => {
                return Err(self.recovery_config_missing(identity));
            }
            Err(err) => return Err(err),
        };

        let Some(config) = self.effective_config(&workspace)? else {
            return Err(self.recovery_config_missing(identity));
        };

        let Some(environment) = config.environments.get(&identity.env_name) else {
            return Err(WorkspaceError::Server(format!(
                "Environment configuration is missing for the runtime '{}'. Runtime won't be recovered",
                identity.display_ref()
            )));
        };

        let internal_env = self.create_internal_environment(Some(environment), vec![], vec![])?;

        let target = RuntimeTarget::new(
            identity.clone(),
            None,
            workspace
                .attributes
                .get(INFRASTRUCTURE_NAMESPACE_ATTRIBUTE)
                .cloned(),
        );

        let context = self
            .infrastructure
            .prepare(&target, internal_env)
            .await
            .map_err(|err| {
                let cause = match err {
                    WorkspaceError::Infrastructure(message) => message,
                    other => other.to_string(),
                };
                WorkspaceError::Server(format!(
                    "Couldn't recover runtime '{}'. Error: {}",
                    identity.display_ref(),
                    cause
                ))
            })?;

        let runtime = context.runtime()?;
        let status = runtime.status;

        self.write_registry()
            .insert(identity.workspace_id.clone(), runtime.clone());
        self.statuses.put_if_absent(&identity.workspace_id, status);
        info!(runtime = %identity.display_ref(), "runtime recovered");
        Ok(runtime)
    }

    /// Marks the workspace as stopping. The runtime stays registered until
    /// the stopped event arrives.
    pub async fn on_abnormal_stopping(&self, event: RuntimeAbnormalStoppingEvent) {
        let workspace_id = &event.identity.workspace_id;
        let _guard = self.locks.lock(workspace_id).await;
        info!(
            runtime = %event.identity.display_ref(),
            error = %event.error_message,
            "runtime is stopping abnormally"
        );
        self.statuses
            .replace(workspace_id, WorkspaceStatus::Stopping);
    }

    /// Drops the workspace from the tracker and records the failure on the
    /// persisted workspace record. Idempotent.
    pub async fn on_abnormal_stopped(&self, event: RuntimeAbnormalStoppedEvent) {
        let workspace_id = &event.identity.workspace_id;
        let _guard = self.locks.lock(workspace_id).await;
        info!(
            runtime = %event.identity.display_ref(),
            error = %event.error_message,
            "runtime stopped abnormally"
        );
        self.statuses.remove(workspace_id);
        self.write_registry().remove(workspace_id);
        if let Err(err) = self
            .record_abnormal_stop(workspace_id, &event.error_message)
            .await
        {
            warn!(
                workspace_id = %workspace_id,
                error = %err,
                "couldn't persist abnormal stop attributes"
            );
        }
    }

    pub async fn handle_event(&self, event: RuntimeEvent) {
        match event {
            RuntimeEvent::AbnormalStopping(event) => self.on_abnormal_stopping(event).await,
            RuntimeEvent::AbnormalStopped(event) => self.on_abnormal_stopped(event).await,
        }
    }

    /// Drains runtime events until the sending side closes.
    pub async fn run_event_loop(self: Arc<Self>, mut events: mpsc::Receiver<RuntimeEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
        debug!("runtime event channel closed");
    }

    pub fn get_runtime(&self, workspace_id: &str) -> Option<InternalRuntime> {
        self.read_registry().get(workspace_id).cloned()
    }

    async fn get_internal_runtime(&self, workspace_id: &str) -> Result<InternalRuntime> {
        if let Some(runtime) = self.get_runtime(workspace_id) {
            return Ok(runtime);
        }
        // Tracked status but no registered runtime: this node restarted
        // while the workspace kept running elsewhere.
        let identities = self.infrastructure.get_identities().await?;
        let identity = identities
            .into_iter()
            .find(|identity| identity.workspace_id == workspace_id)
            .ok_or_else(|| {
                WorkspaceError::NotFound(format!(
                    "Runtime of the workspace '{workspace_id}' wasn't found"
                ))
            })?;
        self.recover_one(&identity).await
    }

    fn effective_config(&self, workspace: &Workspace) -> Result<Option<WorkspaceConfig>> {
        match (&workspace.config, &workspace.devfile) {
            (Some(config), _) => Ok(Some(config.clone())),
            (None, Some(devfile)) => Ok(Some(self.devfile_converter.convert(devfile)?)),
            (None, None) => Ok(None),
        }
    }

    fn recovery_config_missing(&self, identity: &RuntimeIdentity) -> WorkspaceError {
        WorkspaceError::Server(format!(
            "Workspace configuration is missing for the runtime '{}'. Runtime won't be recovered",
            identity.display_ref()
        ))
    }

    /// Resolves an environment spec through the factory registered for its
    /// recipe type. Warnings and commands accumulated by earlier phases are
    /// appended to whatever the factory produced.
    pub fn create_internal_environment(
        &self,
        environment: Option<&Environment>,
        warnings: Vec<Warning>,
        commands: Vec<Command>,
    ) -> Result<InternalEnvironment> {
        let recipe_type = environment
            .map(|env| env.recipe.recipe_type.as_str())
            .unwrap_or(NO_ENVIRONMENT_RECIPE_TYPE);
        let factory = self.environment_factories.get(recipe_type).ok_or_else(|| {
            WorkspaceError::NotFound(format!(
                "InternalEnvironmentFactory is not configured for recipe type: '{recipe_type}'"
            ))
        })?;
        let mut internal = factory.create(environment)?;
        internal.warnings.extend(warnings);
        internal.commands.extend(commands);
        Ok(internal)
    }

    async fn record_abnormal_stop(&self, workspace_id: &str, error_message: &str) -> Result<()> {
        let mut workspace = self.workspace_dao.get(workspace_id).await?;
        workspace.attributes.insert(
            STOPPED_ATTRIBUTE.to_string(),
            Utc::now().timestamp_millis().to_string(),
        );
        workspace
            .attributes
            .insert(STOPPED_ABNORMALLY_ATTRIBUTE.to_string(), "true".to_string());
        workspace
            .attributes
            .insert(ERROR_MESSAGE_ATTRIBUTE.to_string(), error_message.to_string());
        self.workspace_dao.update(&workspace).await
    }

    fn read_registry(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, InternalRuntime>> {
        self.runtimes.read().expect("runtime registry lock poisoned")
    }

    fn write_registry(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, InternalRuntime>> {
        self.runtimes.write().expect("runtime registry lock poisoned")
    }
}

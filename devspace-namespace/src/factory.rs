use std::sync::Arc;

use tracing::{debug, info};

use devspace_core::{Result, Subject, WorkspaceError};

use crate::backend::{NamespaceBackend, RawNamespace};
use crate::meta::{NamespaceMeta, DEFAULT_ATTRIBUTE};
use crate::template::eval_placeholders;
use crate::{kubernetes, openshift};

/// Static configuration of the namespace policy. Empty or whitespace-only
/// strings are treated as absent everywhere.
#[derive(Debug, Clone, Default)]
pub struct NamespaceFactoryConfig {
    /// Pre-configured namespace/project name; may itself be a template.
    pub predefined_name: Option<String>,
    pub service_account_name: Option<String>,
    pub cluster_role_name: Option<String>,
    pub default_namespace_name: Option<String>,
    pub allow_user_defined: bool,
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Decides the infrastructure namespace a workspace runs in and ensures it
/// exists with its auxiliary objects.
///
/// One policy engine serves both cluster flavors; construct with
/// [`NamespaceFactory::kubernetes`] or [`NamespaceFactory::openshift`].
pub struct NamespaceFactory {
    predefined_name: Option<String>,
    service_account_name: Option<String>,
    cluster_role_name: Option<String>,
    default_namespace_name: Option<String>,
    allow_user_defined: bool,
    backend: Arc<dyn NamespaceBackend>,
    meta_mapper: fn(&RawNamespace) -> NamespaceMeta,
}

impl std::fmt::Debug for NamespaceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceFactory")
            .field("predefined_name", &self.predefined_name)
            .field("service_account_name", &self.service_account_name)
            .field("cluster_role_name", &self.cluster_role_name)
            .field("default_namespace_name", &self.default_namespace_name)
            .field("allow_user_defined", &self.allow_user_defined)
            .finish_non_exhaustive()
    }
}

impl NamespaceFactory {
    pub fn kubernetes(
        config: NamespaceFactoryConfig,
        backend: Arc<dyn NamespaceBackend>,
    ) -> Result<Self> {
        Self::new(config, backend, kubernetes::namespace_meta)
    }

    pub fn openshift(
        config: NamespaceFactoryConfig,
        backend: Arc<dyn NamespaceBackend>,
    ) -> Result<Self> {
        Self::new(config, backend, openshift::project_meta)
    }

    fn new(
        config: NamespaceFactoryConfig,
        backend: Arc<dyn NamespaceBackend>,
        meta_mapper: fn(&RawNamespace) -> NamespaceMeta,
    ) -> Result<Self> {
        let default_namespace_name = normalized(&config.default_namespace_name);
        if default_namespace_name.is_none() && !config.allow_user_defined {
            // With neither a default namespace nor user-defined ones there
            // is no way to place any workspace.
            return Err(WorkspaceError::Configuration(
                "a default namespace name or allowing user-defined namespaces \
                 must be configured"
                    .to_string(),
            ));
        }
        Ok(Self {
            predefined_name: normalized(&config.predefined_name),
            service_account_name: normalized(&config.service_account_name),
            cluster_role_name: normalized(&config.cluster_role_name),
            default_namespace_name,
            allow_user_defined: config.allow_user_defined,
            backend,
            meta_mapper,
        })
    }

    /// True iff a namespace/project name is configured.
    pub fn is_predefined(&self) -> bool {
        self.predefined_name.is_some()
    }

    /// Evaluates the namespace name for a workspace: the configured name is
    /// used as the template source when present, otherwise the workspace id
    /// itself is the name.
    pub fn eval_namespace_name(&self, workspace_id: &str, subject: &Subject) -> String {
        match &self.predefined_name {
            Some(template) => eval_placeholders(template, subject),
            None => workspace_id.to_string(),
        }
    }

    fn eval_default_namespace_name(&self, subject: &Subject) -> Option<String> {
        self.default_namespace_name
            .as_deref()
            .map(|template| eval_placeholders(template, subject))
    }

    /// Lists the namespaces available for deploying workspaces to. Entries
    /// are fresh snapshots; nothing is cached across calls.
    pub async fn list(&self, subject: &Subject) -> Result<Vec<NamespaceMeta>> {
        if !self.allow_user_defined {
            // Only the default namespace is usable; report it even when it
            // does not exist yet (it will be created on first start).
            // Construction guarantees a default exists in this mode.
            let Some(evaluated) = self.eval_default_namespace_name(subject) else {
                return Err(WorkspaceError::Configuration(
                    "no default namespace configured".to_string(),
                ));
            };

            let mut meta = match self.backend.get_namespace(&evaluated).await? {
                Some(raw) => (self.meta_mapper)(&raw),
                None => NamespaceMeta::new(evaluated),
            };
            meta.attributes
                .insert(DEFAULT_ATTRIBUTE.to_string(), "true".to_string());
            return Ok(vec![meta]);
        }

        let mut namespaces: Vec<NamespaceMeta> = self
            .backend
            .list_namespaces()
            .await?
            .iter()
            .map(self.meta_mapper)
            .collect();

        // Propagate the default namespace if one is configured: mark the
        // listed entry, or append a synthetic not-yet-created one.
        if let Some(evaluated) = self.eval_default_namespace_name(subject) {
            match namespaces.iter_mut().find(|m| m.name == evaluated) {
                Some(existing) => {
                    existing
                        .attributes
                        .insert(DEFAULT_ATTRIBUTE.to_string(), "true".to_string());
                }
                None => {
                    let mut meta = NamespaceMeta::new(evaluated);
                    meta.attributes
                        .insert(DEFAULT_ATTRIBUTE.to_string(), "true".to_string());
                    namespaces.push(meta);
                }
            }
        }
        debug!(count = namespaces.len(), "listed available namespaces");
        Ok(namespaces)
    }

    /// Creates the namespace for a workspace and prepares it.
    ///
    /// Predefined namespaces are assumed already prepared out-of-band, so
    /// `prepare` is skipped for them; so is service-account provisioning.
    pub async fn create(&self, workspace_id: &str, subject: &Subject) -> Result<WorkspaceNamespace> {
        let name = self.eval_namespace_name(workspace_id, subject);
        let namespace = WorkspaceNamespace::new(Arc::clone(&self.backend), &name, workspace_id);

        if !self.is_predefined() {
            namespace.prepare().await?;

            if let Some(account) = &self.service_account_name {
                let service_account = WorkspaceServiceAccount::new(
                    Arc::clone(&self.backend),
                    workspace_id,
                    &name,
                    account,
                    self.cluster_role_name.as_deref(),
                );
                service_account.prepare().await?;
            }
        }

        Ok(namespace)
    }

    /// Constructs the namespace handle without preparing it. Used only when
    /// recovering a workspace whose namespace is known to already exist.
    pub fn create_for_recovery(&self, workspace_id: &str, name: &str) -> WorkspaceNamespace {
        WorkspaceNamespace::new(Arc::clone(&self.backend), name, workspace_id)
    }
}

/// Handle to one workspace's namespace.
pub struct WorkspaceNamespace {
    backend: Arc<dyn NamespaceBackend>,
    name: String,
    workspace_id: String,
}

impl WorkspaceNamespace {
    fn new(backend: Arc<dyn NamespaceBackend>, name: &str, workspace_id: &str) -> Self {
        Self {
            backend,
            name: name.to_string(),
            workspace_id: workspace_id.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Idempotent create-if-absent.
    pub async fn prepare(&self) -> Result<()> {
        if self.backend.get_namespace(&self.name).await?.is_none() {
            info!(namespace = %self.name, workspace = %self.workspace_id, "creating namespace");
            self.backend.create_namespace(&self.name).await?;
        }
        Ok(())
    }
}

/// Handle to the workspace service account inside a namespace.
pub struct WorkspaceServiceAccount {
    backend: Arc<dyn NamespaceBackend>,
    workspace_id: String,
    namespace: String,
    account_name: String,
    cluster_role_name: Option<String>,
}

impl WorkspaceServiceAccount {
    fn new(
        backend: Arc<dyn NamespaceBackend>,
        workspace_id: &str,
        namespace: &str,
        account_name: &str,
        cluster_role_name: Option<&str>,
    ) -> Self {
        Self {
            backend,
            workspace_id: workspace_id.to_string(),
            namespace: namespace.to_string(),
            account_name: account_name.to_string(),
            cluster_role_name: cluster_role_name.map(str::to_string),
        }
    }

    pub async fn prepare(&self) -> Result<()> {
        info!(
            namespace = %self.namespace,
            workspace = %self.workspace_id,
            account = %self.account_name,
            "provisioning workspace service account"
        );
        self.backend
            .bind_service_account(
                &self.namespace,
                &self.account_name,
                self.cluster_role_name.as_deref(),
            )
            .await
    }
}

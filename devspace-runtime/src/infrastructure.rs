use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use devspace_core::{
    Command, Machine, Result, Runtime, RuntimeIdentity, RuntimeTarget, Warning, WorkspaceStatus,
};

use crate::environment::InternalEnvironment;

/// The live representation of one running workspace. Exists only while the
/// workspace is starting, running, or stopping; at most one per workspace
/// id at any time.
#[derive(Debug, Clone)]
pub struct InternalRuntime {
    pub identity: RuntimeIdentity,
    pub machines: HashMap<String, Machine>,
    pub commands: Vec<Command>,
    pub warnings: Vec<Warning>,
    pub owner: String,
    pub status: WorkspaceStatus,
}

impl InternalRuntime {
    /// Point-in-time view for external reporting.
    pub fn as_runtime(&self) -> Runtime {
        Runtime {
            active_env: self.identity.env_name.clone(),
            machines: self.machines.clone(),
            owner: self.owner.clone(),
            commands: self.commands.clone(),
            warnings: self.warnings.clone(),
        }
    }
}

/// Opaque handle the infrastructure returns for one (target, environment)
/// pair. Yields exactly one `InternalRuntime`.
pub trait RuntimeContext: Send + Sync {
    fn target(&self) -> &RuntimeTarget;

    fn runtime(&self) -> Result<InternalRuntime>;
}

/// Pluggable backend that turns a target plus environment spec into a
/// running workspace.
#[async_trait]
pub trait RuntimeInfrastructure: Send + Sync {
    /// Backend name, e.g. "kubernetes" or "openshift".
    fn name(&self) -> &str;

    /// Fails with `WorkspaceError::Infrastructure` on cluster API errors.
    async fn prepare(
        &self,
        target: &RuntimeTarget,
        environment: InternalEnvironment,
    ) -> Result<Box<dyn RuntimeContext>>;

    /// Full set of runtime identities known to the backend; used only for
    /// bulk recovery enumeration.
    async fn get_identities(&self) -> Result<HashSet<RuntimeIdentity>>;
}

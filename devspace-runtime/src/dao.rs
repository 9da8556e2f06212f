use async_trait::async_trait;

use devspace_core::{Devfile, Result, Workspace, WorkspaceConfig};

/// Persistence boundary for workspace records. Implementations live in the
/// persistence layer; the orchestrator only reads records and writes back
/// attribute updates.
#[async_trait]
pub trait WorkspaceDao: Send + Sync {
    /// Fails with `WorkspaceError::NotFound` when no such workspace exists.
    async fn get(&self, workspace_id: &str) -> Result<Workspace>;

    async fn update(&self, workspace: &Workspace) -> Result<()>;
}

/// Used only when a workspace carries a devfile instead of a direct
/// config.
pub trait DevfileConverter: Send + Sync {
    fn convert(&self, devfile: &Devfile) -> Result<WorkspaceConfig>;
}

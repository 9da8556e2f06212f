use std::collections::HashMap;
use std::sync::RwLock;

use devspace_core::WorkspaceStatus;

/// Authoritative in-memory map of workspace statuses. Absence of an entry
/// means the workspace is stopped.
#[derive(Debug, Default)]
pub struct WorkspaceStatusCache {
    statuses: RwLock<HashMap<String, WorkspaceStatus>>,
}

impl WorkspaceStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, workspace_id: &str) -> Option<WorkspaceStatus> {
        self.statuses
            .read()
            .expect("status cache lock poisoned")
            .get(workspace_id)
            .copied()
    }

    /// Inserts only when no entry exists. Returns the status that is in the
    /// cache afterwards.
    pub fn put_if_absent(&self, workspace_id: &str, status: WorkspaceStatus) -> WorkspaceStatus {
        *self
            .statuses
            .write()
            .expect("status cache lock poisoned")
            .entry(workspace_id.to_string())
            .or_insert(status)
    }

    /// Swaps the status of an already-tracked workspace. A workspace with no
    /// entry stays untracked; transitions never start from here.
    pub fn replace(&self, workspace_id: &str, status: WorkspaceStatus) -> Option<WorkspaceStatus> {
        let mut statuses = self.statuses.write().expect("status cache lock poisoned");
        match statuses.get_mut(workspace_id) {
            Some(existing) => Some(std::mem::replace(existing, status)),
            None => None,
        }
    }

    pub fn remove(&self, workspace_id: &str) -> Option<WorkspaceStatus> {
        self.statuses
            .write()
            .expect("status cache lock poisoned")
            .remove(workspace_id)
    }

    pub fn as_map(&self) -> HashMap<String, WorkspaceStatus> {
        self.statuses
            .read()
            .expect("status cache lock poisoned")
            .clone()
    }
}

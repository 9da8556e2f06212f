use serde::{Deserialize, Serialize};

/// Lifecycle status of one workspace.
///
/// Absence of a status-cache entry for a workspace id is defined to mean
/// `Stopped`; the cache never stores that value explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkspaceStatus {
    Stopped,
    Starting,
    Running,
    Stopping,
}

impl WorkspaceStatus {
    pub fn is_stopped(&self) -> bool {
        matches!(self, WorkspaceStatus::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&WorkspaceStatus::Starting).unwrap(),
            "\"STARTING\""
        );
    }
}

use serde::{Deserialize, Serialize};

/// Stable key naming one workspace's active runtime instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeIdentity {
    pub workspace_id: String,
    pub env_name: String,
    pub owner_id: String,
}

impl RuntimeIdentity {
    pub fn new(
        workspace_id: impl Into<String>,
        env_name: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            env_name: env_name.into(),
            owner_id: owner_id.into(),
        }
    }

    /// The `workspaceId:envName` form used in log and error messages.
    pub fn display_ref(&self) -> String {
        format!("{}:{}", self.workspace_id, self.env_name)
    }
}

/// Placement descriptor for a runtime: where its containers should live and
/// on whose behalf. Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuntimeTarget {
    pub identity: RuntimeIdentity,
    pub owner_name: Option<String>,
    pub infrastructure_namespace: Option<String>,
}

impl RuntimeTarget {
    pub fn new(
        identity: RuntimeIdentity,
        owner_name: Option<String>,
        infrastructure_namespace: Option<String>,
    ) -> Self {
        Self {
            identity,
            owner_name,
            infrastructure_namespace,
        }
    }
}

/// The user context consulted when evaluating namespace name templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub user_id: String,
    pub user_name: String,
}

impl Subject {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_equality_is_structural() {
        let identity = RuntimeIdentity::new("workspace123", "my-env", "myId");
        let a = RuntimeTarget::new(identity.clone(), None, Some("nmspc".into()));
        let b = RuntimeTarget::new(identity.clone(), None, Some("nmspc".into()));
        let c = RuntimeTarget::new(identity, Some("owner".into()), Some("nmspc".into()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_ref_joins_workspace_and_env() {
        let identity = RuntimeIdentity::new("workspace123", "my-env", "myId");
        assert_eq!(identity.display_ref(), "workspace123:my-env");
    }
}

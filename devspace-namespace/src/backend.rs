use std::collections::HashMap;

use async_trait::async_trait;

use devspace_core::Result;

/// A namespace/project as reported by the cluster, before any policy
/// interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNamespace {
    pub name: String,
    /// Cluster lifecycle phase, e.g. "Active" or "Terminating".
    pub phase: Option<String>,
    /// Descriptive annotations attached to the object, if any.
    pub annotations: HashMap<String, String>,
}

impl RawNamespace {
    pub fn new(name: impl Into<String>, phase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase: Some(phase.into()),
            annotations: HashMap::new(),
        }
    }
}

/// Capability interface the namespace policy engine runs against.
///
/// Implementations wrap the low-level cluster client. The engine never sees
/// HTTP status codes: `get_namespace` must return `Ok(None)` when the
/// namespace does not exist as far as the current credentials can tell —
/// each backend owns its own not-found vs. forbidden disambiguation (an
/// OpenShift backend maps a 403 on a project lookup to `None`, a vanilla
/// Kubernetes backend maps a plain 404).
#[async_trait]
pub trait NamespaceBackend: Send + Sync {
    async fn get_namespace(&self, name: &str) -> Result<Option<RawNamespace>>;

    /// Lists the namespaces visible to the current credentials.
    async fn list_namespaces(&self) -> Result<Vec<RawNamespace>>;

    /// Idempotent create: succeeds if the namespace already exists.
    async fn create_namespace(&self, name: &str) -> Result<()>;

    /// Provisions `account` in `namespace`, bound to `cluster_role` when
    /// one is given.
    async fn bind_service_account(
        &self,
        namespace: &str,
        account: &str,
        cluster_role: Option<&str>,
    ) -> Result<()>;
}

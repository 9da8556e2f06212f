//! Kubernetes-flavored mapping of raw namespaces to `NamespaceMeta`.

use std::collections::HashMap;

use crate::backend::RawNamespace;
use crate::meta::{NamespaceMeta, PHASE_ATTRIBUTE};

/// Plain Kubernetes namespaces carry nothing descriptive beyond their
/// lifecycle phase.
pub fn namespace_meta(raw: &RawNamespace) -> NamespaceMeta {
    let mut attributes = HashMap::new();
    if let Some(phase) = &raw.phase {
        attributes.insert(PHASE_ATTRIBUTE.to_string(), phase.clone());
    }
    NamespaceMeta::with_attributes(raw.name.clone(), attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_phase_into_attributes() {
        let meta = namespace_meta(&RawNamespace::new("my-for-ws", "Active"));
        assert_eq!(meta.name, "my-for-ws");
        assert_eq!(meta.phase(), Some("Active"));
    }

    #[test]
    fn missing_phase_yields_no_attribute() {
        let raw = RawNamespace {
            name: "pending".into(),
            phase: None,
            annotations: HashMap::new(),
        };
        assert!(namespace_meta(&raw).phase().is_none());
    }
}

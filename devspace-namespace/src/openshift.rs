//! OpenShift-flavored mapping of raw projects to `NamespaceMeta`.

use std::collections::HashMap;

use crate::backend::RawNamespace;
use crate::meta::{NamespaceMeta, PHASE_ATTRIBUTE};

pub const PROJECT_DISPLAY_NAME_ANNOTATION: &str = "openshift.io/display-name";
pub const PROJECT_DESCRIPTION_ANNOTATION: &str = "openshift.io/description";

pub const PROJECT_DISPLAY_NAME_ATTRIBUTE: &str = "displayName";
pub const PROJECT_DESCRIPTION_ATTRIBUTE: &str = "description";

/// OpenShift projects expose display name and description annotations;
/// carry them into the meta attributes alongside the phase.
pub fn project_meta(raw: &RawNamespace) -> NamespaceMeta {
    let mut attributes = HashMap::new();
    if let Some(phase) = &raw.phase {
        attributes.insert(PHASE_ATTRIBUTE.to_string(), phase.clone());
    }
    if let Some(display_name) = raw.annotations.get(PROJECT_DISPLAY_NAME_ANNOTATION) {
        attributes.insert(
            PROJECT_DISPLAY_NAME_ATTRIBUTE.to_string(),
            display_name.clone(),
        );
    }
    if let Some(description) = raw.annotations.get(PROJECT_DESCRIPTION_ANNOTATION) {
        attributes.insert(
            PROJECT_DESCRIPTION_ATTRIBUTE.to_string(),
            description.clone(),
        );
    }
    NamespaceMeta::with_attributes(raw.name.clone(), attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_descriptive_annotations() {
        let mut raw = RawNamespace::new("dev-project", "Active");
        raw.annotations.insert(
            PROJECT_DISPLAY_NAME_ANNOTATION.to_string(),
            "Dev Project".to_string(),
        );
        raw.annotations.insert(
            PROJECT_DESCRIPTION_ANNOTATION.to_string(),
            "team sandbox".to_string(),
        );

        let meta = project_meta(&raw);
        assert_eq!(
            meta.attributes.get(PROJECT_DISPLAY_NAME_ATTRIBUTE),
            Some(&"Dev Project".to_string())
        );
        assert_eq!(
            meta.attributes.get(PROJECT_DESCRIPTION_ATTRIBUTE),
            Some(&"team sandbox".to_string())
        );
        assert_eq!(meta.phase(), Some("Active"));
    }

    #[test]
    fn plain_project_maps_like_a_namespace() {
        let meta = project_meta(&RawNamespace::new("plain", "Terminating"));
        assert_eq!(meta.attributes.len(), 1);
        assert_eq!(meta.phase(), Some("Terminating"));
    }
}

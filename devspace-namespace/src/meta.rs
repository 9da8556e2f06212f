use std::collections::HashMap;

use crate::template;

/// Attribute marking the configured default namespace. Possible values:
/// "true"/"false"; an absent value reads as false.
pub const DEFAULT_ATTRIBUTE: &str = "default";

/// Attribute carrying the cluster-reported lifecycle phase, e.g. Active or
/// Terminating. An absent value means the namespace does not exist yet.
pub const PHASE_ATTRIBUTE: &str = "phase";

/// Read-only snapshot describing one namespace available for workspaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMeta {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

impl NamespaceMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attributes(name: impl Into<String>, attributes: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// True iff the name contains a placeholder token: such a name is only
    /// a naming pattern, not an actual namespace.
    pub fn is_template(&self) -> bool {
        template::contains_placeholder(&self.name)
    }

    pub fn phase(&self) -> Option<&str> {
        self.attributes.get(PHASE_ATTRIBUTE).map(String::as_str)
    }

    pub fn is_default(&self) -> bool {
        self.attributes.get(DEFAULT_ATTRIBUTE).map(String::as_str) == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_are_recognized() {
        assert!(NamespaceMeta::new("ws-<userid>").is_template());
        assert!(!NamespaceMeta::new("ws-123").is_template());
    }

    #[test]
    fn absent_default_reads_as_false() {
        let meta = NamespaceMeta::new("any");
        assert!(!meta.is_default());
        assert!(meta.phase().is_none());
    }
}

//! Thin model types carried between the orchestrator and its collaborators.
//!
//! These are plain data holders; all behavior lives in the namespace,
//! exposer, and runtime crates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::status::WorkspaceStatus;

/// One named network endpoint inside a workspace machine.
///
/// `unique` servers get their own exposure object; non-unique servers
/// sharing a service port are grouped into one shared object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port and protocol in `"8080/tcp"` form.
    pub port: String,
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
}

impl ServerConfig {
    pub fn new(port: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            protocol: protocol.into(),
            path: None,
            attributes: HashMap::new(),
            unique: false,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_attributes(mut self, attributes: HashMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MachineStatus {
    Starting,
    Running,
    Stopped,
    Failed,
}

/// One container group within a running environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub servers: HashMap<String, ServerConfig>,
    pub status: MachineStatus,
}

impl Machine {
    pub fn new(status: MachineStatus) -> Self {
        Self {
            attributes: HashMap::new(),
            servers: HashMap::new(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub command_line: String,
    #[serde(rename = "type")]
    pub command_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: i32,
    pub message: String,
}

/// Typed specification of the containers an environment runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "type")]
    pub recipe_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Recipe {
    pub fn new(recipe_type: impl Into<String>) -> Self {
        Self {
            recipe_type: recipe_type.into(),
            content_type: None,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub recipe: Recipe,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Environment {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            attributes: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub name: String,
    #[serde(default)]
    pub environments: HashMap<String, Environment>,
}

/// Opaque devfile representation; conversion to a `WorkspaceConfig` is a
/// collaborator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devfile {
    pub name: String,
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Point-in-time view of a live runtime, attached to a workspace record
/// for external reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runtime {
    pub active_env: String,
    pub machines: HashMap<String, Machine>,
    pub owner: String,
    pub commands: Vec<Command>,
    pub warnings: Vec<Warning>,
}

/// A user's named development environment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WorkspaceConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devfile: Option<Devfile>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    pub status: WorkspaceStatus,
}

impl Workspace {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: None,
            devfile: None,
            attributes: HashMap::new(),
            runtime: None,
            status: WorkspaceStatus::Stopped,
        }
    }

    /// Config name when present, otherwise the id. Used in user-facing
    /// error messages.
    pub fn display_name(&self) -> &str {
        self.config
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(self.id.as_str())
    }
}

//! Codec for server metadata carried in object annotations.
//!
//! Cluster objects only persist flat string key/value pairs, so the
//! structured `{machine name, server map}` payload is flattened to one
//! annotation per structural field: the machine name under a fixed key and
//! each server as a JSON-encoded value under a per-server key. The
//! deserializer is the exact inverse.

use std::collections::HashMap;

use devspace_core::{Result, ServerConfig};

pub const MACHINE_NAME_ANNOTATION: &str = "devspace.io/machine-name";
pub const SERVER_ANNOTATION_PREFIX: &str = "devspace.io/server.";

/// Builds the annotation map for one exposure object.
#[derive(Debug, Default)]
pub struct Serializer {
    machine_name: Option<String>,
    servers: HashMap<String, ServerConfig>,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machine_name(mut self, name: impl Into<String>) -> Self {
        self.machine_name = Some(name.into());
        self
    }

    pub fn server(mut self, name: impl Into<String>, config: ServerConfig) -> Self {
        self.servers.insert(name.into(), config);
        self
    }

    pub fn servers(mut self, servers: &HashMap<String, ServerConfig>) -> Self {
        self.servers
            .extend(servers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn annotations(self) -> Result<HashMap<String, String>> {
        let mut annotations = HashMap::new();
        if let Some(machine_name) = self.machine_name {
            annotations.insert(MACHINE_NAME_ANNOTATION.to_string(), machine_name);
        }
        for (name, config) in &self.servers {
            annotations.insert(
                format!("{SERVER_ANNOTATION_PREFIX}{name}"),
                serde_json::to_string(config)?,
            );
        }
        Ok(annotations)
    }
}

/// Reads back what a matching `Serializer` produced.
#[derive(Debug)]
pub struct Deserializer<'a> {
    annotations: &'a HashMap<String, String>,
}

impl<'a> Deserializer<'a> {
    pub fn new(annotations: &'a HashMap<String, String>) -> Self {
        Self { annotations }
    }

    pub fn machine_name(&self) -> Option<&str> {
        self.annotations
            .get(MACHINE_NAME_ANNOTATION)
            .map(String::as_str)
    }

    pub fn servers(&self) -> Result<HashMap<String, ServerConfig>> {
        let mut servers = HashMap::new();
        for (key, value) in self.annotations {
            if let Some(name) = key.strip_prefix(SERVER_ANNOTATION_PREFIX) {
                servers.insert(name.to_string(), serde_json::from_str(value)?);
            }
        }
        Ok(servers)
    }
}

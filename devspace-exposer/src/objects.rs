//! Exposure object model.
//!
//! These mirror only the fields the exposer actually decides; the rest of
//! the cluster object is the infrastructure backend's concern.

use std::collections::HashMap;

/// A service port already bound to container ports by an upstream
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePort {
    pub name: String,
    pub port: u16,
    pub protocol: String,
}

impl ServicePort {
    pub fn new(name: impl Into<String>, port: u16, protocol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port,
            protocol: protocol.into(),
        }
    }
}

/// Kubernetes-style exposure object with a synthetic hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingress {
    pub name: String,
    pub host: String,
    pub path: String,
    pub backend_service: String,
    pub backend_port_name: String,
    pub annotations: HashMap<String, String>,
}

/// OpenShift-style exposure object bound directly to a service port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub to_service: String,
    pub target_port: String,
    pub annotations: HashMap<String, String>,
}

/// The target environment's exposure object collections, keyed by object
/// name. Inserting under an existing key overwrites: two servers on the
/// same port and the same kind of exposure produce one object, not two.
#[derive(Debug, Clone, Default)]
pub struct ExposureEnvironment {
    pub ingresses: HashMap<String, Ingress>,
    pub routes: HashMap<String, Route>,
}

impl ExposureEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

//! External server exposure for workspace runtimes.
//!
//! Given a service already bound to container ports and the servers sharing
//! one of its ports, this crate builds the cluster objects (ingresses or
//! routes) that make those servers externally reachable, tagging each
//! object with annotations from which the original server map and owning
//! machine name can be reconstructed.

pub mod annotations;
pub mod exposer;
pub mod objects;

pub use annotations::{Deserializer, Serializer, MACHINE_NAME_ANNOTATION, SERVER_ANNOTATION_PREFIX};
pub use exposer::{make_valid_dns_name, ExternalServerExposer, MultiHostExposer, RouteExposer};
pub use objects::{ExposureEnvironment, Ingress, Route, ServicePort};

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use devspace_core::{Result, ServerConfig};

use crate::annotations::Serializer;
use crate::objects::{ExposureEnvironment, Ingress, Route, ServicePort};

/// Strategy turning one service port's servers into exposure objects.
pub trait ExternalServerExposer {
    /// Exposes `servers` (all sharing `service_port` of `service_name`) in
    /// the target environment. Servers marked unique each get their own
    /// object; the rest are grouped into one shared object.
    fn expose(
        &self,
        environment: &mut ExposureEnvironment,
        machine_name: &str,
        service_name: &str,
        service_port: &ServicePort,
        servers: &HashMap<String, ServerConfig>,
    ) -> Result<()>;
}

/// Server names become annotation keys and, for some strategies, host
/// labels; strip anything that is not DNS-safe.
pub fn make_valid_dns_name(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn generate_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

fn shared_object_key(service_name: &str, service_port: &ServicePort) -> String {
    format!("{service_name}-server-{}", service_port.port)
}

fn partition_by_unique(
    servers: &HashMap<String, ServerConfig>,
) -> (HashMap<String, ServerConfig>, HashMap<String, ServerConfig>) {
    let mut unique = HashMap::new();
    let mut shared = HashMap::new();
    for (name, config) in servers {
        let name = make_valid_dns_name(name);
        if config.unique {
            unique.insert(name, config.clone());
        } else {
            shared.insert(name, config.clone());
        }
    }
    (unique, shared)
}

/// Multi-host strategy: every exposed port gets its own hostname
/// `{service}-{port name}.{domain}` with path `/`.
pub struct MultiHostExposer {
    domain: String,
}

impl MultiHostExposer {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    fn build_ingress(
        &self,
        name: String,
        machine_name: &str,
        service_name: &str,
        service_port: &ServicePort,
        servers: &HashMap<String, ServerConfig>,
    ) -> Result<Ingress> {
        Ok(Ingress {
            name,
            host: format!("{service_name}-{}.{}", service_port.name, self.domain),
            path: "/".to_string(),
            backend_service: service_name.to_string(),
            backend_port_name: service_port.name.clone(),
            annotations: Serializer::new()
                .machine_name(machine_name)
                .servers(servers)
                .annotations()?,
        })
    }
}

impl ExternalServerExposer for MultiHostExposer {
    fn expose(
        &self,
        environment: &mut ExposureEnvironment,
        machine_name: &str,
        service_name: &str,
        service_port: &ServicePort,
        servers: &HashMap<String, ServerConfig>,
    ) -> Result<()> {
        let (unique, shared) = partition_by_unique(servers);

        for (name, config) in unique {
            let object_name = generate_name("server");
            let mut single = HashMap::new();
            single.insert(name, config);
            let ingress = self.build_ingress(
                object_name.clone(),
                machine_name,
                service_name,
                service_port,
                &single,
            )?;
            environment.ingresses.insert(object_name, ingress);
        }

        if !shared.is_empty() {
            let key = shared_object_key(service_name, service_port);
            let ingress =
                self.build_ingress(key.clone(), machine_name, service_name, service_port, &shared)?;
            debug!(ingress = %key, servers = shared.len(), "exposing shared servers");
            environment.ingresses.insert(key, ingress);
        }
        Ok(())
    }
}

/// Single shared-host strategy in the OpenShift-route style: objects bind
/// to the service port directly and no synthetic hostname is constructed.
#[derive(Debug, Default)]
pub struct RouteExposer;

impl RouteExposer {
    pub fn new() -> Self {
        Self
    }

    fn build_route(
        name: String,
        machine_name: &str,
        service_name: &str,
        service_port: &ServicePort,
        servers: &HashMap<String, ServerConfig>,
    ) -> Result<Route> {
        Ok(Route {
            name,
            to_service: service_name.to_string(),
            target_port: service_port.name.clone(),
            annotations: Serializer::new()
                .machine_name(machine_name)
                .servers(servers)
                .annotations()?,
        })
    }
}

impl ExternalServerExposer for RouteExposer {
    fn expose(
        &self,
        environment: &mut ExposureEnvironment,
        machine_name: &str,
        service_name: &str,
        service_port: &ServicePort,
        servers: &HashMap<String, ServerConfig>,
    ) -> Result<()> {
        let (unique, shared) = partition_by_unique(servers);

        for (name, config) in unique {
            let object_name = generate_name("route");
            let mut single = HashMap::new();
            single.insert(name, config);
            let route = Self::build_route(
                object_name.clone(),
                machine_name,
                service_name,
                service_port,
                &single,
            )?;
            environment.routes.insert(object_name, route);
        }

        if !shared.is_empty() {
            let key = shared_object_key(service_name, service_port);
            let route =
                Self::build_route(key.clone(), machine_name, service_name, service_port, &shared)?;
            environment.routes.insert(key, route);
        }
        Ok(())
    }
}

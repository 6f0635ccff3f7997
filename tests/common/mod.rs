// Common test utilities for integration tests

use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gridzone::backend::{CreateZoneOptions, GridBackend};
use gridzone::context::{
    ExtAttrs, GridPolicy, IpVersion, Network, OperationContext, Server, Subnet, ViewMapping,
};
use gridzone::errors::{BackendError, ResolutionError};
use gridzone::pattern::PatternResolver;
use gridzone::refcount::SubnetReferenceCounter;

/// Install a test subscriber so controller traces show up with
/// `RUST_LOG=gridzone=debug cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One recorded backend call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    CreateZone {
        view: String,
        name: String,
        options: CreateZoneOptions,
    },
    DeleteZone {
        view: String,
        name: String,
    },
    BindNames {
        port_id: String,
        view: String,
        ip: IpAddr,
        fqdn: String,
    },
    UnbindNames {
        port_id: String,
        view: String,
        ip: IpAddr,
        fqdn: String,
    },
}

/// In-memory backend that records every call it receives.
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GridBackend for RecordingBackend {
    async fn create_zone(
        &self,
        view: &str,
        name: &str,
        options: &CreateZoneOptions,
    ) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(BackendCall::CreateZone {
            view: view.to_string(),
            name: name.to_string(),
            options: options.clone(),
        });
        Ok(())
    }

    async fn delete_zone(&self, view: &str, name: &str) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(BackendCall::DeleteZone {
            view: view.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }

    async fn bind_names(
        &self,
        port_id: &str,
        view: &str,
        ip: IpAddr,
        fqdn: &str,
        _reserved: Option<&ExtAttrs>,
    ) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(BackendCall::BindNames {
            port_id: port_id.to_string(),
            view: view.to_string(),
            ip,
            fqdn: fqdn.to_string(),
        });
        Ok(())
    }

    async fn unbind_names(
        &self,
        port_id: &str,
        view: &str,
        ip: IpAddr,
        fqdn: &str,
        _reserved: Option<&ExtAttrs>,
    ) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(BackendCall::UnbindNames {
            port_id: port_id.to_string(),
            view: view.to_string(),
            ip,
            fqdn: fqdn.to_string(),
        });
        Ok(())
    }
}

/// Minimal renderer: substitutes the identity tokens this suite uses and
/// passes host templates through unchanged.
pub struct SubstitutingResolver;

impl PatternResolver for SubstitutingResolver {
    fn resolve_zone_name(
        &self,
        pattern: &str,
        ctx: &OperationContext,
    ) -> Result<String, ResolutionError> {
        let resolved = pattern
            .replace("{subnet_id}", &ctx.subnet.id)
            .replace("{subnet_name}", &ctx.subnet.name)
            .replace("{network_id}", &ctx.network.id)
            .replace("{tenant_id}", &ctx.subnet.tenant_id);
        if resolved.is_empty() {
            return Err(ResolutionError::EmptyResult {
                pattern: pattern.to_string(),
            });
        }
        Ok(resolved)
    }

    fn resolve_host_name(
        &self,
        template: &str,
        _ctx: &OperationContext,
    ) -> Result<String, ResolutionError> {
        Ok(template.to_string())
    }
}

/// Reference counter answering every query with a fixed result.
pub struct StaticRefCounter {
    queries: Mutex<Vec<&'static str>>,
    is_last: bool,
}

impl StaticRefCounter {
    pub fn answering(is_last: bool) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            is_last,
        }
    }

    pub fn queries(&self) -> Vec<&'static str> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubnetReferenceCounter for StaticRefCounter {
    async fn is_last_subnet_in_network(&self, _network_id: &str) -> Result<bool, BackendError> {
        self.queries.lock().unwrap().push("last_in_network");
        Ok(self.is_last)
    }

    async fn is_last_subnet_in_tenant(&self, _tenant_id: &str) -> Result<bool, BackendError> {
        self.queries.lock().unwrap().push("last_in_tenant");
        Ok(self.is_last)
    }

    async fn is_last_subnet_in_address_scope(
        &self,
        _address_scope_id: &str,
    ) -> Result<bool, BackendError> {
        self.queries.lock().unwrap().push("last_in_address_scope");
        Ok(self.is_last)
    }

    async fn is_last_subnet_in_private_networks(
        &self,
        _network_id: &str,
        _tenant_id: &str,
    ) -> Result<bool, BackendError> {
        self.queries
            .lock()
            .unwrap()
            .push("last_in_private_networks");
        Ok(self.is_last)
    }
}

/// Build a private-network context with the given zone-name pattern.
pub fn operation_context(pattern: &str) -> OperationContext {
    OperationContext {
        network: Network {
            id: "net-0001".to_string(),
            tenant_id: "tenant-0001".to_string(),
            is_external: false,
            is_shared: false,
        },
        subnet: Subnet {
            id: "sub-0001".to_string(),
            name: "front-tier".to_string(),
            tenant_id: "tenant-0001".to_string(),
            network_id: "net-0001".to_string(),
            cidr: "10.20.1.0/24".to_string(),
            ip_version: IpVersion::V4,
            address_scope_id: None,
        },
        mapping: ViewMapping {
            dns_view: "default".to_string(),
            is_shared_view: false,
        },
        policy: GridPolicy {
            default_domain_pattern: pattern.to_string(),
            grid_primary: vec![Server::new("ns1.cloud.example.com")],
            grid_secondaries: vec![Server::new("ns2.cloud.example.com")],
            ..GridPolicy::default()
        },
    }
}

/// Build the three fakes wired behind a controller, keeping handles to
/// inspect afterwards.
pub fn fakes() -> (Arc<SubstitutingResolver>, Arc<RecordingBackend>, Arc<StaticRefCounter>) {
    (
        Arc::new(SubstitutingResolver),
        Arc::new(RecordingBackend::default()),
        Arc::new(StaticRefCounter::answering(true)),
    )
}

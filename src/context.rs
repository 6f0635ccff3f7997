// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Caller-owned data model for zone lifecycle operations.
//!
//! Every controller call receives an [`OperationContext`] bundling the
//! network and subnet attributes of the lifecycle event, the DNS view
//! mapping, and the grid policy configuration. The context is supplied by
//! the orchestration layer and is read-only to this crate.
//!
//! # Example
//!
//! ```rust
//! use gridzone::context::{
//!     GridPolicy, IpVersion, Network, OperationContext, Subnet, ViewMapping,
//! };
//!
//! let ctx = OperationContext {
//!     network: Network {
//!         id: "network-id".to_string(),
//!         tenant_id: "tenant-id".to_string(),
//!         is_external: false,
//!         is_shared: false,
//!     },
//!     subnet: Subnet {
//!         id: "subnet-id".to_string(),
//!         name: "front-tier".to_string(),
//!         tenant_id: "tenant-id".to_string(),
//!         network_id: "network-id".to_string(),
//!         cidr: "10.20.1.0/24".to_string(),
//!         ip_version: IpVersion::V4,
//!         address_scope_id: None,
//!     },
//!     mapping: ViewMapping {
//!         dns_view: "default".to_string(),
//!         is_shared_view: false,
//!     },
//!     policy: GridPolicy {
//!         default_domain_pattern: "{network_name}.cloud.example.com".to_string(),
//!         ..GridPolicy::default()
//!     },
//! };
//! assert_eq!(ctx.subnet.ip_version.zone_format(), "IPV4");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{ZONE_FORMAT_IPV4, ZONE_FORMAT_IPV6};

/// Extensible attributes attached to zones and bindings in the grid backend.
///
/// Keys and values are opaque to this crate and passed through unchanged.
pub type ExtAttrs = BTreeMap<String, serde_json::Value>;

/// IP version of a subnet.
///
/// Serialized as the bare protocol number (`4` or `6`), matching what the
/// orchestration layer reports for a subnet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IpVersion {
    /// IPv4
    V4,
    /// IPv6
    V6,
}

impl IpVersion {
    /// Reverse-mapping zone format string for this IP version (`IPV4`/`IPV6`).
    #[must_use]
    pub fn zone_format(self) -> &'static str {
        match self {
            Self::V4 => ZONE_FORMAT_IPV4,
            Self::V6 => ZONE_FORMAT_IPV6,
        }
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(format!("unsupported IP version: {other}")),
        }
    }
}

impl From<IpVersion> for u8 {
    fn from(value: IpVersion) -> Self {
        match value {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

/// Virtual network attributes relevant to zone lifecycle decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Network identifier assigned by the orchestration layer
    pub id: String,

    /// Tenant that owns the network
    pub tenant_id: String,

    /// Whether the network provides external (provider) connectivity
    #[serde(default)]
    pub is_external: bool,

    /// Whether the network is shared across tenants
    #[serde(default)]
    pub is_shared: bool,
}

/// Subnet attributes relevant to zone lifecycle decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    /// Subnet identifier assigned by the orchestration layer
    pub id: String,

    /// Human-assigned subnet name
    pub name: String,

    /// Tenant that owns the subnet
    pub tenant_id: String,

    /// Network the subnet belongs to
    pub network_id: String,

    /// Subnet prefix in CIDR notation; keys the reverse-mapping zone
    pub cidr: String,

    /// IP version of the subnet prefix
    pub ip_version: IpVersion,

    /// Address scope the subnet pool belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_scope_id: Option<String>,
}

/// Mapping of the network onto a DNS view in the grid backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewMapping {
    /// DNS view the network's zones live in
    pub dns_view: String,

    /// Whether the view is shared across networks.
    ///
    /// Forward zones in a shared view are never deleted by this controller.
    #[serde(default)]
    pub is_shared_view: bool,
}

/// Opaque name-server descriptor in the grid backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Backend name of the server
    pub name: String,
}

impl Server {
    /// Create a server descriptor from its backend name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Grid-wide policy configuration for zone creation and deletion.
///
/// Loaded by the host from its configuration store (see [`crate::config`])
/// and handed to the controller on every call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridPolicy {
    /// Name-server group to serve new forward zones.
    ///
    /// Mutually exclusive with `grid_primary`/`grid_secondaries`: when set,
    /// zone creation never passes explicit servers, and vice versa.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ns_group: Option<String>,

    /// Explicit primary name servers for new zones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grid_primary: Vec<Server>,

    /// Explicit secondary name servers for new zones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grid_secondaries: Vec<Server>,

    /// Zone-name template; its tokens determine the zone's sharing scope
    pub default_domain_pattern: String,

    /// Whether forward zones of shared networks may be deleted at all
    #[serde(default)]
    pub admin_network_deletion_allowed: bool,

    /// Extensible attributes stamped onto every created zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<ExtAttrs>,
}

/// Read-only bundle of everything a single lifecycle call needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationContext {
    /// Network the event applies to
    pub network: Network,

    /// Subnet the event applies to
    pub subnet: Subnet,

    /// DNS view mapping for the network
    pub mapping: ViewMapping,

    /// Grid policy configuration
    pub policy: GridPolicy,
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Grid backend seam: zone CRUD and host-name binding.
//!
//! The IPAM/DNS backend is an external collaborator. This crate never
//! talks a wire protocol itself; it drives a [`GridBackend`]
//! implementation supplied by the host. Idempotency of zone creation and
//! the consistency of concurrent deletions are the backend's
//! responsibility.

use async_trait::async_trait;
use serde::Serialize;
use std::net::IpAddr;

use crate::context::{ExtAttrs, Server};
use crate::errors::BackendError;

/// Optional parameters for a zone-create call.
///
/// Forward zones carry exactly one of two mutually exclusive server
/// shapes: a name-server group, or explicit primary/secondary servers.
/// Reverse zones additionally carry a `zone_format` (`IPV4`/`IPV6`) and
/// never explicit secondaries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CreateZoneOptions {
    /// Name-server group to serve the zone
    pub ns_group: Option<String>,

    /// Explicit primary name servers
    pub grid_primary: Option<Vec<Server>>,

    /// Explicit secondary name servers
    pub grid_secondaries: Option<Vec<Server>>,

    /// Reverse-zone prefix override, if any
    pub prefix: Option<String>,

    /// Reverse-mapping zone format (`IPV4`/`IPV6`)
    pub zone_format: Option<String>,

    /// Extensible attributes stamped onto the zone
    pub extattrs: Option<ExtAttrs>,
}

/// IPAM/DNS backend client consumed by the lifecycle controller.
///
/// All errors propagate to the controller's caller unmodified; no retry
/// or backoff happens at this layer.
#[async_trait]
pub trait GridBackend: Send + Sync {
    /// Create a zone in the given DNS view.
    ///
    /// Creation is expected to be idempotent per `(view, name)`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend rejects or cannot
    /// complete the call.
    async fn create_zone(
        &self,
        view: &str,
        name: &str,
        options: &CreateZoneOptions,
    ) -> Result<(), BackendError>;

    /// Delete a zone from the given DNS view.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend rejects or cannot
    /// complete the call.
    async fn delete_zone(&self, view: &str, name: &str) -> Result<(), BackendError>;

    /// Publish a host-to-address name binding for a port.
    ///
    /// The `reserved` slot is carried through uninterpreted.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend rejects or cannot
    /// complete the call.
    async fn bind_names(
        &self,
        port_id: &str,
        view: &str,
        ip: IpAddr,
        fqdn: &str,
        reserved: Option<&ExtAttrs>,
    ) -> Result<(), BackendError>;

    /// Retract a host-to-address name binding for a port.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend rejects or cannot
    /// complete the call.
    async fn unbind_names(
        &self,
        port_id: &str,
        view: &str,
        ip: IpAddr,
        fqdn: &str,
        reserved: Option<&ExtAttrs>,
    ) -> Result<(), BackendError>;
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone lifecycle controller.
//!
//! [`ZoneLifecycleController`] is invoked by the orchestration layer on
//! subnet and port lifecycle events:
//!
//! - [`create_zones`](ZoneLifecycleController::create_zones) on subnet
//!   creation: creates the forward zone (name-server group or explicit
//!   servers, per policy) and the CIDR-keyed reverse zone.
//! - [`delete_zones`](ZoneLifecycleController::delete_zones) on subnet
//!   deletion: always removes the reverse zone, and removes the forward
//!   zone only when the rule table in [`crate::decision`] allows it.
//! - [`bind_name`](ZoneLifecycleController::bind_name) /
//!   [`unbind_name`](ZoneLifecycleController::unbind_name) on port IP
//!   allocation/deallocation: publishes or retracts
//!   `"{hostname}.{zone}"`, gated on the port having a recognized owner
//!   kind.
//!
//! The controller holds no state of its own; every call is independent.
//! Cross-call state (zone existence, reference counts) lives behind the
//! injected collaborator seams.

use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::backend::{CreateZoneOptions, GridBackend};
use crate::context::OperationContext;
use crate::decision::{decide_forward_zone_deletion, ReferenceQuery};
use crate::errors::GridError;
use crate::metrics;
use crate::pattern::PatternResolver;
use crate::refcount::SubnetReferenceCounter;

/// Decides which DNS zones to create or remove for network lifecycle
/// events, and whether to publish name bindings for ports.
pub struct ZoneLifecycleController {
    resolver: Arc<dyn PatternResolver>,
    backend: Arc<dyn GridBackend>,
    refcount: Arc<dyn SubnetReferenceCounter>,
}

impl ZoneLifecycleController {
    /// Build a controller from its collaborator seams.
    #[must_use]
    pub fn new(
        resolver: Arc<dyn PatternResolver>,
        backend: Arc<dyn GridBackend>,
        refcount: Arc<dyn SubnetReferenceCounter>,
    ) -> Self {
        Self {
            resolver,
            backend,
            refcount,
        }
    }

    /// Create the forward and reverse zones for a new subnet.
    ///
    /// The forward zone is created with exactly one of two mutually
    /// exclusive server shapes: the policy's name-server group when set,
    /// otherwise its explicit primary/secondary servers. The reverse zone
    /// is always created, keyed by the subnet CIDR with an
    /// `IPV4`/`IPV6` zone format; when the name-server group is set it
    /// carries the group and omits explicit primaries.
    ///
    /// # Errors
    ///
    /// Propagates resolver and backend failures unmodified. No rollback:
    /// if the reverse-zone create fails the forward zone remains for the
    /// backend's idempotent create to absorb on retry.
    pub async fn create_zones(&self, ctx: &OperationContext) -> Result<(), GridError> {
        let dns_view = &ctx.mapping.dns_view;
        let policy = &ctx.policy;
        let zone_name = self
            .resolver
            .resolve_zone_name(&policy.default_domain_pattern, ctx)?;

        let forward = if let Some(ns_group) = &policy.ns_group {
            CreateZoneOptions {
                ns_group: Some(ns_group.clone()),
                extattrs: policy.extra_attributes.clone(),
                ..CreateZoneOptions::default()
            }
        } else {
            CreateZoneOptions {
                grid_primary: Some(policy.grid_primary.clone()),
                grid_secondaries: Some(policy.grid_secondaries.clone()),
                extattrs: policy.extra_attributes.clone(),
                ..CreateZoneOptions::default()
            }
        };

        info!(
            view = %dns_view,
            zone = %zone_name,
            ns_group = policy.ns_group.as_deref().unwrap_or(""),
            "Creating forward zone"
        );
        self.backend
            .create_zone(dns_view, &zone_name, &forward)
            .await?;
        metrics::record_zone_create("forward");

        let reverse = CreateZoneOptions {
            ns_group: policy.ns_group.clone(),
            grid_primary: if policy.ns_group.is_some() {
                None
            } else {
                Some(policy.grid_primary.clone())
            },
            zone_format: Some(ctx.subnet.ip_version.zone_format().to_string()),
            extattrs: policy.extra_attributes.clone(),
            ..CreateZoneOptions::default()
        };

        info!(
            view = %dns_view,
            cidr = %ctx.subnet.cidr,
            zone_format = ctx.subnet.ip_version.zone_format(),
            "Creating reverse zone"
        );
        self.backend
            .create_zone(dns_view, &ctx.subnet.cidr, &reverse)
            .await?;
        metrics::record_zone_create("reverse");

        Ok(())
    }

    /// Remove the zones of a deleted subnet.
    ///
    /// The reverse zone is always removed. The forward zone is removed
    /// only when the rule table allows it; when the zone name is shared
    /// wider than this subnet the matching last-reference query is issued
    /// first and its result recorded. The query result does not gate the
    /// delete call.
    ///
    /// # Errors
    ///
    /// Propagates reference-query and backend failures unmodified. If the
    /// forward delete fails, the reverse delete is not attempted.
    pub async fn delete_zones(&self, ctx: &OperationContext) -> Result<(), GridError> {
        let dns_view = &ctx.mapping.dns_view;
        let decision = decide_forward_zone_deletion(ctx);

        if decision.delete_forward_zone {
            let zone_name = self
                .resolver
                .resolve_zone_name(&ctx.policy.default_domain_pattern, ctx)?;

            if let Some(query) = decision.reference_query {
                let is_last = self.run_reference_query(ctx, query).await?;
                debug!(
                    zone = %zone_name,
                    query = query.as_str(),
                    is_last = is_last,
                    "Last-reference query answered"
                );
                metrics::record_reference_query(query.as_str(), is_last);
            }

            info!(view = %dns_view, zone = %zone_name, "Deleting forward zone");
            self.backend.delete_zone(dns_view, &zone_name).await?;
            metrics::record_zone_delete("forward");
        } else if let Some(reason) = decision.keep_reason {
            info!(
                view = %dns_view,
                subnet = %ctx.subnet.id,
                reason = reason.as_str(),
                "Keeping forward zone"
            );
            metrics::record_forward_delete_skipped(reason.as_str());
        }

        info!(view = %dns_view, cidr = %ctx.subnet.cidr, "Deleting reverse zone");
        self.backend.delete_zone(dns_view, &ctx.subnet.cidr).await?;
        metrics::record_zone_delete("reverse");

        Ok(())
    }

    /// Publish a host-name binding for a port's address.
    ///
    /// A port with no recognized owner kind gets no automatic DNS entry:
    /// the call is a no-op, not an error. Otherwise the binding is
    /// published as `"{hostname}.{zone}"` in the mapping's DNS view.
    ///
    /// # Errors
    ///
    /// Propagates resolver and backend failures unmodified.
    pub async fn bind_name(
        &self,
        ctx: &OperationContext,
        ip: IpAddr,
        hostname: &str,
        port_id: &str,
        owner_kind: Option<&str>,
    ) -> Result<(), GridError> {
        let Some(fqdn) = self.binding_fqdn(ctx, hostname, port_id, owner_kind)? else {
            return Ok(());
        };

        info!(port_id = %port_id, ip = %ip, fqdn = %fqdn, "Binding name");
        self.backend
            .bind_names(port_id, &ctx.mapping.dns_view, ip, &fqdn, None)
            .await?;
        metrics::record_name_binding("bind");
        Ok(())
    }

    /// Retract a host-name binding for a port's address.
    ///
    /// Gated identically to [`bind_name`](Self::bind_name).
    ///
    /// # Errors
    ///
    /// Propagates resolver and backend failures unmodified.
    pub async fn unbind_name(
        &self,
        ctx: &OperationContext,
        ip: IpAddr,
        hostname: &str,
        port_id: &str,
        owner_kind: Option<&str>,
    ) -> Result<(), GridError> {
        let Some(fqdn) = self.binding_fqdn(ctx, hostname, port_id, owner_kind)? else {
            return Ok(());
        };

        info!(port_id = %port_id, ip = %ip, fqdn = %fqdn, "Unbinding name");
        self.backend
            .unbind_names(port_id, &ctx.mapping.dns_view, ip, &fqdn, None)
            .await?;
        metrics::record_name_binding("unbind");
        Ok(())
    }

    /// Resolve the fully-qualified name for a binding, or `None` when the
    /// port's owner kind does not warrant automatic DNS.
    fn binding_fqdn(
        &self,
        ctx: &OperationContext,
        hostname: &str,
        port_id: &str,
        owner_kind: Option<&str>,
    ) -> Result<Option<String>, GridError> {
        if owner_kind.is_none_or(str::is_empty) {
            debug!(
                port_id = %port_id,
                "Port has no recognized owner kind, skipping name binding"
            );
            return Ok(None);
        }

        let zone_name = self
            .resolver
            .resolve_zone_name(&ctx.policy.default_domain_pattern, ctx)?;
        let host = self.resolver.resolve_host_name(hostname, ctx)?;
        Ok(Some(format!("{host}.{zone_name}")))
    }

    async fn run_reference_query(
        &self,
        ctx: &OperationContext,
        query: ReferenceQuery,
    ) -> Result<bool, GridError> {
        let is_last = match query {
            ReferenceQuery::LastInNetwork => {
                self.refcount
                    .is_last_subnet_in_network(&ctx.network.id)
                    .await?
            }
            ReferenceQuery::LastInTenant => {
                self.refcount
                    .is_last_subnet_in_tenant(&ctx.subnet.tenant_id)
                    .await?
            }
            ReferenceQuery::LastInAddressScope => {
                self.refcount
                    .is_last_subnet_in_address_scope(
                        ctx.subnet.address_scope_id.as_deref().unwrap_or_default(),
                    )
                    .await?
            }
            ReferenceQuery::LastInPrivateNetworks => {
                self.refcount
                    .is_last_subnet_in_private_networks(&ctx.network.id, &ctx.subnet.tenant_id)
                    .await?
            }
        };
        Ok(is_last)
    }
}

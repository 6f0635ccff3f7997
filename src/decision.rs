// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Forward-zone deletion rule table.
//!
//! The reverse zone is keyed by CIDR, exclusive to its subnet, and always
//! removed with it. Whether the *forward* zone goes too is the decision
//! this module computes. The rules are ordered, first match wins:
//!
//! 1. the DNS view is shared across networks: keep the forward zone
//! 2. the network is external: keep the forward zone
//! 3. the network is shared and administrative deletion is not allowed:
//!    keep the forward zone
//! 4. otherwise delete it, consulting a reference-count query first when
//!    the zone name is shared wider than this subnet
//!
//! The decision is pure: it reads the [`OperationContext`] and produces a
//! [`DeleteDecision`] without touching any collaborator, so the whole
//! table is unit-testable in isolation. The controller executes it.

use crate::context::OperationContext;
use crate::pattern::ZonePatternKind;

/// Why a forward zone was left in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardZoneKeepReason {
    /// The DNS view itself is shared across networks
    SharedView,
    /// The network provides external connectivity
    ExternalNetwork,
    /// The network is shared and administrative deletion is disallowed
    SharedNetworkProtected,
}

impl ForwardZoneKeepReason {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SharedView => "shared_view",
            Self::ExternalNetwork => "external_network",
            Self::SharedNetworkProtected => "shared_network_protected",
        }
    }
}

/// Which last-reference query accompanies a forward-zone deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceQuery {
    /// Last subnet in the network
    LastInNetwork,
    /// Last subnet in the tenant
    LastInTenant,
    /// Last subnet in the address scope
    LastInAddressScope,
    /// Last subnet across the private networks sharing the zone
    LastInPrivateNetworks,
}

impl ReferenceQuery {
    /// Stable label for logs and metrics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastInNetwork => "last_in_network",
            Self::LastInTenant => "last_in_tenant",
            Self::LastInAddressScope => "last_in_address_scope",
            Self::LastInPrivateNetworks => "last_in_private_networks",
        }
    }
}

/// Outcome of the deletion rule table for one subnet-delete event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteDecision {
    /// Whether the forward zone is removed
    pub delete_forward_zone: bool,

    /// Whether the reverse zone is removed. Always true: the reverse
    /// zone is subnet-exclusive.
    pub delete_reverse_zone: bool,

    /// Last-reference query to issue alongside a forward-zone delete
    pub reference_query: Option<ReferenceQuery>,

    /// Populated when the forward zone is kept
    pub keep_reason: Option<ForwardZoneKeepReason>,
}

impl DeleteDecision {
    fn keep(reason: ForwardZoneKeepReason) -> Self {
        Self {
            delete_forward_zone: false,
            delete_reverse_zone: true,
            reference_query: None,
            keep_reason: Some(reason),
        }
    }

    fn delete(reference_query: Option<ReferenceQuery>) -> Self {
        Self {
            delete_forward_zone: true,
            delete_reverse_zone: true,
            reference_query,
            keep_reason: None,
        }
    }
}

/// Apply the deletion rule table to a subnet-delete event.
///
/// On the shared-network path (reachable only with administrative
/// deletion allowed) the accompanying query is always
/// [`ReferenceQuery::LastInPrivateNetworks`]. On the private-network path
/// the query follows the pattern kind: subnet-scoped and static zone
/// names need no check (the subnet-scoped name is unique to this subnet;
/// the static zone is removed per policy), the wider scopes ask whether a
/// sibling subnet still shares the name.
#[must_use]
pub fn decide_forward_zone_deletion(ctx: &OperationContext) -> DeleteDecision {
    if ctx.mapping.is_shared_view {
        return DeleteDecision::keep(ForwardZoneKeepReason::SharedView);
    }
    if ctx.network.is_external {
        return DeleteDecision::keep(ForwardZoneKeepReason::ExternalNetwork);
    }
    if ctx.network.is_shared && !ctx.policy.admin_network_deletion_allowed {
        return DeleteDecision::keep(ForwardZoneKeepReason::SharedNetworkProtected);
    }

    if ctx.network.is_shared {
        return DeleteDecision::delete(Some(ReferenceQuery::LastInPrivateNetworks));
    }

    let query = match ZonePatternKind::from_pattern(&ctx.policy.default_domain_pattern) {
        ZonePatternKind::Static | ZonePatternKind::SubnetScoped => None,
        ZonePatternKind::NetworkScoped => Some(ReferenceQuery::LastInNetwork),
        ZonePatternKind::TenantScoped => Some(ReferenceQuery::LastInTenant),
        ZonePatternKind::AddressScopeScoped => Some(ReferenceQuery::LastInAddressScope),
    };
    DeleteDecision::delete(query)
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone-name pattern classification and the resolver seam.
//!
//! The grid policy carries a zone-name template such as
//! `{network_name}.cloud.example.com`. Which substitution token the
//! template contains determines the *sharing scope* of the resolved zone:
//! a subnet-scoped zone name is unique to one subnet, a tenant-scoped one
//! is shared by every subnet of the tenant, and a tokenless template names
//! a single static zone shared by everything. The deletion rules in
//! [`crate::decision`] switch on this classification.
//!
//! Rendering a template into a concrete zone or host name is the job of an
//! external [`PatternResolver`] implementation; this crate only inspects
//! the template lexically.

use serde::{Deserialize, Serialize};

use crate::constants::{
    TOKEN_ADDRESS_SCOPE_ID, TOKEN_ADDRESS_SCOPE_NAME, TOKEN_NETWORK_ID, TOKEN_NETWORK_NAME,
    TOKEN_SUBNET_ID, TOKEN_SUBNET_NAME, TOKEN_TENANT_ID, TOKEN_TENANT_NAME,
};
use crate::context::OperationContext;
use crate::errors::ResolutionError;

/// Sharing scope of a zone-name template, derived from its tokens.
///
/// Exactly one kind applies per template. Detection is purely lexical:
/// the first matching token family wins, checked narrowest-first
/// (subnet, network, tenant, address scope). A template with no
/// recognized token is [`Static`](Self::Static).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZonePatternKind {
    /// Fixed zone name, shared by every subnet under the policy
    Static,
    /// Zone name unique per subnet
    SubnetScoped,
    /// Zone name shared by all subnets of a network
    NetworkScoped,
    /// Zone name shared by all subnets of a tenant
    TenantScoped,
    /// Zone name shared by all subnets of an address scope
    AddressScopeScoped,
}

impl ZonePatternKind {
    /// Classify a zone-name template by the tokens it contains.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        if pattern.contains(TOKEN_SUBNET_ID) || pattern.contains(TOKEN_SUBNET_NAME) {
            Self::SubnetScoped
        } else if pattern.contains(TOKEN_NETWORK_ID) || pattern.contains(TOKEN_NETWORK_NAME) {
            Self::NetworkScoped
        } else if pattern.contains(TOKEN_TENANT_ID) || pattern.contains(TOKEN_TENANT_NAME) {
            Self::TenantScoped
        } else if pattern.contains(TOKEN_ADDRESS_SCOPE_ID)
            || pattern.contains(TOKEN_ADDRESS_SCOPE_NAME)
        {
            Self::AddressScopeScoped
        } else {
            Self::Static
        }
    }

    /// Stable label for logs and metrics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::SubnetScoped => "subnet",
            Self::NetworkScoped => "network",
            Self::TenantScoped => "tenant",
            Self::AddressScopeScoped => "address_scope",
        }
    }
}

impl std::fmt::Display for ZonePatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders naming templates into concrete zone and host names.
///
/// Implemented by the host's pattern renderer; the template syntax itself
/// is owned by that collaborator. Rendering is pure and synchronous.
pub trait PatternResolver: Send + Sync {
    /// Resolve the forward zone name for the event's subnet.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if the template references identity
    /// the context cannot supply, or renders to an empty name.
    fn resolve_zone_name(
        &self,
        pattern: &str,
        ctx: &OperationContext,
    ) -> Result<String, ResolutionError>;

    /// Resolve the host portion of a name binding.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] if the template cannot be rendered
    /// from the given context.
    fn resolve_host_name(
        &self,
        template: &str,
        ctx: &OperationContext,
    ) -> Result<String, ResolutionError>;
}

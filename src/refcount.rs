// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reference-counting seam for shared forward zones.
//!
//! A forward zone whose name is scoped wider than a single subnet may
//! still be referenced by sibling subnets when one subnet goes away. The
//! host answers "is this the last subnet in X" from its persistence
//! layer; atomicity of the last-reference check is the host's concern.

use async_trait::async_trait;

use crate::errors::BackendError;

/// Queries answering whether the departing subnet is the last reference
/// to a shared zone name within some scope.
#[async_trait]
pub trait SubnetReferenceCounter: Send + Sync {
    /// Is this the last subnet in the network?
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the query cannot be answered.
    async fn is_last_subnet_in_network(&self, network_id: &str) -> Result<bool, BackendError>;

    /// Is this the last subnet in the tenant?
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the query cannot be answered.
    async fn is_last_subnet_in_tenant(&self, tenant_id: &str) -> Result<bool, BackendError>;

    /// Is this the last subnet in the address scope?
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the query cannot be answered.
    async fn is_last_subnet_in_address_scope(
        &self,
        address_scope_id: &str,
    ) -> Result<bool, BackendError>;

    /// Is this the last subnet across the private networks sharing the
    /// zone? Used when a shared network's forward zone is removed under
    /// the administrative deletion policy.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the query cannot be answered.
    async fn is_last_subnet_in_private_networks(
        &self,
        network_id: &str,
        tenant_id: &str,
    ) -> Result<bool, BackendError>;
}

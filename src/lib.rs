// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Gridzone - DNS Zone Lifecycle Controller
//!
//! Gridzone sits between a cloud network-orchestration layer and an
//! IPAM/DNS grid backend. Given a subnet lifecycle event and the grid's
//! naming-pattern/policy configuration, it decides exactly which DNS
//! zones (forward and reverse) must be created or removed, and whether
//! host-to-address name bindings should be published for a port.
//!
//! ## Overview
//!
//! The crate is a library invoked by the surrounding orchestration layer
//! on subnet and port events. It owns the decision rules; everything
//! stateful is behind injected collaborator seams:
//!
//! - [`pattern::PatternResolver`] - renders naming templates into zone
//!   and host names
//! - [`backend::GridBackend`] - zone CRUD and name binding against the
//!   IPAM/DNS backend
//! - [`refcount::SubnetReferenceCounter`] - "is this the last subnet"
//!   queries for shared forward zones
//!
//! ## Modules
//!
//! - [`context`] - caller-owned data model for lifecycle calls
//! - [`controller`] - the lifecycle controller itself
//! - [`decision`] - the forward-zone deletion rule table
//! - [`pattern`] - zone-name pattern classification and resolver seam
//! - [`config`] - grid policy loading from YAML
//! - [`metrics`] - Prometheus counters for lifecycle operations
//!
//! ## Example
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! use gridzone::controller::ZoneLifecycleController;
//!
//! # async fn example(
//! #     resolver: Arc<dyn gridzone::pattern::PatternResolver>,
//! #     backend: Arc<dyn gridzone::backend::GridBackend>,
//! #     refcount: Arc<dyn gridzone::refcount::SubnetReferenceCounter>,
//! #     ctx: gridzone::context::OperationContext,
//! # ) -> Result<(), gridzone::errors::GridError> {
//! let controller = ZoneLifecycleController::new(resolver, backend, refcount);
//!
//! // On subnet creation:
//! controller.create_zones(&ctx).await?;
//!
//! // On subnet deletion:
//! controller.delete_zones(&ctx).await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod constants;
pub mod context;
pub mod controller;
pub mod decision;
pub mod errors;
pub mod metrics;
pub mod pattern;
pub mod refcount;

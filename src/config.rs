// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Grid policy configuration loading.
//!
//! The host supplies a [`GridPolicy`] on every call; this module loads
//! one from a YAML document, the same declarative shape the rest of the
//! stack uses for configuration. Unknown fields are rejected so a typo'd
//! policy fails at load time instead of silently changing deletion
//! behavior.
//!
//! ```yaml
//! ns_group: prod-dns-group
//! default_domain_pattern: "{tenant_name}.cloud.example.com"
//! admin_network_deletion_allowed: false
//! extra_attributes:
//!   "Cloud Adapter ID": "gridzone"
//! ```

use anyhow::{Context, Result};
use std::path::Path;

use crate::context::GridPolicy;

/// Parse a [`GridPolicy`] from a YAML document.
///
/// # Errors
///
/// Returns an error if the document is not valid YAML, is missing
/// `default_domain_pattern`, or contains unknown fields.
pub fn grid_policy_from_yaml(yaml: &str) -> Result<GridPolicy> {
    serde_yaml::from_str(yaml).context("Failed to parse grid policy YAML")
}

/// Load a [`GridPolicy`] from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_grid_policy(path: impl AsRef<Path>) -> Result<GridPolicy> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read grid policy file {}", path.display()))?;
    grid_policy_from_yaml(&raw)
        .with_context(|| format!("Invalid grid policy in {}", path.display()))
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Gridzone controller.
//!
//! This module contains all string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Zone Name Pattern Tokens
// ============================================================================

/// Substitution token scoping the zone name to a subnet by id
pub const TOKEN_SUBNET_ID: &str = "{subnet_id}";

/// Substitution token scoping the zone name to a subnet by name
pub const TOKEN_SUBNET_NAME: &str = "{subnet_name}";

/// Substitution token scoping the zone name to a network by id
pub const TOKEN_NETWORK_ID: &str = "{network_id}";

/// Substitution token scoping the zone name to a network by name
pub const TOKEN_NETWORK_NAME: &str = "{network_name}";

/// Substitution token scoping the zone name to a tenant by id
pub const TOKEN_TENANT_ID: &str = "{tenant_id}";

/// Substitution token scoping the zone name to a tenant by name
pub const TOKEN_TENANT_NAME: &str = "{tenant_name}";

/// Substitution token scoping the zone name to an address scope by id
pub const TOKEN_ADDRESS_SCOPE_ID: &str = "{address_scope_id}";

/// Substitution token scoping the zone name to an address scope by name
pub const TOKEN_ADDRESS_SCOPE_NAME: &str = "{address_scope_name}";

// ============================================================================
// Port Owner Kinds
// ============================================================================

/// Owner kind for DHCP-managed ports
pub const OWNER_KIND_DHCP: &str = "network:dhcp";

/// Owner kind for router interface ports
pub const OWNER_KIND_ROUTER_INTERFACE: &str = "network:router_interface";

/// Owner kind for floating IP ports
pub const OWNER_KIND_FLOATING_IP: &str = "network:floatingip";

// ============================================================================
// Reverse Zone Formats
// ============================================================================

/// Reverse-mapping zone format for IPv4 subnets
pub const ZONE_FORMAT_IPV4: &str = "IPV4";

/// Reverse-mapping zone format for IPv6 subnets
pub const ZONE_FORMAT_IPV6: &str = "IPV6";

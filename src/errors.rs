// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for zone lifecycle operations.
//!
//! Two failure sources exist: the grid backend (zone CRUD and name
//! binding) and the naming-pattern resolver. Both propagate to the caller
//! unmodified through the composite [`GridError`]; this crate performs no
//! retries and no partial rollback.

use thiserror::Error;

/// Errors surfaced by the grid backend client.
///
/// These represent failures when issuing zone or binding operations to the
/// IPAM/DNS backend, whatever its transport.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    /// Zone creation failed (conflict, invalid parameters, backend fault)
    #[error("Failed to create zone '{zone}' in view '{view}': {reason}")]
    ZoneCreationFailed {
        /// DNS view the zone was created in
        view: String,
        /// The zone name that failed to create
        zone: String,
        /// Specific reason for the failure
        reason: String,
    },

    /// Zone deletion failed
    #[error("Failed to delete zone '{zone}' in view '{view}': {reason}")]
    ZoneDeletionFailed {
        /// DNS view the zone lives in
        view: String,
        /// The zone name that failed to delete
        zone: String,
        /// Specific reason for the failure
        reason: String,
    },

    /// Publishing or retracting a host-name binding failed
    #[error("Failed to bind name '{fqdn}': {reason}")]
    BindingFailed {
        /// The fully-qualified name being bound or unbound
        fqdn: String,
        /// Specific reason for the failure
        reason: String,
    },

    /// The backend could not be reached at all
    #[error("Grid backend unavailable: {reason}")]
    Unavailable {
        /// Reason the backend is unreachable
        reason: String,
    },

    /// Generic error for operations that don't fit other categories
    #[error("Grid operation failed: {0}")]
    Generic(String),
}

/// Errors from the naming-pattern resolver.
///
/// Raised when the zone-name or host-name template cannot produce a
/// concrete string from the given context.
#[derive(Error, Debug, Clone)]
pub enum ResolutionError {
    /// A substitution token has no value in the current context
    #[error("Pattern '{pattern}' contains token '{token}' with no value in this context")]
    UnresolvedToken {
        /// The template being rendered
        pattern: String,
        /// The token that could not be substituted
        token: String,
    },

    /// The template rendered to an empty string
    #[error("Pattern '{pattern}' resolved to an empty zone name")]
    EmptyResult {
        /// The template being rendered
        pattern: String,
    },
}

/// Composite error type returned by the lifecycle controller.
#[derive(Error, Debug, Clone)]
pub enum GridError {
    /// Grid backend failure
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Naming-pattern resolution failure
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl GridError {
    /// Returns true if this error is transient and the operation may be
    /// retried by the caller.
    ///
    /// Backend faults are considered transient (the backend or the network
    /// path to it may recover); resolution failures are configuration
    /// errors and retrying cannot fix them.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Backend(_) => true,
            Self::Resolution(_) => false,
        }
    }

    /// Returns a stable reason code for this error.
    ///
    /// Used by hosts that surface lifecycle failures as structured status
    /// conditions or metrics labels.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::Backend(BackendError::ZoneCreationFailed { .. }) => "ZoneCreationFailed",
            Self::Backend(BackendError::ZoneDeletionFailed { .. }) => "ZoneDeletionFailed",
            Self::Backend(BackendError::BindingFailed { .. }) => "BindingFailed",
            Self::Backend(BackendError::Unavailable { .. }) => "BackendUnavailable",
            Self::Backend(BackendError::Generic(_)) => "GridOperationFailed",
            Self::Resolution(ResolutionError::UnresolvedToken { .. }) => "UnresolvedToken",
            Self::Resolution(ResolutionError::EmptyResult { .. }) => "EmptyZoneName",
        }
    }
}

// Conversion from anyhow::Error for backend implementations built on it
impl From<anyhow::Error> for BackendError {
    fn from(err: anyhow::Error) -> Self {
        Self::Generic(err.to_string())
    }
}

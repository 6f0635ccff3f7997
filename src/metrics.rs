// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Prometheus metrics for the Gridzone controller.
//!
//! All metrics are registered in a global registry under the `gridzone_`
//! namespace. The crate only records; serving the registry (or merging it
//! into a host registry) is the embedding process's job via
//! [`gather_metrics`].

use prometheus::{CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::LazyLock;

/// Namespace prefix for all Gridzone metrics
const METRICS_NAMESPACE: &str = "gridzone";

/// Global Prometheus metrics registry
pub static METRICS_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Total number of zone-create calls issued to the backend
///
/// Labels:
/// - `zone_type`: `forward` or `reverse`
pub static ZONE_CREATES_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_zone_creates_total"),
        "Total number of zone-create calls issued to the backend",
    );
    let counter = CounterVec::new(opts, &["zone_type"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Total number of zone-delete calls issued to the backend
///
/// Labels:
/// - `zone_type`: `forward` or `reverse`
pub static ZONE_DELETES_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_zone_deletes_total"),
        "Total number of zone-delete calls issued to the backend",
    );
    let counter = CounterVec::new(opts, &["zone_type"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Total number of forward-zone deletions skipped by the rule table
///
/// Labels:
/// - `reason`: `shared_view`, `external_network`, `shared_network_protected`
pub static FORWARD_DELETES_SKIPPED_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_forward_deletes_skipped_total"),
        "Total number of forward-zone deletions skipped by the rule table",
    );
    let counter = CounterVec::new(opts, &["reason"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Total number of last-reference queries issued
///
/// Labels:
/// - `query`: which scope was queried
/// - `result`: `true` or `false`
pub static REFERENCE_QUERIES_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_reference_queries_total"),
        "Total number of last-reference queries issued",
    );
    let counter = CounterVec::new(opts, &["query", "result"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Total number of host-name binding operations issued
///
/// Labels:
/// - `operation`: `bind` or `unbind`
pub static NAME_BINDINGS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_name_bindings_total"),
        "Total number of host-name binding operations issued",
    );
    let counter = CounterVec::new(opts, &["operation"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Record a zone-create call.
pub fn record_zone_create(zone_type: &str) {
    ZONE_CREATES_TOTAL.with_label_values(&[zone_type]).inc();
}

/// Record a zone-delete call.
pub fn record_zone_delete(zone_type: &str) {
    ZONE_DELETES_TOTAL.with_label_values(&[zone_type]).inc();
}

/// Record a forward-zone deletion skipped by the rule table.
pub fn record_forward_delete_skipped(reason: &str) {
    FORWARD_DELETES_SKIPPED_TOTAL
        .with_label_values(&[reason])
        .inc();
}

/// Record a last-reference query and its observed result.
pub fn record_reference_query(query: &str, is_last: bool) {
    let result = if is_last { "true" } else { "false" };
    REFERENCE_QUERIES_TOTAL
        .with_label_values(&[query, result])
        .inc();
}

/// Record a host-name binding operation.
pub fn record_name_binding(operation: &str) {
    NAME_BINDINGS_TOTAL.with_label_values(&[operation]).inc();
}

/// Encode all registered metrics in Prometheus text format.
///
/// # Errors
///
/// Returns an error if the encoder fails, which only happens if a metric
/// family cannot be serialized.
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = METRICS_REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

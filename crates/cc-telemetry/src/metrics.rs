//! Prometheus metrics for the composition ledger.
//!
//! All metrics follow the naming convention: `cc_<component>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Composition engine operations by name and outcome
    pub static ref COMPOSITION_OPERATIONS: CounterVec = CounterVec::new(
        Opts::new("cc_composition_operations_total", "Composition engine operations"),
        &["operation", "outcome"]  // outcome: success/failure
    ).expect("metric creation failed");

    /// Rejected authorizations by reason
    pub static ref AUTHORIZATION_FAILURES: CounterVec = CounterVec::new(
        Opts::new("cc_authorization_failures_total", "Rejected signed authorizations"),
        &["reason"]  // reason: expired/cancelled/invalid_signature/unauthorized
    ).expect("metric creation failed");

    /// Digests consumed by successful signed operations
    pub static ref DIGESTS_CONSUMED: Counter = Counter::new(
        "cc_authorization_digests_consumed_total",
        "Digests consumed by successful signed operations"
    ).expect("metric creation failed");

    /// Digests cancelled by the authority
    pub static ref DIGESTS_CANCELLED: Counter = Counter::new(
        "cc_authorization_digests_cancelled_total",
        "Digests explicitly cancelled by the authority"
    ).expect("metric creation failed");

    /// Ledger transactions by outcome
    pub static ref LEDGER_TRANSACTIONS: CounterVec = CounterVec::new(
        Opts::new("cc_ledger_transactions_total", "Ledger transactions applied or rejected"),
        &["outcome"]
    ).expect("metric creation failed");
}

/// Handle for the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Fails if called twice in the same process.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(COMPOSITION_OPERATIONS.clone()),
        Box::new(AUTHORIZATION_FAILURES.clone()),
        Box::new(DIGESTS_CONSUMED.clone()),
        Box::new(DIGESTS_CANCELLED.clone()),
        Box::new(LEDGER_TRANSACTIONS.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record the outcome of a composition operation.
pub fn record_operation(operation: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    COMPOSITION_OPERATIONS
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Record a rejected authorization.
pub fn record_authorization_failure(reason: &str) {
    AUTHORIZATION_FAILURES.with_label_values(&[reason]).inc();
}

/// Record a consumed digest.
pub fn record_digest_consumed() {
    DIGESTS_CONSUMED.inc();
}

/// Record a cancelled digest.
pub fn record_digest_cancelled() {
    DIGESTS_CANCELLED.inc();
}

/// Record the outcome of a ledger transaction.
pub fn record_ledger_transaction(success: bool) {
    let outcome = if success { "applied" } else { "rejected" };
    LEDGER_TRANSACTIONS.with_label_values(&[outcome]).inc();
}

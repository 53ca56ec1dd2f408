//! # Governance Metrics
//!
//! Prometheus metrics for monitoring validator-set governance.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! poa-governance = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `poa_commands_total` - Counter of governance commands (by command and outcome)
//! - `poa_validator_updates_total` - Counter of epoch updates (by kind)
//! - `poa_invariant_violations_total` - Counter of fatal registry corruption

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Governance commands, labeled by command name and outcome
    pub static ref COMMANDS: IntCounterVec = register_int_counter_vec!(
        "poa_commands_total",
        "Total number of governance commands processed",
        &["command", "outcome"]
    )
    .expect("Failed to create COMMANDS metric");

    /// Validator updates emitted at epoch boundaries
    pub static ref VALIDATOR_UPDATES: IntCounterVec = register_int_counter_vec!(
        "poa_validator_updates_total",
        "Total number of validator updates emitted at epoch boundaries",
        &["kind"]
    )
    .expect("Failed to create VALIDATOR_UPDATES metric");

    /// Fatal invariant violations
    pub static ref INVARIANT_VIOLATIONS: IntCounter = register_int_counter!(
        "poa_invariant_violations_total",
        "Total number of registry invariant violations"
    )
    .expect("Failed to create INVARIANT_VIOLATIONS metric");
}

/// Record a processed command. `outcome` is `ok` or an error kind.
#[cfg(feature = "metrics")]
pub fn record_command(command: &str, outcome: &str) {
    COMMANDS.with_label_values(&[command, outcome]).inc();
}

/// Record the updates of one epoch reconciliation
#[cfg(feature = "metrics")]
pub fn record_epoch_updates(added: u64, removed: u64) {
    VALIDATOR_UPDATES.with_label_values(&["add"]).inc_by(added);
    VALIDATOR_UPDATES.with_label_values(&["remove"]).inc_by(removed);
}

#[cfg(feature = "metrics")]
pub fn record_invariant_violation() {
    INVARIANT_VIOLATIONS.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_command(_command: &str, _outcome: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_epoch_updates(_added: u64, _removed: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_invariant_violation() {}

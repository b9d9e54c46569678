//! # bosco-core
//!
//! Deterministic Bosco Gate evaluation engine.
//!
//! This crate computes the two gate formulas and the verdict combining them:
//! - Timeline divergence: `alpha * exp(-decay_rate * (t_now - t_target))`
//! - Stability index: `beta = E * 4π r0² / delta_u²`
//! - Stable iff `beta > 0.5` and `divergence > 0.1`
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output, across runs
//! 2. **Pure**: No I/O during evaluation; loading helpers are separate
//! 3. **Total**: Every finite input yields a result; overflow shows up as infinity
//!
//! ## Example
//!
//! ```rust
//! use bosco_core::{evaluate, GateMessage, GateRequest};
//!
//! let request = GateRequest::new(0.05, 200.0, "Q-Event-42", 900.0, 900.0);
//! let result = evaluate(&request);
//!
//! assert!(result.is_stable);
//! println!("{}", GateMessage::from_result(&request, &result));
//! ```

pub mod config;
pub mod evaluator;
pub mod gate;
pub mod limits;
pub mod report;
pub mod request;
pub mod types;

// Re-export main types at crate root
pub use config::{ConfigError, GateConfig};
pub use evaluator::GateEvaluator;
pub use gate::{
    compute_divergence, compute_stability, Fnv1aSeed, LabelSeed, ProcessSeed, Stability,
    Thresholds,
};
pub use report::GateMessage;
pub use request::RequestError;
pub use types::{GateRequest, GateResult};

/// Evaluate a request with the default configuration and FNV-1a seed.
///
/// This is the main entry point for the gate.
pub fn evaluate(request: &GateRequest) -> GateResult {
    GateEvaluator::new().evaluate(request)
}

/// Evaluate from bare inputs.
///
/// Equivalent to building a `GateRequest` with an explicit decay rate.
pub fn evaluate_inputs(
    throat_radius: f64,
    exotic_energy_density: f64,
    state_label: &str,
    current_time: f64,
    target_time: f64,
    decay_rate: f64,
) -> GateResult {
    let request = GateRequest::new(
        throat_radius,
        exotic_energy_density,
        state_label,
        current_time,
        target_time,
    )
    .with_decay_rate(decay_rate);
    evaluate(&request)
}

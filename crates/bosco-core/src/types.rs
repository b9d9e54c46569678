//! Request and result types for gate evaluation.

use serde::{Deserialize, Serialize};

use crate::limits::{
    DEFAULT_CURRENT_TIME, DEFAULT_EXOTIC_ENERGY_DENSITY, DEFAULT_STATE_LABEL,
    DEFAULT_TARGET_TIME, DEFAULT_THROAT_RADIUS,
};

/// Inputs for one gate evaluation.
///
/// Missing fields take the defaults of the input controls. `decay_rate` is
/// optional; when absent the evaluator's configured decay rate applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateRequest {
    /// Throat radius r0
    #[serde(default = "default_throat_radius")]
    pub throat_radius: f64,

    /// Exotic energy density
    #[serde(default = "default_exotic_energy_density")]
    pub exotic_energy_density: f64,

    /// Quantum state label, only used to seed alpha
    #[serde(default = "default_state_label")]
    pub state_label: String,

    /// Current time (t_now)
    #[serde(default = "default_current_time")]
    pub current_time: f64,

    /// Target time (t_target)
    #[serde(default = "default_target_time")]
    pub target_time: f64,

    /// Divergence decay rate (lambda)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_rate: Option<f64>,
}

fn default_throat_radius() -> f64 {
    DEFAULT_THROAT_RADIUS
}

fn default_exotic_energy_density() -> f64 {
    DEFAULT_EXOTIC_ENERGY_DENSITY
}

fn default_state_label() -> String {
    DEFAULT_STATE_LABEL.to_string()
}

fn default_current_time() -> f64 {
    DEFAULT_CURRENT_TIME
}

fn default_target_time() -> f64 {
    DEFAULT_TARGET_TIME
}

impl Default for GateRequest {
    fn default() -> Self {
        Self {
            throat_radius: DEFAULT_THROAT_RADIUS,
            exotic_energy_density: DEFAULT_EXOTIC_ENERGY_DENSITY,
            state_label: DEFAULT_STATE_LABEL.to_string(),
            current_time: DEFAULT_CURRENT_TIME,
            target_time: DEFAULT_TARGET_TIME,
            decay_rate: None,
        }
    }
}

impl GateRequest {
    /// Create a request with no explicit decay rate.
    pub fn new(
        throat_radius: f64,
        exotic_energy_density: f64,
        state_label: impl Into<String>,
        current_time: f64,
        target_time: f64,
    ) -> Self {
        Self {
            throat_radius,
            exotic_energy_density,
            state_label: state_label.into(),
            current_time,
            target_time,
            decay_rate: None,
        }
    }

    /// Set an explicit decay rate.
    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = Some(decay_rate);
        self
    }
}

/// Verdict and diagnostics from one gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    /// Whether the gate opened
    pub is_stable: bool,

    /// Stability coefficient (beta)
    pub beta: f64,

    /// Timeline divergence
    pub divergence: f64,

    /// Label-derived coefficient in [0, 1)
    pub alpha: f64,

    /// `current_time - target_time`
    pub delta_t: f64,

    /// Decay rate actually applied
    pub decay_rate: f64,
}

//! GateEvaluator: runs the divergence and stability formulas in order.
//!
//! Evaluation is a single pass with no state carried between calls:
//! 1. Divergence from the state label and the time gap
//! 2. Stability from the energy, the radius and that divergence
//!
//! Finite inputs never fail. Extreme exponents surface as infinity in the
//! result rather than as an error.

use tracing::debug;

use crate::config::GateConfig;
use crate::gate::{divergence_with_seed, stability_with_thresholds, Fnv1aSeed, LabelSeed};
use crate::types::{GateRequest, GateResult};

/// Evaluates gate requests against a configuration and a label seed.
#[derive(Debug, Clone, Default)]
pub struct GateEvaluator<S = Fnv1aSeed> {
    config: GateConfig,
    seed: S,
}

impl GateEvaluator<Fnv1aSeed> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with a custom configuration.
    pub fn with_config(config: GateConfig) -> Self {
        Self {
            config,
            seed: Fnv1aSeed,
        }
    }
}

impl<S: LabelSeed> GateEvaluator<S> {
    /// Swap the label seed, keeping the configuration.
    pub fn with_seed<T: LabelSeed>(self, seed: T) -> GateEvaluator<T> {
        GateEvaluator {
            config: self.config,
            seed,
        }
    }

    /// Evaluate one request.
    ///
    /// The request's own decay rate wins over the configured one.
    pub fn evaluate(&self, request: &GateRequest) -> GateResult {
        let decay_rate = request.decay_rate.unwrap_or(self.config.decay_rate);

        let divergence = divergence_with_seed(
            &self.seed,
            &request.state_label,
            request.current_time,
            request.target_time,
            decay_rate,
        );

        let stability = stability_with_thresholds(
            &self.config.thresholds,
            divergence.value,
            request.exotic_energy_density,
            request.throat_radius,
            self.config.delta_u,
        );

        debug!(
            label = %request.state_label,
            alpha = divergence.alpha,
            delta_t = divergence.delta_t,
            divergence = divergence.value,
            beta = stability.beta,
            is_stable = stability.is_stable,
            "gate evaluated"
        );

        GateResult {
            is_stable: stability.is_stable,
            beta: stability.beta,
            divergence: divergence.value,
            alpha: divergence.alpha,
            delta_t: divergence.delta_t,
            decay_rate,
        }
    }
}

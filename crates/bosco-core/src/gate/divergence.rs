//! Timeline divergence.
//!
//! `divergence = alpha * exp(-decay_rate * (current_time - target_time))`
//!
//! A target far in the future makes the exponent large and positive; the
//! result is not clamped and may overflow to infinity.

use super::seed::{Fnv1aSeed, LabelSeed};

/// Divergence together with the intermediate terms it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divergence {
    pub alpha: f64,
    pub delta_t: f64,
    pub value: f64,
}

/// Compute the timeline divergence for a state label using FNV-1a.
pub fn compute_divergence(
    state_label: &str,
    current_time: f64,
    target_time: f64,
    decay_rate: f64,
) -> f64 {
    divergence_with_seed(&Fnv1aSeed, state_label, current_time, target_time, decay_rate).value
}

/// Compute the timeline divergence with an explicit label seed.
pub fn divergence_with_seed<S: LabelSeed + ?Sized>(
    seed: &S,
    state_label: &str,
    current_time: f64,
    target_time: f64,
    decay_rate: f64,
) -> Divergence {
    let alpha = seed.alpha(state_label);
    let delta_t = current_time - target_time;
    Divergence {
        alpha,
        delta_t,
        value: alpha * (-decay_rate * delta_t).exp(),
    }
}

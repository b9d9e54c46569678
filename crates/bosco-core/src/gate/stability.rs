//! Stability index.
//!
//! `beta = exotic_energy_density * 4π r0² / delta_u²`
//!
//! The gate is stable only when beta and the divergence both clear their
//! thresholds. Beta is reported either way.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::limits::{BETA_THRESHOLD, DIVERGENCE_THRESHOLD};

/// Strict lower bounds a gate must exceed to count as stable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Beta must be strictly greater than this
    pub beta: f64,

    /// Divergence must be strictly greater than this
    pub divergence: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            beta: BETA_THRESHOLD,
            divergence: DIVERGENCE_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Whether a (beta, divergence) pair opens the gate.
    pub fn admits(&self, beta: f64, divergence: f64) -> bool {
        beta > self.beta && divergence > self.divergence
    }
}

/// Outcome of the stability check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stability {
    pub is_stable: bool,
    pub beta: f64,
}

/// Surface area of a spherical throat of radius `r0`.
pub fn throat_area(throat_radius: f64) -> f64 {
    4.0 * PI * throat_radius.powi(2)
}

/// The stability coefficient, beta.
pub fn stability_coefficient(exotic_energy_density: f64, throat_radius: f64, delta_u: f64) -> f64 {
    (exotic_energy_density * throat_area(throat_radius)) / delta_u.powi(2)
}

/// Compute stability against the default thresholds.
pub fn compute_stability(
    divergence: f64,
    exotic_energy_density: f64,
    throat_radius: f64,
    delta_u: f64,
) -> Stability {
    stability_with_thresholds(
        &Thresholds::default(),
        divergence,
        exotic_energy_density,
        throat_radius,
        delta_u,
    )
}

/// Compute stability against explicit thresholds.
pub fn stability_with_thresholds(
    thresholds: &Thresholds,
    divergence: f64,
    exotic_energy_density: f64,
    throat_radius: f64,
    delta_u: f64,
) -> Stability {
    let beta = stability_coefficient(exotic_energy_density, throat_radius, delta_u);
    Stability {
        is_stable: thresholds.admits(beta, divergence),
        beta,
    }
}

//! The two gate formulas and the label seed they share.
//!
//! Each formula lives in its own module:
//!
//! | Module | Computes |
//! |--------|----------|
//! | `divergence` | `alpha * exp(-decay_rate * delta_t)` |
//! | `stability` | `beta = E * 4π r0² / delta_u²` and the stable verdict |
//! | `seed` | `alpha` from the state label |

pub mod divergence;
pub mod seed;
pub mod stability;

pub use divergence::{compute_divergence, divergence_with_seed, Divergence};
pub use seed::{Fnv1aSeed, LabelSeed, ProcessSeed};
pub use stability::{
    compute_stability, stability_coefficient, stability_with_thresholds, throat_area, Stability,
    Thresholds,
};

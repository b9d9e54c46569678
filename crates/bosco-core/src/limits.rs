//! Default inputs and the ranges the gate controls accept.

// Default values for input controls
pub const DEFAULT_THROAT_RADIUS: f64 = 0.01;
pub const DEFAULT_EXOTIC_ENERGY_DENSITY: f64 = 100.0;
pub const DEFAULT_STATE_LABEL: &str = "Q-Event-42";
pub const DEFAULT_CURRENT_TIME: f64 = 1000.0;
pub const DEFAULT_TARGET_TIME: f64 = 900.0;
pub const DEFAULT_DECAY_RATE: f64 = 0.1;
pub const DEFAULT_DELTA_U: f64 = 1.0;

// Decision thresholds
pub const BETA_THRESHOLD: f64 = 0.5;
pub const DIVERGENCE_THRESHOLD: f64 = 0.1;

// Min/Max limits for input controls
pub const MIN_THROAT_RADIUS: f64 = 0.001;
pub const MAX_THROAT_RADIUS: f64 = 0.05;
pub const MIN_EXOTIC_ENERGY_DENSITY: f64 = 10.0;
pub const MAX_EXOTIC_ENERGY_DENSITY: f64 = 200.0;
pub const MIN_TIME: f64 = 0.0;
pub const MAX_TIME: f64 = 10_000.0;

/// A closed numeric range for one input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range, the way a slider would.
    ///
    /// NaN is pulled to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

pub const THROAT_RADIUS_RANGE: Range = Range::new(MIN_THROAT_RADIUS, MAX_THROAT_RADIUS);
pub const EXOTIC_ENERGY_DENSITY_RANGE: Range =
    Range::new(MIN_EXOTIC_ENERGY_DENSITY, MAX_EXOTIC_ENERGY_DENSITY);
pub const TIME_RANGE: Range = Range::new(MIN_TIME, MAX_TIME);

//! Preset scaling steps for "zoom in" / "zoom out" style controls.
//!
//! Scale values are compared after rounding to a fixed resolution so that
//! float noise such as `1.2499999` does not create a step of its own.

use crate::scaling::ScalingBounds;

/// Presets offered when no list is configured.
pub const DEFAULT_STEPS: &[f64] = &[0.25, 0.5, 0.666, 1.0, 1.25, 1.5, 2.0, 3.0, 4.0, 5.0];

/// `v * rounding`, rounded half-to-even.
pub fn scale_key(v: f64, rounding: f64) -> i64 {
    (v * rounding).round_ties_even() as i64
}

/// Whether two scale values are equal at 1/1000 resolution.
pub fn scale_eq(a: f64, b: f64) -> bool {
    scale_key(a, 1000.0) == scale_key(b, 1000.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingSteps {
    steps: Vec<f64>,
}

impl ScalingSteps {
    /// Keeps the presets that fall within `bounds`, in the given order.
    pub fn new(presets: &[f64], bounds: ScalingBounds) -> Self {
        Self {
            steps: presets
                .iter()
                .copied()
                .filter(|v| bounds.contains(*v))
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.steps
    }

    /// Presets larger than `current`, compared at 1/10 resolution.
    pub fn up(&self, current: f64) -> Vec<f64> {
        let key = scale_key(current, 10.0);
        self.steps
            .iter()
            .copied()
            .filter(|v| scale_key(*v, 10.0) > key)
            .collect()
    }

    /// Presets smaller than `current`, compared at 1/10 resolution.
    pub fn down(&self, current: f64) -> Vec<f64> {
        let key = scale_key(current, 10.0);
        self.steps
            .iter()
            .copied()
            .filter(|v| scale_key(*v, 10.0) < key)
            .collect()
    }
}

impl Default for ScalingSteps {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS, ScalingBounds::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Configuration for the parsers.
//!
//! Values come from three layers, later ones winning:
//! 1. built-in defaults;
//! 2. an optional TOML file (every field optional);
//! 3. `SCALESPEC_*` environment variables.
//!
//! ```toml
//! [scaling]
//! min = 0.1
//! max = 8.0
//! options = [0.25, 0.5, 1.0, 1.5, 2.0]
//! truthy = ["yes", "true", "1", "on"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scaling::{ScalingBounds, ScalingParser};
use crate::steps::{ScalingSteps, DEFAULT_STEPS};
use crate::truthy::{TruthyTokens, DEFAULT_TRUTHY};

/// Overrides the lower scaling bound.
pub const ENV_MIN_SCALING: &str = "SCALESPEC_MIN_SCALING";
/// Overrides the upper scaling bound.
pub const ENV_MAX_SCALING: &str = "SCALESPEC_MAX_SCALING";
/// Comma-separated preset scaling steps.
pub const ENV_SCALING_OPTIONS: &str = "SCALESPEC_SCALING_OPTIONS";

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scaling: ScalingSection,
}

/// The `[scaling]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalingSection {
    pub min: f64,
    pub max: f64,
    pub options: Vec<f64>,
    pub truthy: Vec<String>,
}

impl Default for ScalingSection {
    fn default() -> Self {
        Self {
            min: ScalingBounds::DEFAULT_MIN,
            max: ScalingBounds::DEFAULT_MAX,
            options: DEFAULT_STEPS.to_vec(),
            truthy: DEFAULT_TRUTHY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("config: loaded {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Applies `SCALESPEC_*` variables from the process environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by the `ENV_*` names.
    ///
    /// A value that does not parse is logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(min) = float_override(&lookup, ENV_MIN_SCALING) {
            self.scaling.min = min;
        }
        if let Some(max) = float_override(&lookup, ENV_MAX_SCALING) {
            self.scaling.max = max;
        }
        if let Some(raw) = lookup(ENV_SCALING_OPTIONS) {
            match parse_float_list(&raw) {
                Some(options) => self.scaling.options = options,
                None => log::warn!("config: ignoring invalid {ENV_SCALING_OPTIONS}={raw:?}"),
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Requires finite bounds with `0 < min <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScalingSection { min, max, .. } = self.scaling;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(())
    }

    pub fn bounds(&self) -> ScalingBounds {
        ScalingBounds::new(self.scaling.min, self.scaling.max)
    }

    pub fn truthy(&self) -> TruthyTokens {
        TruthyTokens::new(self.scaling.truthy.iter().cloned())
    }

    /// Configured presets, restricted to the bounds.
    pub fn steps(&self) -> ScalingSteps {
        ScalingSteps::new(&self.scaling.options, self.bounds())
    }

    pub fn parser(&self) -> ScalingParser {
        ScalingParser::from_config(self)
    }
}

fn float_override<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("config: ignoring invalid {key}={raw:?}: {e}");
            None
        }
    }
}

fn parse_float_list(raw: &str) -> Option<Vec<f64>> {
    raw.split(',')
        .map(|s| s.trim().parse::<f64>().ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

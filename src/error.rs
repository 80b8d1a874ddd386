//! Hard errors surfaced to callers.
//!
//! Soft parse problems are not errors: they are warnings carried in a
//! [`Report`](crate::Report). The types here cover the few places where a
//! silent default would hide a configuration bug.

use std::path::PathBuf;

/// Rejected scaling ratio (see [`parse_scaling_value`](crate::parse_scaling_value)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidScalingValue {
    #[error("invalid scaling value '{0}': not a number")]
    NotANumber(String),
    #[error("invalid scaling value {0}: must be greater than zero")]
    NotPositive(String),
    #[error("cannot upscale: {numerator}:{denominator}")]
    Upscale { numerator: u32, denominator: u32 },
    #[error("invalid scaling value {0}: too large")]
    TooLarge(String),
}

/// Integer option outside its permitted range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
    #[error("value must be greater than {min}")]
    BelowMinimum { value: i64, min: i64 },
    #[error("value must be lower than {max}")]
    AboveMaximum { value: i64, max: i64 },
}

/// Failure to build a [`Config`](crate::Config).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid scaling bounds: min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! scalespec -- display scaling and option-dictionary parsing.
//!
//! Turns the strings a remote-display client accepts on its command line
//! (`desktop-scaling=auto`, `150%`, `1920x1080`, `key=value,...`) into typed
//! values. Every parser here is a pure function over its inputs: bounds, the
//! truthy-token set and preset scaling steps are passed in via [`Config`] or
//! explicit arguments rather than read from process-wide state.
//!
//! Soft failures never propagate: they are logged through the `log` facade and
//! also handed back as typed warnings in a [`Report`] so callers can tell a
//! fallback apart from an explicit `1:1` request.

pub mod config;
pub mod dict;
pub mod error;
pub mod report;
pub mod scaling;
pub mod steps;
pub mod truthy;
pub mod validate;

pub use config::Config;
pub use dict::{parse_simple_dict, DictValue, DictWarning, SimpleDict};
pub use error::{ConfigError, InvalidScalingValue, RangeError};
pub use report::Report;
pub use scaling::{
    parse_scaling, parse_scaling_value, ParsedScale, ScaleItem, ScalingBounds, ScalingLimit,
    ScalingParser, ScalingWarning,
};
pub use steps::ScalingSteps;
pub use truthy::TruthyTokens;

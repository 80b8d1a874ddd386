//! Integer option validators.

use crate::error::RangeError;

/// Parses `v` as an integer and checks it against optional inclusive bounds.
pub fn int_range(v: &str, min: Option<i64>, max: Option<i64>) -> Result<i64, RangeError> {
    let value: i64 = v
        .trim()
        .parse()
        .map_err(|_| RangeError::NotAnInteger(v.to_string()))?;
    if let Some(min) = min.filter(|m| value < *m) {
        return Err(RangeError::BelowMinimum { value, min });
    }
    if let Some(max) = max.filter(|m| value > *m) {
        return Err(RangeError::AboveMaximum { value, max });
    }
    Ok(value)
}

/// A percentage-like integer in `0..=100`.
pub fn from_0_to_100(v: &str) -> Result<i64, RangeError> {
    int_range(v, Some(0), Some(100))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

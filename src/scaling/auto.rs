//! `auto` scaling: pick a scale from the root window's pixel area.
//!
//! The table maps area thresholds to scale factors. It is scanned in the order
//! given and the first row whose area covers the root window wins; rows are
//! never re-sorted.

use crate::report::Warnings;

use super::{ParsedScale, ScalingWarning};

// ---------------------------------------------------------------------------
// Limit table
// ---------------------------------------------------------------------------

/// One row of the auto-scaling table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingLimit {
    pub max_width: u32,
    pub max_height: u32,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScalingLimit {
    pub const fn new(max_width: u32, max_height: u32, scale_x: f64, scale_y: f64) -> Self {
        Self {
            max_width,
            max_height,
            scale_x,
            scale_y,
        }
    }

    const fn uniform(max_width: u32, max_height: u32, scale: f64) -> Self {
        Self::new(max_width, max_height, scale, scale)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.max_width) * u64::from(self.max_height)
    }

    /// Whether a `width x height` root fits within this row's area.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        u64::from(width) * u64::from(height) <= self.area()
    }
}

/// Table used by plain `auto`: no scaling up to 4k, then 125%, 150%, 166%,
/// 200% and 400% for progressively larger roots.
pub const DEFAULT_LIMITS: [ScalingLimit; 6] = [
    ScalingLimit::uniform(3960, 2160, 1.0),
    ScalingLimit::uniform(7680, 4320, 1.25),
    ScalingLimit::uniform(8192, 8192, 1.5),
    ScalingLimit::uniform(16384, 16384, 5.0 / 3.0),
    ScalingLimit::uniform(32768, 32768, 2.0),
    ScalingLimit::uniform(65536, 65536, 4.0),
];

/// Returns the first row covering the root, in table order.
pub fn select_limit(limits: &[ScalingLimit], width: u32, height: u32) -> Option<&ScalingLimit> {
    limits.iter().find(|l| l.covers(width, height))
}

// ---------------------------------------------------------------------------
// Table parsing
// ---------------------------------------------------------------------------

/// Why a `WIDTHxHEIGHT:SCALE` entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitError {
    #[error("could not find 2 parts separated by ':'")]
    MissingScale,
    #[error("could not find 2 dimensions separated by 'x' in '{0}'")]
    BadDimensions(String),
    #[error("invalid scaling value '{0}'")]
    BadScale(String),
    #[error("found more than 2 scaling dimensions")]
    TooManyScales,
}

/// Parses one `WIDTHxHEIGHT:SCALEX[*SCALEY]` entry. `/` may replace `*`.
pub fn parse_limit(entry: &str) -> Result<ScalingLimit, LimitError> {
    let parts: Vec<&str> = entry.split(':').collect();
    let [dims, scales] = parts[..] else {
        return Err(LimitError::MissingScale);
    };

    let bad_dims = || LimitError::BadDimensions(dims.to_string());
    let (w, h) = dims.split_once('x').ok_or_else(bad_dims)?;
    let width: u32 = w.trim().parse().map_err(|_| bad_dims())?;
    let height: u32 = h.trim().parse().map_err(|_| bad_dims())?;

    let scales: Vec<&str> = scales.split(['*', '/', 'x']).collect();
    let parse_scale = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LimitError::BadScale(s.to_string()))
    };
    match scales[..] {
        [both] => {
            let s = parse_scale(both)?;
            Ok(ScalingLimit::new(width, height, s, s))
        }
        [sx, sy] => Ok(ScalingLimit::new(
            width,
            height,
            parse_scale(sx)?,
            parse_scale(sy)?,
        )),
        _ => Err(LimitError::TooManyScales),
    }
}

/// Parses a comma-separated table. Bad entries are skipped with a warning.
pub(crate) fn parse_limits(
    table: &str,
    warnings: &mut Warnings<ScalingWarning>,
) -> Vec<ScalingLimit> {
    let mut limits = Vec::new();
    for entry in table.split(',') {
        match parse_limit(entry) {
            Ok(limit) => limits.push(limit),
            Err(reason) => warnings.push(ScalingWarning::InvalidLimit {
                entry: entry.to_string(),
                reason,
            }),
        }
    }
    log::debug!("parsed desktop-scaling auto limits: {limits:?}");
    limits
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolves an `auto` spec. `suffix` is whatever followed the `auto` keyword.
pub(crate) fn resolve(
    suffix: &str,
    root_w: u32,
    root_h: u32,
    warnings: &mut Warnings<ScalingWarning>,
) -> ParsedScale {
    let limits = match suffix.strip_prefix(':') {
        Some(table) => parse_limits(table, warnings),
        None => {
            if !suffix.is_empty() {
                warnings.push(ScalingWarning::InvalidAuto(format!("auto{suffix}")));
            }
            DEFAULT_LIMITS.to_vec()
        }
    };
    let matched = select_limit(&limits, root_w, root_h);
    log::debug!("auto scaling for {root_w}x{root_h}: matched {matched:?}");
    matched.map_or(ParsedScale::IDENTITY, |l| {
        ParsedScale::new(l.scale_x, l.scale_y)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Desktop scaling specifications.
//!
//! A spec is one of:
//! - a truthy token (`yes`, `true`, ...): no scaling, `1x1`;
//! - `auto` or `auto:WIDTHxHEIGHT:SCALE,...`: scale chosen from the root size;
//! - a fixed value: `2`, `150%`, `3:2`, `1.5x1.25`, or absolute pixels such as
//!   `1920x1080`.
//!
//! Parsing never fails. Anything that cannot be honoured in full falls back to
//! `1x1` with a warning; a partially valid spec is never applied.

mod auto;
mod item;
mod ratio;

use std::fmt;

use crate::config::Config;
use crate::report::{Report, Warnings};
use crate::truthy::TruthyTokens;

pub use auto::{parse_limit, select_limit, LimitError, ScalingLimit, DEFAULT_LIMITS};
pub use item::{parse_item, ScaleItem};
pub use ratio::parse_scaling_value;

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Resolved `(x, y)` scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedScale {
    pub x: f64,
    pub y: f64,
}

impl ParsedScale {
    pub const IDENTITY: ParsedScale = ParsedScale { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Formats as `XxY`, which parses back to the same pair.
impl fmt::Display for ParsedScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl From<ParsedScale> for (f64, f64) {
    fn from(s: ParsedScale) -> Self {
        (s.x, s.y)
    }
}

/// Inclusive range a fixed scaling value must fall in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingBounds {
    pub min: f64,
    pub max: f64,
}

impl ScalingBounds {
    pub const DEFAULT_MIN: f64 = 0.1;
    pub const DEFAULT_MAX: f64 = 8.0;

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl Default for ScalingBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// A soft problem found while parsing a scaling spec.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScalingWarning {
    #[error("failed to parse limit string '{entry}': {reason} (use the format WIDTHxHEIGHT:SCALINGVALUE)")]
    InvalidLimit { entry: String, reason: LimitError },
    #[error("invalid 'auto' scaling value '{0}'")]
    InvalidAuto(String),
    #[error("found both 'x' and ':' in desktop-scaling fixed value '{0}', maybe the 'auto:' prefix is missing?")]
    ConflictingSeparators(String),
    #[error("failed to parse scaling value '{0}'")]
    InvalidValue(String),
    #[error("scaling value '{0}' is zero")]
    Zero(String),
    #[error("cannot normalize absolute scaling values against a {width}x{height} root")]
    EmptyRoot { width: u32, height: u32 },
    #[error("scaling values {x}x{y} are out of range")]
    OutOfRange { x: f64, y: f64 },
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Scaling spec parser holding the bounds and truthy set it applies.
#[derive(Debug, Clone, Default)]
pub struct ScalingParser {
    bounds: ScalingBounds,
    truthy: TruthyTokens,
}

impl ScalingParser {
    pub fn new(bounds: ScalingBounds, truthy: TruthyTokens) -> Self {
        Self { bounds, truthy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bounds(), config.truthy())
    }

    pub fn bounds(&self) -> ScalingBounds {
        self.bounds
    }

    /// Resolves `spec` for a `root_w x root_h` root window.
    pub fn parse(&self, spec: &str, root_w: u32, root_h: u32) -> ParsedScale {
        self.parse_report(spec, root_w, root_h).into_value()
    }

    /// Like [`parse`](Self::parse), also returning the warnings raised.
    pub fn parse_report(
        &self,
        spec: &str,
        root_w: u32,
        root_h: u32,
    ) -> Report<ParsedScale, ScalingWarning> {
        log::debug!(
            "parse_scaling({spec:?}, {root_w}, {root_h}, {}, {})",
            self.bounds.min,
            self.bounds.max
        );
        let mut warnings = Warnings::new();
        let scale = self.resolve(spec, root_w, root_h, &mut warnings);
        log::debug!("parse_scaling({spec:?})={scale}");
        warnings.finish(scale)
    }

    fn resolve(
        &self,
        spec: &str,
        root_w: u32,
        root_h: u32,
        warnings: &mut Warnings<ScalingWarning>,
    ) -> ParsedScale {
        if self.truthy.contains(spec) {
            return ParsedScale::IDENTITY;
        }
        if let Some(suffix) = spec.strip_prefix("auto") {
            return auto::resolve(suffix, root_w, root_h, warnings);
        }
        self.resolve_fixed(spec, root_w, root_h, warnings)
            .unwrap_or(ParsedScale::IDENTITY)
    }

    fn resolve_fixed(
        &self,
        spec: &str,
        root_w: u32,
        root_h: u32,
        warnings: &mut Warnings<ScalingWarning>,
    ) -> Option<ParsedScale> {
        if has_conflicting_separators(spec) {
            warnings.push(ScalingWarning::ConflictingSeparators(spec.to_string()));
            return None;
        }

        // "1600x1200" -> ["1600", "1200"], "2" -> ["2"]
        let normalized = spec.replace(',', "x");
        let (first, second) = match normalized.split_once('x') {
            Some((a, b)) => (a, Some(b)),
            None => (normalized.as_str(), None),
        };

        let sx = parse_component(first, warnings)?;
        if sx.value() == 0.0 {
            warnings.push(ScalingWarning::Zero(first.to_string()));
            return None;
        }
        let sy = match second {
            Some(s) => parse_component(s, warnings)?,
            None => sx,
        };
        log::debug!("parse_scaling({spec:?}) parsed items={sx:?}, {sy:?}");

        let (mut x, mut y) = (sx.value(), sy.value());
        if x > self.bounds.max || y > self.bounds.max {
            if root_w == 0 || root_h == 0 {
                warnings.push(ScalingWarning::EmptyRoot {
                    width: root_w,
                    height: root_h,
                });
                return None;
            }
            log::debug!("normalizing dimensions to a ratio of {root_w}x{root_h}");
            x /= f64::from(root_w);
            y /= f64::from(root_h);
        }
        if !self.bounds.contains(x) || !self.bounds.contains(y) {
            warnings.push(ScalingWarning::OutOfRange { x, y });
            return None;
        }
        Some(ParsedScale::new(x, y))
    }
}

/// `x` and `:` together usually mean an `auto:` table missing its prefix.
fn has_conflicting_separators(spec: &str) -> bool {
    let after_start = |c: char| spec.find(c).is_some_and(|i| i > 0);
    after_start('x') && after_start(':')
}

fn parse_component(v: &str, warnings: &mut Warnings<ScalingWarning>) -> Option<ScaleItem> {
    let item = parse_item(v);
    if item.is_none() {
        warnings.push(ScalingWarning::InvalidValue(v.to_string()));
    }
    item
}

/// Resolves `spec` with the default truthy set and the given bounds.
pub fn parse_scaling(
    spec: &str,
    root_w: u32,
    root_h: u32,
    min_scaling: f64,
    max_scaling: f64,
) -> ParsedScale {
    ScalingParser::new(
        ScalingBounds::new(min_scaling, max_scaling),
        TruthyTokens::default(),
    )
    .parse(spec, root_w, root_h)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truthy::DEFAULT_TRUTHY;

    fn report(spec: &str, w: u32, h: u32) -> Report<ParsedScale, ScalingWarning> {
        ScalingParser::default().parse_report(spec, w, h)
    }

    fn approx(a: ParsedScale, b: ParsedScale) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn truthy_tokens_mean_no_scaling() {
        for token in DEFAULT_TRUTHY {
            assert_eq!(parse_scaling(token, 1920, 1080, 0.1, 8.0), ParsedScale::IDENTITY);
        }
    }

    #[test]
    fn custom_truthy_set_is_honoured() {
        let parser = ScalingParser::new(ScalingBounds::default(), TruthyTokens::new(["2"]));
        assert_eq!(parser.parse("2", 0, 0), ParsedScale::IDENTITY);
        assert_eq!(parser.parse("3", 0, 0), ParsedScale::new(3.0, 3.0));
    }

    #[test]
    fn auto_uses_default_table() {
        assert_eq!(parse_scaling("auto", 3840, 2160, 0.1, 8.0), ParsedScale::IDENTITY);
        assert_eq!(
            parse_scaling("auto", 7680, 4320, 0.1, 8.0),
            ParsedScale::new(1.25, 1.25)
        );
        // 8000x4300 is larger than 7680x4320 by area.
        assert_eq!(
            parse_scaling("auto", 8000, 4300, 0.1, 8.0),
            ParsedScale::new(1.5, 1.5)
        );
        assert_eq!(
            parse_scaling("auto", 10000, 10000, 0.1, 8.0),
            ParsedScale::new(5.0 / 3.0, 5.0 / 3.0)
        );
    }

    #[test]
    fn auto_beyond_table_is_identity() {
        let r = report("auto", u32::MAX, u32::MAX);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert!(r.is_clean());
    }

    #[test]
    fn auto_with_custom_table() {
        let spec = "auto:1920x1080:1,3840x2160:2";
        assert_eq!(parse_scaling(spec, 2000, 1000, 0.1, 8.0), ParsedScale::IDENTITY);
        assert_eq!(
            parse_scaling(spec, 3000, 2000, 0.1, 8.0),
            ParsedScale::new(2.0, 2.0)
        );
        assert_eq!(parse_scaling(spec, 7680, 4320, 0.1, 8.0), ParsedScale::IDENTITY);
    }

    #[test]
    fn auto_table_entries_may_split_axes() {
        assert_eq!(
            parse_scaling("auto:1920x1080:1.5*2", 1280, 720, 0.1, 8.0),
            ParsedScale::new(1.5, 2.0)
        );
    }

    #[test]
    fn auto_table_with_bad_entry_keeps_the_rest() {
        let r = report("auto:bogus,3840x2160:2", 1920, 1080);
        assert_eq!(r.value, ParsedScale::new(2.0, 2.0));
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn auto_table_with_only_bad_entries_is_identity() {
        let r = report("auto:", 1920, 1080);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn integer_value() {
        assert_eq!(parse_scaling("2", 0, 0, 0.1, 8.0), ParsedScale::new(2.0, 2.0));
    }

    #[test]
    fn percent_value() {
        assert_eq!(
            parse_scaling("150%", 0, 0, 0.1, 8.0),
            ParsedScale::new(1.5, 1.5)
        );
        assert_eq!(
            parse_scaling("50%", 0, 0, 0.1, 8.0),
            ParsedScale::new(0.5, 0.5)
        );
    }

    #[test]
    fn ratio_separators_are_equivalent() {
        let colon = parse_scaling("3:2", 0, 0, 0.1, 8.0);
        assert_eq!(colon, ParsedScale::new(1.5, 1.5));
        assert_eq!(parse_scaling("3/2", 0, 0, 0.1, 8.0), colon);
    }

    #[test]
    fn two_axis_values() {
        assert_eq!(
            parse_scaling("1.5x1.25", 0, 0, 0.1, 8.0),
            ParsedScale::new(1.5, 1.25)
        );
        assert_eq!(
            parse_scaling("2,1", 0, 0, 0.1, 8.0),
            ParsedScale::new(2.0, 1.0)
        );
        assert_eq!(
            parse_scaling("3/2x1", 0, 0, 0.1, 8.0),
            ParsedScale::new(1.5, 1.0)
        );
    }

    #[test]
    fn absolute_pixels_are_normalized() {
        assert_eq!(
            parse_scaling("1920x1080", 1920, 1080, 0.1, 8.0),
            ParsedScale::IDENTITY
        );
        assert_eq!(
            parse_scaling("960x540", 1920, 1080, 0.1, 8.0),
            ParsedScale::new(0.5, 0.5)
        );
    }

    #[test]
    fn absolute_pixels_without_root_fall_back() {
        let r = report("1920x1080", 0, 0);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(
            r.warnings,
            vec![ScalingWarning::EmptyRoot { width: 0, height: 0 }]
        );
    }

    #[test]
    fn conflicting_separators_fall_back() {
        let r = report("axb:2", 1920, 1080);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(
            r.warnings,
            vec![ScalingWarning::ConflictingSeparators("axb:2".into())]
        );
        assert!(matches!(
            report("1920x1080:2", 1920, 1080).warnings[..],
            [ScalingWarning::ConflictingSeparators(_)]
        ));
    }

    #[test]
    fn out_of_range_falls_back() {
        let r = report("0.05", 0, 0);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(
            r.warnings,
            vec![ScalingWarning::OutOfRange { x: 0.05, y: 0.05 }]
        );
        // Normalized, but still far too large for the root.
        assert_eq!(
            report("100000x100", 1920, 1080).value,
            ParsedScale::IDENTITY
        );
    }

    #[test]
    fn one_bad_axis_discards_both() {
        let r = report("2xjunk", 0, 0);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(r.warnings, vec![ScalingWarning::InvalidValue("junk".into())]);
        assert_eq!(report("2x1x1", 0, 0).value, ParsedScale::IDENTITY);
    }

    #[test]
    fn zero_and_empty_fall_back() {
        assert_eq!(
            report("0", 0, 0).warnings,
            vec![ScalingWarning::Zero("0".into())]
        );
        let r = report("", 0, 0);
        assert_eq!(r.value, ParsedScale::IDENTITY);
        assert_eq!(r.warnings, vec![ScalingWarning::InvalidValue(String::new())]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let parser = ScalingParser::new(ScalingBounds::new(0.5, 2.0), TruthyTokens::default());
        assert_eq!(parser.parse("0.5", 0, 0), ParsedScale::new(0.5, 0.5));
        assert_eq!(parser.parse("2", 0, 0), ParsedScale::new(2.0, 2.0));
        assert_eq!(parser.parse("0.49", 0, 0), ParsedScale::IDENTITY);
    }

    #[test]
    fn display_output_parses_back_to_itself() {
        let cases = [
            ("150%", 0, 0),
            ("3:2", 0, 0),
            ("1.5x1.25", 0, 0),
            ("960x540", 1920, 1080),
            ("1280x1024", 2560, 1440),
            ("auto", 10000, 10000),
        ];
        for (spec, w, h) in cases {
            let first = parse_scaling(spec, w, h, 0.1, 8.0);
            let again = parse_scaling(&first.to_string(), w, h, 0.1, 8.0);
            assert!(approx(first, again), "{spec}: {first} != {again}");
        }
    }

    #[test]
    fn clean_parse_has_no_warnings() {
        assert!(report("1.25", 0, 0).is_clean());
        assert!(report("auto", 1920, 1080).is_clean());
    }
}

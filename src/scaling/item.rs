//! Single-component scaling values: `2`, `1.5`, `150%`, `3:2`, `3/2`.
//!
//! Each accepted shape is one fallible attempt; `parse_item` tries them in a
//! fixed order and reports which one matched.

/// How a scaling component was read, carrying its numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleItem {
    /// `N%`, already divided by 100.
    Percent(f64),
    /// A plain integer such as `2` or a pixel size such as `1920`.
    Integer(i64),
    /// A decimal such as `1.5`.
    Decimal(f64),
    /// `A:B` or `A/B`, evaluated as `A / B`.
    Ratio(f64),
}

impl ScaleItem {
    pub fn value(self) -> f64 {
        match self {
            ScaleItem::Integer(n) => n as f64,
            ScaleItem::Percent(v) | ScaleItem::Decimal(v) | ScaleItem::Ratio(v) => v,
        }
    }
}

/// Parses one scaling component.
///
/// A trailing `%` requires a plain number before it. Otherwise the attempts
/// run integer, decimal, ratio; the first success wins. Non-finite numbers
/// (`inf`, `NaN`) and zero denominators are rejected.
pub fn parse_item(v: &str) -> Option<ScaleItem> {
    let v = v.trim();
    if let Some(prefix) = v.strip_suffix('%') {
        return parse_decimal(prefix).map(|p| ScaleItem::Percent(p / 100.0));
    }
    parse_integer(v)
        .map(ScaleItem::Integer)
        .or_else(|| parse_decimal(v).map(ScaleItem::Decimal))
        .or_else(|| parse_ratio(v).map(ScaleItem::Ratio))
}

fn parse_integer(v: &str) -> Option<i64> {
    v.parse().ok()
}

fn parse_decimal(v: &str) -> Option<f64> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}

fn parse_ratio(v: &str) -> Option<f64> {
    let normalized = v.replace(':', "/");
    let (num, den) = normalized.split_once('/')?;
    let num = parse_decimal(num)?;
    let den = parse_decimal(den)?;
    if den == 0.0 {
        return None;
    }
    Some(num / den).filter(|r| r.is_finite())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

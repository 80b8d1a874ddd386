//! Downscaling ratios as exact integer pairs: `2:3`, `2/3`, `4`, `50%`.

use crate::error::InvalidScalingValue;

/// Parses a downscaling ratio into `(numerator, denominator)`.
///
/// Returns `Ok(None)` for an empty string. A single integer `N` means `1:N`.
/// A percentage is converted exactly from its full decimal prefix, so `50%`
/// is `1:2` and `12.5%` is `1:8`. Separators `/` and `,` are read as `:`.
///
/// Zero or negative components and ratios above 1 are errors rather than
/// defaults.
pub fn parse_scaling_value(v: &str) -> Result<Option<(u32, u32)>, InvalidScalingValue> {
    if v.is_empty() {
        return Ok(None);
    }
    if let Some(prefix) = v.strip_suffix('%') {
        return percent_ratio(prefix).map(Some);
    }

    let normalized = v.replace(['/', ','], ":");
    let ratio = match normalized.split_once(':') {
        None => (1, positive(&normalized)?),
        Some((a, b)) => {
            let (numerator, denominator) = (positive(a)?, positive(b)?);
            check_downscale(numerator, denominator)?
        }
    };
    Ok(Some(ratio))
}

fn positive(s: &str) -> Result<u32, InvalidScalingValue> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| InvalidScalingValue::NotANumber(s.to_string()))?;
    if n <= 0 {
        return Err(InvalidScalingValue::NotPositive(s.trim().to_string()));
    }
    u32::try_from(n).map_err(|_| InvalidScalingValue::TooLarge(s.trim().to_string()))
}

fn check_downscale(numerator: u32, denominator: u32) -> Result<(u32, u32), InvalidScalingValue> {
    if numerator > denominator {
        return Err(InvalidScalingValue::Upscale {
            numerator,
            denominator,
        });
    }
    Ok((numerator, denominator))
}

/// Exact reduced fraction for `prefix` percent, e.g. `"12.5"` -> `(1, 8)`.
fn percent_ratio(prefix: &str) -> Result<(u32, u32), InvalidScalingValue> {
    let digits = prefix.trim();
    let not_a_number = || InvalidScalingValue::NotANumber(prefix.to_string());
    let too_large = || InvalidScalingValue::TooLarge(prefix.to_string());

    if let Some(rest) = digits.strip_prefix('-') {
        if rest.parse::<f64>().is_ok() {
            return Err(InvalidScalingValue::NotPositive(digits.to_string()));
        }
        return Err(not_a_number());
    }
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return Err(not_a_number());
    }

    let scale = 10u64
        .checked_pow(u32::try_from(frac_part.len()).map_err(|_| too_large())?)
        .ok_or_else(too_large)?;
    let mantissa: u64 = format!("{int_part}{frac_part}")
        .parse()
        .map_err(|_| too_large())?;
    if mantissa == 0 {
        return Err(InvalidScalingValue::NotPositive(digits.to_string()));
    }
    let denominator = scale.checked_mul(100).ok_or_else(too_large)?;

    let divisor = gcd(mantissa, denominator);
    let numerator = u32::try_from(mantissa / divisor).map_err(|_| too_large())?;
    let denominator = u32::try_from(denominator / divisor).map_err(|_| too_large())?;
    check_downscale(numerator, denominator)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

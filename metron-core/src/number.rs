//! Number parsing and display formatting
//!
//! Results are plain `f64` values carried at full precision until display.
//! Rendering follows printf-style `%.6e` and `%.6g` conventions.

use std::borrow::Cow;

use crate::ConversionError;

/// Significant digits for general formatting and mantissa decimals for
/// scientific formatting
pub const DISPLAY_DIGITS: usize = 6;

/// Magnitude at or above which a fixed-notation request escalates to scientific
pub const LARGE_MAGNITUDE: f64 = 1e9;

/// Magnitude at or below which a nonzero fixed-notation request escalates
pub const SMALL_MAGNITUDE: f64 = 1e-6;

/// Parse user input into a real number
/// Supports: "42", "-3.5", "1e3", ".5", "1_000", "inf", "nan"
/// Digits must be ASCII.
pub fn parse_number(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    let cleaned = strip_digit_separators(trimmed)
        .ok_or_else(|| ConversionError::Parse(raw.to_string()))?;

    cleaned
        .parse::<f64>()
        .map_err(|_| ConversionError::Parse(raw.to_string()))
}

/// Remove underscores that sit between two digits; reject any other underscore
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let chars: Vec<char> = s.chars().collect();
    let mut cleaned = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        cleaned.push(c);
    }
    Some(Cow::Owned(cleaned))
}

/// Render a conversion result for display.
///
/// Scientific notation is used when requested, and also for nonzero values
/// whose magnitude is `>= 1e9` or `<= 1e-6`. Everything else gets six
/// significant digits with trailing zeros trimmed. Zero is never escalated.
/// Non-finite values render as `inf`, `-inf` or `nan`.
pub fn format_number(value: f64, scientific: bool) -> String {
    if scientific || needs_escalation(value) {
        format_scientific(value, DISPLAY_DIGITS)
    } else {
        format_general(value, DISPLAY_DIGITS)
    }
}

fn needs_escalation(value: f64) -> bool {
    let magnitude = value.abs();
    value != 0.0 && (magnitude >= LARGE_MAGNITUDE || magnitude <= SMALL_MAGNITUDE)
}

/// `%.Ne` style: `1.234560e+03`
pub fn format_scientific(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let raw = format!("{:.*e}", decimals, value);
    match split_exponent(&raw) {
        Some((mantissa, exp)) => format!("{}{}", mantissa, exponent_suffix(exp)),
        None => raw,
    }
}

/// `%.Ng` style: N significant digits, shortest form, trailing zeros trimmed
pub fn format_general(value: f64, sigfigs: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let sigfigs = sigfigs.max(1);
    // The exponent is taken after rounding, so 999999.7 reports 6, not 5
    let rounded = format!("{:.*e}", sigfigs - 1, value);
    let Some((mantissa, exp)) = split_exponent(&rounded) else {
        return rounded;
    };

    if exp < -4 || exp >= sigfigs as i32 {
        format!("{}{}", trim_fraction(mantissa), exponent_suffix(exp))
    } else {
        let decimals = (sigfigs as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn split_exponent(s: &str) -> Option<(&str, i32)> {
    let (mantissa, exp) = s.split_once('e')?;
    let exp = exp.parse::<i32>().ok()?;
    Some((mantissa, exp))
}

fn exponent_suffix(exp: i32) -> String {
    let sign = if exp < 0 { '-' } else { '+' };
    format!("e{}{:02}", sign, exp.unsigned_abs())
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}

//! Number-to-text selection and rendering.
//!
//! Output forms, checked in order:
//!
//! - exactly zero prints `0`;
//! - integer-valued doubles within `i32` range print as plain decimal;
//! - NaN and the infinities have no JSON spelling and print `null`;
//! - other integer-valued doubles below 1e60 print with no fraction;
//! - magnitudes below 1e-6 or above 1e9 print in scientific form with six
//!   fraction digits and a signed two-digit exponent;
//! - everything else prints in plain decimal with six fraction digits.

/// Renders `d` as JSON number text.
pub(crate) fn format_number(d: f64) -> String {
    if d == 0.0 {
        return "0".to_owned();
    }
    let integral = (d.floor() - d).abs() <= f64::EPSILON;
    if integral && d >= f64::from(i32::MIN) && d <= f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)] // integral and range-checked above
        return (d as i32).to_string();
    }
    // NaN and the infinities fall through the integral checks
    if (d * 0.0) != 0.0 {
        return "null".to_owned();
    }
    if integral && d.abs() < 1.0e60 {
        return format!("{d:.0}");
    }
    if d.abs() < 1.0e-6 || d.abs() > 1.0e9 {
        return format_exponential(d);
    }
    format!("{d:.6}")
}

/// Scientific form with a six-digit mantissa fraction and an always-signed,
/// at-least-two-digit exponent.
fn format_exponential(d: f64) -> String {
    let formatted = format!("{d:.6e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

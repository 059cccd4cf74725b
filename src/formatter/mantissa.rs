//! Mantissa rendering
//!
//! Converts a significant figure count into fractional digits, walks redundant
//! trailing digits away, and renormalises a mantissa that rounds up to the
//! style's upper bound.

use super::general::{format_general, trim_fraction};
use crate::types::ExponentStyle;

/// A mantissa ready for assembly
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RenderedMantissa {
    /// Digits as they appear in the output
    pub text: String,
    /// Exponent after any rollover
    pub exponent: i32,
    /// The rendered value is exactly 1
    pub is_unit: bool,
}

/// Round `mantissa` to exactly `digits` fractional digits, fixed point
pub(super) fn round_fixed(mantissa: f64, digits: usize) -> String {
    format!("{:.*}", digits, mantissa)
}

/// Fractional digits in the exact decimal expansion of any f64 at or above 1
const EXACT_FRACTION_DIGITS: usize = 52;

/// Fractional digits in the exact decimal expansion of any f64
const EXACT_FRACTION_DIGITS_ANY: usize = 1074;

/// Whether rounding to `a` and to `b` fractional digits yields the same value
fn rounds_equal(mantissa: f64, a: usize, b: usize) -> bool {
    trim_fraction(&round_fixed(mantissa, a)) == trim_fraction(&round_fixed(mantissa, b))
}

/// Fractional digits needed for `significant_figures` given one mantissa
///
/// The count is `significant_figures - ceil(log10(mantissa))`, floored at zero.
/// With `suppress_extras` the count is then lowered while dropping the last
/// digit leaves the rounded value unchanged.
pub(super) fn fraction_digits(
    mantissa: f64,
    significant_figures: usize,
    suppress_extras: bool,
) -> usize {
    let leading = mantissa.log10().ceil().max(0.0) as usize;
    let mut digits = significant_figures.saturating_sub(leading);
    if suppress_extras {
        // Digits past the exact expansion are all zero and always round equal
        let exact = if mantissa >= 1.0 {
            EXACT_FRACTION_DIGITS
        } else {
            EXACT_FRACTION_DIGITS_ANY
        };
        digits = digits.min(exact);
        while digits > 0 && rounds_equal(mantissa, digits, digits - 1) {
            digits -= 1;
        }
    }
    digits
}

/// Number of digits before the decimal point
fn integer_digits(text: &str) -> usize {
    text.split('.')
        .next()
        .map_or(0, |int| int.chars().filter(char::is_ascii_digit).count())
}

/// Render `mantissa` for `exponent`, at fixed precision or in general form
pub(super) fn render(
    mantissa: f64,
    exponent: i32,
    style: ExponentStyle,
    significant_figures: Option<usize>,
    suppress_extras: bool,
) -> RenderedMantissa {
    match significant_figures {
        Some(sf) => {
            let digits = fraction_digits(mantissa, sf, suppress_extras);
            let text = round_fixed(mantissa, digits);
            if integer_digits(&text) > style.max_integer_digits() {
                // Rounded up to 10 (or 1000); format the next range's exact 1
                let text = round_fixed(1.0, fraction_digits(1.0, sf, suppress_extras));
                return RenderedMantissa {
                    is_unit: true,
                    text,
                    exponent: exponent + style.step(),
                };
            }
            let is_unit = trim_fraction(&text) == "1";
            RenderedMantissa {
                text,
                exponent,
                is_unit,
            }
        }
        None => {
            let text = format_general(mantissa);
            if integer_digits(&text) > style.max_integer_digits() {
                return RenderedMantissa {
                    text: "1".to_string(),
                    exponent: exponent + style.step(),
                    is_unit: true,
                };
            }
            RenderedMantissa {
                text,
                exponent,
                is_unit: mantissa == 1.0,
            }
        }
    }
}

//! General (`%g` style) float formatting for mantissas without a fixed digit count

/// Significant digits used when no explicit count is requested
pub const GENERAL_PRECISION: usize = 6;

/// Format a value in general (`%g`) style with the default precision
///
/// Switches between fixed and exponent form like C's `%g`: fixed when the
/// decimal exponent after rounding lies in `[-4, precision)`, exponent form
/// otherwise. Trailing fractional zeros and a bare decimal point are trimmed.
///
/// # Examples
/// ```
/// use sci_notation::formatter::format_general;
///
/// assert_eq!(format_general(2.5), "2.5");
/// assert_eq!(format_general(3.14159265), "3.14159");
/// assert_eq!(format_general(1.5e-7), "1.5e-07");
/// ```
pub fn format_general(value: f64) -> String {
    format_general_with(value, GENERAL_PRECISION)
}

/// Format a value in general (`%g`) style with `precision` significant digits
pub fn format_general_with(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Exponent after rounding to `precision` digits decides the form
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((digits, exponent)) = scientific
        .split_once('e')
        .and_then(|(digits, exp)| exp.parse::<i32>().ok().map(|exp| (digits, exp)))
    else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(digits),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing fractional zeros and a dangling decimal point
pub(super) fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

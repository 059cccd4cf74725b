use tracing::trace;

use super::mantissa;
use crate::error::{NotationError, Result};
use crate::types::{ExponentStyle, NotationConfig, NotationOptions};

const PLAIN_SEPARATOR: &str = "x";
const LATEX_SEPARATOR: &str = "$\\times";
const BASE: &str = "10^";

/// Split a positive finite magnitude into (exponent, mantissa)
fn decompose(magnitude: f64, style: ExponentStyle) -> (i32, f64) {
    let log10_val = magnitude.log10();
    let raw_exponent = log10_val.floor() as i32;
    let exponent = match style {
        ExponentStyle::Scientific => raw_exponent,
        ExponentStyle::Engineering => 3 * raw_exponent.div_euclid(3),
    };
    let mantissa = 10.0_f64.powf(log10_val - f64::from(exponent));
    (exponent, mantissa)
}

/// Separator and base prefix for the options
fn separator_and_base(options: &NotationOptions) -> (&'static str, &'static str) {
    if options.e_notation {
        let marker = if options.upper_case { "E" } else { "e" };
        (marker, "")
    } else if options.latex {
        (LATEX_SEPARATOR, BASE)
    } else {
        (PLAIN_SEPARATOR, BASE)
    }
}

/// Format a single number in scientific or engineering notation
///
/// Zero and non-finite values have no decimal exponent and are rejected.
/// Negative values are formatted by magnitude with a leading `-`.
///
/// # Examples
/// ```
/// use sci_notation::formatter::format_value;
/// use sci_notation::types::{NotationConfig, NotationOptions};
///
/// let config = NotationConfig::scientific(NotationOptions::default());
/// assert_eq!(format_value(1500.0, &config).unwrap(), "1.5x10^3");
/// assert_eq!(format_value(1000.0, &config).unwrap(), "10^3");
/// ```
pub fn format_value(value: f64, config: &NotationConfig) -> Result<String> {
    if !value.is_finite() || value == 0.0 {
        return Err(NotationError::Domain(value));
    }

    let options = &config.options;
    let (exponent, raw_mantissa) = decompose(value.abs(), config.style);
    let rendered = mantissa::render(
        raw_mantissa,
        exponent,
        config.style,
        options.significant_figures,
        options.suppress_extras,
    );
    trace!(
        value,
        exponent = rendered.exponent,
        mantissa = %rendered.text,
        "decomposed value"
    );

    let suppress_mantissa = rendered.is_unit && options.suppress_extras && !options.e_notation;
    let markup = options.latex && !options.e_notation;
    let (separator, base) = separator_and_base(options);

    let mut result = String::new();
    if value < 0.0 {
        result.push('-');
    }
    if suppress_mantissa {
        if markup {
            result.push('$');
        }
    } else {
        result.push_str(&rendered.text);
        result.push_str(separator);
    }
    result.push_str(base);
    if markup {
        result.push_str(&format!("{{{}}}$", rendered.exponent));
    } else {
        result.push_str(&rendered.exponent.to_string());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_scientific() {
        assert_eq!(decompose(1000.0, ExponentStyle::Scientific), (3, 1.0));
        let (exponent, mantissa) = decompose(0.015, ExponentStyle::Scientific);
        assert_eq!(exponent, -2);
        assert!((mantissa - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_decompose_engineering() {
        let (exponent, mantissa) = decompose(0.015, ExponentStyle::Engineering);
        assert_eq!(exponent, -3);
        assert!((mantissa - 15.0).abs() < 1e-10);

        let (exponent, mantissa) = decompose(123456.0, ExponentStyle::Engineering);
        assert_eq!(exponent, 3);
        assert!((mantissa - 123.456).abs() < 1e-9);
    }

    #[test]
    fn test_separator_and_base() {
        let options = NotationOptions::default();
        assert_eq!(separator_and_base(&options), ("x", "10^"));
        assert_eq!(
            separator_and_base(&options.clone().with_latex(true)),
            ("$\\times", "10^")
        );
        assert_eq!(
            separator_and_base(&options.clone().with_e_notation(true).with_latex(true)),
            ("E", "")
        );
        assert_eq!(
            separator_and_base(&options.with_e_notation(true).with_upper_case(false)),
            ("e", "")
        );
    }

    #[test]
    fn test_domain_errors() {
        let config = NotationConfig::default();
        assert_eq!(format_value(0.0, &config), Err(NotationError::Domain(0.0)));
        assert!(matches!(
            format_value(f64::INFINITY, &config),
            Err(NotationError::Domain(_))
        ));
        assert!(format_value(f64::NAN, &config).is_err());
    }
}

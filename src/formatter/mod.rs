//! Notation formatting module
//!
//! This module turns numbers into scientific or engineering notation strings.
//! The main entry points are `scientific_notation` and `engineering_notation`;
//! `format_value` formats one number against a full `NotationConfig`.

mod dispatch;
mod general;
mod mantissa;
mod notation;

pub use dispatch::{format_each, format_numbers};
pub use general::{GENERAL_PRECISION, format_general, format_general_with};
pub use notation::format_value;

use crate::error::Result;
use crate::types::{Formatted, NotationConfig, NotationOptions, Numbers};

/// Format number(s) in scientific notation
///
/// # Arguments
/// * `numbers` - A single value or a sequence of values
/// * `options` - Presentation options
///
/// # Returns
/// * `Result<Formatted>` - One string for a scalar, one string per element for a sequence
///
/// # Examples
/// ```
/// use sci_notation::{NotationOptions, scientific_notation};
///
/// let options = NotationOptions::default().with_e_notation(true);
/// let result = scientific_notation(2500.0, &options).unwrap();
/// assert_eq!(result.as_scalar(), Some("2.5E3"));
/// ```
pub fn scientific_notation(
    numbers: impl Into<Numbers>,
    options: &NotationOptions,
) -> Result<Formatted> {
    let config = NotationConfig::scientific(options.clone());
    format_numbers(&numbers.into(), &config)
}

/// Format number(s) in engineering notation
///
/// Same as [`scientific_notation`] except that the exponent is limited to multiples of 3.
///
/// # Examples
/// ```
/// use sci_notation::{NotationOptions, engineering_notation};
///
/// let result = engineering_notation(vec![0.015, 123456.0], &NotationOptions::default()).unwrap();
/// assert_eq!(result.into_vec(), vec!["15x10^-3", "123.456x10^3"]);
/// ```
pub fn engineering_notation(
    numbers: impl Into<Numbers>,
    options: &NotationOptions,
) -> Result<Formatted> {
    let config = NotationConfig::engineering(options.clone());
    format_numbers(&numbers.into(), &config)
}

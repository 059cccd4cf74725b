//! Type definitions for notation formatting
//!
//! This module defines the options bundle consumed by the formatter, the exponent
//! styles, and the scalar-or-sequence shapes that flow in and out of the dispatcher.

use crate::error::{NotationError, Result};

/// How the decimal exponent of a value is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExponentStyle {
    /// Unconstrained base-10 floor exponent, mantissa in [1, 10)
    #[default]
    Scientific,
    /// Exponent forced down to a multiple of 3, mantissa in [1, 1000)
    Engineering,
}

impl ExponentStyle {
    /// Exponent step between two adjacent mantissa ranges
    pub fn step(self) -> i32 {
        match self {
            ExponentStyle::Scientific => 1,
            ExponentStyle::Engineering => 3,
        }
    }

    /// Largest number of integer digits a normalised mantissa may have
    pub fn max_integer_digits(self) -> usize {
        match self {
            ExponentStyle::Scientific => 1,
            ExponentStyle::Engineering => 3,
        }
    }
}

/// Caller-facing formatting options
///
/// Every field has a default matching the keyword defaults of the notation
/// functions: plain text, full precision, suppression on, `x10^` form, upper case `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationOptions {
    /// Emit LaTeX math markup (`$\times10^{3}$`) instead of plain text
    pub latex: bool,
    /// Fixed significant figures, or `None` for general formatting
    pub significant_figures: Option<usize>,
    /// Drop redundant trailing digits and a mantissa of exactly 1
    pub suppress_extras: bool,
    /// Use `{mantissa}E{exponent}` instead of `{mantissa}x10^{exponent}`
    pub e_notation: bool,
    /// Upper case `E` in E-notation
    pub upper_case: bool,
}

impl Default for NotationOptions {
    fn default() -> Self {
        Self {
            latex: false,
            significant_figures: None,
            suppress_extras: true,
            e_notation: false,
            upper_case: true,
        }
    }
}

impl NotationOptions {
    /// Enable or disable LaTeX output
    pub fn with_latex(mut self, latex: bool) -> Self {
        self.latex = latex;
        self
    }

    /// Set the significant figure count
    pub fn with_significant_figures(mut self, significant_figures: Option<usize>) -> Self {
        self.significant_figures = significant_figures;
        self
    }

    /// Set the significant figure count from a signed source, rejecting negatives
    ///
    /// # Examples
    /// ```
    /// use sci_notation::NotationOptions;
    ///
    /// let options = NotationOptions::default().try_significant_figures(3).unwrap();
    /// assert_eq!(options.significant_figures, Some(3));
    /// assert!(NotationOptions::default().try_significant_figures(-1).is_err());
    /// ```
    pub fn try_significant_figures(mut self, significant_figures: i64) -> Result<Self> {
        let count = usize::try_from(significant_figures)
            .map_err(|_| NotationError::NegativeSignificantFigures(significant_figures))?;
        self.significant_figures = Some(count);
        Ok(self)
    }

    pub fn with_suppress_extras(mut self, suppress_extras: bool) -> Self {
        self.suppress_extras = suppress_extras;
        self
    }

    pub fn with_e_notation(mut self, e_notation: bool) -> Self {
        self.e_notation = e_notation;
        self
    }

    pub fn with_upper_case(mut self, upper_case: bool) -> Self {
        self.upper_case = upper_case;
        self
    }
}

/// Options together with the exponent style, the full input of one formatting call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotationConfig {
    /// Scientific or engineering exponent selection
    pub style: ExponentStyle,
    /// Presentation options
    pub options: NotationOptions,
}

impl NotationConfig {
    pub fn new(style: ExponentStyle, options: NotationOptions) -> Self {
        Self { style, options }
    }

    /// Scientific notation with the given options
    pub fn scientific(options: NotationOptions) -> Self {
        Self::new(ExponentStyle::Scientific, options)
    }

    /// Engineering notation with the given options
    pub fn engineering(options: NotationOptions) -> Self {
        Self::new(ExponentStyle::Engineering, options)
    }
}

/// One number or an ordered sequence of numbers to format
#[derive(Debug, Clone, PartialEq)]
pub enum Numbers {
    /// A single value, formatted to a single string
    Scalar(f64),
    /// Values formatted independently, order preserved
    Sequence(Vec<f64>),
}

impl From<f64> for Numbers {
    fn from(value: f64) -> Self {
        Numbers::Scalar(value)
    }
}

impl From<Vec<f64>> for Numbers {
    fn from(values: Vec<f64>) -> Self {
        Numbers::Sequence(values)
    }
}

impl From<&[f64]> for Numbers {
    fn from(values: &[f64]) -> Self {
        Numbers::Sequence(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Numbers {
    fn from(values: [f64; N]) -> Self {
        Numbers::Sequence(values.to_vec())
    }
}

/// Formatting result, shaped like the [`Numbers`] it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Scalar(String),
    Sequence(Vec<String>),
}

impl Formatted {
    /// The single string of a scalar result
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Formatted::Scalar(s) => Some(s),
            Formatted::Sequence(_) => None,
        }
    }

    /// The strings of a sequence result
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Formatted::Scalar(_) => None,
            Formatted::Sequence(items) => Some(items),
        }
    }

    /// Flatten into a vector; a scalar becomes a one-element vector
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Formatted::Scalar(s) => vec![s],
            Formatted::Sequence(items) => items,
        }
    }
}

/// A parsed option value, as written in option text or a TOML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `true` / `false` (any case)
    Bool(bool),
    /// Signed decimal integer
    Int(i64),
    /// `none` (any case), the unset marker for `significant_figures`
    None,
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::None => write!(f, "none"),
        }
    }
}

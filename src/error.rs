//! Error type for notation formatting and option handling

use std::fmt;

/// Error type for formatting and configuration operations
#[derive(Debug, Clone, PartialEq)]
pub enum NotationError {
    /// The value is zero, infinite or NaN and has no decimal exponent
    Domain(f64),
    /// A negative significant figure count was requested
    NegativeSignificantFigures(i64),
    /// An option name was not recognised
    UnknownOption(String),
    /// An option was given a value of the wrong kind
    InvalidValue { option: String, value: String },
    /// Option text or a configuration document could not be parsed
    ParseError(String),
    /// An element of a sequence failed to format
    Element {
        index: usize,
        source: Box<NotationError>,
    },
}

impl NotationError {
    /// True for input values outside the formatter's domain
    pub fn is_domain_error(&self) -> bool {
        match self {
            NotationError::Domain(_) => true,
            NotationError::Element { source, .. } => source.is_domain_error(),
            _ => false,
        }
    }

    /// True for rejected options or unreadable configuration
    pub fn is_config_error(&self) -> bool {
        match self {
            NotationError::NegativeSignificantFigures(_)
            | NotationError::UnknownOption(_)
            | NotationError::InvalidValue { .. }
            | NotationError::ParseError(_) => true,
            NotationError::Element { source, .. } => source.is_config_error(),
            NotationError::Domain(_) => false,
        }
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Domain(value) => {
                write!(f, "Value has no decimal exponent: {}", value)
            }
            NotationError::NegativeSignificantFigures(count) => {
                write!(f, "Significant figures must not be negative: {}", count)
            }
            NotationError::UnknownOption(name) => write!(f, "Unknown option: {}", name),
            NotationError::InvalidValue { option, value } => {
                write!(f, "Invalid value for {}: {}", option, value)
            }
            NotationError::ParseError(msg) => write!(f, "Error parsing options: {}", msg),
            NotationError::Element { index, source } => {
                write!(f, "Element {}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Element { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotationError>;

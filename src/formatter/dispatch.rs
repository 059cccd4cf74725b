use tracing::debug;

use super::notation::format_value;
use crate::error::{NotationError, Result};
use crate::types::{Formatted, NotationConfig, Numbers};

/// Format every value in order, stopping at the first failure
///
/// The error of a failing element is wrapped with its index.
pub fn format_each<I>(values: I, config: &NotationConfig) -> Result<Vec<String>>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            format_value(value, config).map_err(|e| NotationError::Element {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Format a scalar or a sequence, returning a result of the same shape
pub fn format_numbers(numbers: &Numbers, config: &NotationConfig) -> Result<Formatted> {
    match numbers {
        Numbers::Scalar(value) => format_value(*value, config).map(Formatted::Scalar),
        Numbers::Sequence(values) => {
            debug!(count = values.len(), style = ?config.style, "formatting sequence");
            format_each(values.iter().copied(), config).map(Formatted::Sequence)
        }
    }
}

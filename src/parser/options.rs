use winnow::ascii::multispace0;
use winnow::combinator::{delimited, separated, separated_pair};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::error::{NotationError, Result};
use crate::parser::tokens::{parse_option_name, parse_option_value};
use crate::types::*;

/// Parse one `name = value` assignment, surrounding whitespace included
fn parse_assignment<'s>(input: &mut &'s str) -> ModalResult<(&'s str, OptionValue)> {
    separated_pair(
        delimited(multispace0, parse_option_name, multispace0),
        literal("="),
        delimited(multispace0, parse_option_value, multispace0),
    )
    .parse_next(input)
}

/// Parse a comma separated list of assignments
///
/// Names are returned as written; matching them to options happens in
/// `NotationConfig::apply_option`.
pub fn parse_assignments(input_str: &str) -> Result<Vec<(String, OptionValue)>> {
    let mut input = input_str;

    let make_err_msg = |e, remaining: &str| -> String {
        format!("Parse error: {e:?} at remaining input '{remaining}'")
    };

    let assignments: Vec<(&str, OptionValue)> = separated(0.., parse_assignment, literal(","))
        .parse_next(&mut input)
        .map_err(|e| NotationError::ParseError(make_err_msg(e, input)))?;

    let remaining = input.trim();
    if !remaining.is_empty() {
        return Err(NotationError::ParseError(format!(
            "Unexpected input '{remaining}'"
        )));
    }

    Ok(assignments
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect())
}

/// Parse option text into a full configuration
///
/// Accepts the keyword names `LaTeX`, `significant_figures`, `suppress_extras`,
/// `e_notation`, `upper_case` and `engineering_notation`, case-insensitively.
/// Later assignments override earlier ones; empty text gives the defaults.
///
/// # Examples
/// ```
/// use sci_notation::parser::parse_config;
/// use sci_notation::types::ExponentStyle;
///
/// let config = parse_config("engineering_notation=True, significant_figures=3").unwrap();
/// assert_eq!(config.style, ExponentStyle::Engineering);
/// assert_eq!(config.options.significant_figures, Some(3));
/// ```
pub fn parse_config(input_str: &str) -> Result<NotationConfig> {
    let mut config = NotationConfig::default();
    for (name, value) in parse_assignments(input_str)? {
        config.apply_option(&name, value)?;
    }
    Ok(config)
}

/// Parse option text into presentation options only
///
/// Same grammar as [`parse_config`], but `engineering_notation` is rejected since
/// the exponent style comes from the entry point.
pub fn parse_options(input_str: &str) -> Result<NotationOptions> {
    let mut config = NotationConfig::default();
    for (name, value) in parse_assignments(input_str)? {
        if name.eq_ignore_ascii_case("engineering_notation") {
            return Err(NotationError::UnknownOption(name));
        }
        config.apply_option(&name, value)?;
    }
    Ok(config.options)
}

use winnow::ascii::{Caseless, dec_int};
use winnow::combinator::alt;
use winnow::error::ErrMode;
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Value parsers
pub fn parse_bool(input: &mut &str) -> ModalResult<OptionValue> {
    alt((
        literal(Caseless("true")).value(OptionValue::Bool(true)),
        literal(Caseless("false")).value(OptionValue::Bool(false)),
    ))
    .parse_next(input)
    .map_err(ErrMode::Backtrack)
}

pub fn parse_none(input: &mut &str) -> ModalResult<OptionValue> {
    literal(Caseless("none"))
        .value(OptionValue::None)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_integer(input: &mut &str) -> ModalResult<OptionValue> {
    dec_int
        .map(OptionValue::Int)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse any option value
pub fn parse_option_value(input: &mut &str) -> ModalResult<OptionValue> {
    alt((parse_bool, parse_none, parse_integer)).parse_next(input)
}

/// Parse an option name: a letter or underscore followed by word characters
pub fn parse_option_name<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

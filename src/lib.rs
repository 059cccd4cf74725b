pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

// Main API
pub use error::{NotationError, Result};
pub use formatter::{engineering_notation, format_numbers, format_value, scientific_notation};
pub use parser::{parse_config, parse_options};
pub use types::*;

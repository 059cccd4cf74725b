//! Option text parsing module
//!
//! This module parses keyword option text such as `LaTeX=True, significant_figures=3`
//! into a `NotationConfig`. The main entry points are `parse_config` and `parse_options`.

mod options;
mod tokens;

pub use options::{parse_assignments, parse_config, parse_options};

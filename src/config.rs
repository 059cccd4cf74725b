//! Configuration support for notation formatting
//!
//! This module maps option names onto `NotationConfig` fields and loads
//! configurations from TOML documents using the same option names.

use tracing::debug;

use crate::error::{NotationError, Result};
use crate::types::{ExponentStyle, NotationConfig, OptionValue};

fn invalid(option: &str, value: impl ToString) -> NotationError {
    NotationError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    }
}

fn expect_bool(option: &str, value: OptionValue) -> Result<bool> {
    match value {
        OptionValue::Bool(b) => Ok(b),
        other => Err(invalid(option, other)),
    }
}

impl NotationConfig {
    /// Apply one named option
    ///
    /// Names are matched case-insensitively, so both `LaTeX` and `latex` work.
    /// `significant_figures` takes an integer or `none`; every other option takes a boolean.
    pub fn apply_option(&mut self, name: &str, value: OptionValue) -> Result<()> {
        let options = &mut self.options;
        match name.to_ascii_lowercase().as_str() {
            "latex" => options.latex = expect_bool(name, value)?,
            "significant_figures" => match value {
                OptionValue::Int(count) => {
                    *options = options.clone().try_significant_figures(count)?;
                }
                OptionValue::None => options.significant_figures = None,
                other => return Err(invalid(name, other)),
            },
            "suppress_extras" => options.suppress_extras = expect_bool(name, value)?,
            "e_notation" => options.e_notation = expect_bool(name, value)?,
            "upper_case" => options.upper_case = expect_bool(name, value)?,
            "engineering_notation" => {
                self.style = if expect_bool(name, value)? {
                    ExponentStyle::Engineering
                } else {
                    ExponentStyle::Scientific
                };
            }
            _ => return Err(NotationError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Load a configuration from a TOML document
    ///
    /// Root keys use the option names accepted by [`NotationConfig::apply_option`];
    /// missing keys keep their defaults.
    ///
    /// # Examples
    /// ```
    /// use sci_notation::types::{ExponentStyle, NotationConfig};
    ///
    /// let config = NotationConfig::from_toml_str(
    ///     "engineering_notation = true\nlatex = true\nsignificant_figures = 4\n",
    /// )
    /// .unwrap();
    /// assert_eq!(config.style, ExponentStyle::Engineering);
    /// assert!(config.options.latex);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| NotationError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| NotationError::ParseError("Root is not a table".to_string()))?;

        let mut config = NotationConfig::default();
        for (key, value) in table {
            let option_value = match value {
                toml::Value::Boolean(b) => OptionValue::Bool(*b),
                toml::Value::Integer(i) => OptionValue::Int(*i),
                toml::Value::String(s) if s.eq_ignore_ascii_case("none") => OptionValue::None,
                other => return Err(invalid(key, other)),
            };
            config.apply_option(key, option_value)?;
        }

        debug!(style = ?config.style, options = ?config.options, "loaded notation config");
        Ok(config)
    }
}

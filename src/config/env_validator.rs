//! Environment variable validation with helpful error messages
//!
//! Provides consistent validation for environment variable values with:
//! - Clear warning messages for invalid values
//! - Levenshtein-based typo suggestions
//! - Fallback to default values

use std::io::Write;

use crate::domain::services::closest;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// Create a new validator for the given environment variable
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, falling back to `default` with a warning on `writer`
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let suggestion = self.suggest(value);
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                default
            }
        }
    }

    /// Suggest a valid value based on Levenshtein distance
    fn suggest(&self, value: &str) -> String {
        match closest(value, self.valid_values.iter().copied()) {
            Some(suggested) => format!(". Did you mean '{}'?", suggested),
            None => String::new(),
        }
    }
}

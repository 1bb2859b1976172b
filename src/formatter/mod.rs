//! Output formatting for committed values
//!
//! This module renders the values extracted on confirm for the caller:
//! - One value per line
//! - JSON (compact and pretty-printed, optionally colored)
//! - A single comma-joined line

mod json;

pub use json::JsonFormatter;

use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;

/// Main formatter for committed values
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    ///
    /// # Returns
    /// * `Self` - New formatter instance
    pub fn new(format_type: OutputFormat, use_colors: bool) -> Self {
        Self {
            format_type,
            use_colors,
        }
    }

    /// Create a formatter from display configuration
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.format, config.color_output)
    }

    /// Format committed values
    ///
    /// # Arguments
    /// * `values` - Values in input order
    ///
    /// # Returns
    /// * `Result<String>` - Rendered output, without a trailing newline
    pub fn format(&self, values: &[String]) -> Result<String> {
        if self.format_type.is_json() {
            let pretty = self.format_type.is_pretty();
            return JsonFormatter::new(pretty, self.use_colors, 2).format(values);
        }

        match self.format_type {
            OutputFormat::Joined => Ok(values.join(", ")),
            _ => Ok(values.join("\n")),
        }
    }

    /// Get the output format
    pub fn format_type(&self) -> OutputFormat {
        self.format_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> Vec<String> {
        vec![
            "git commit -m".to_string(),
            "git add --all".to_string(),
            "git commit -m".to_string(),
        ]
    }

    #[test]
    fn test_lines_format() {
        let formatter = Formatter::new(OutputFormat::Lines, false);
        assert_eq!(
            formatter.format(&values()).unwrap(),
            "git commit -m\ngit add --all\ngit commit -m"
        );
    }

    #[test]
    fn test_joined_format() {
        let formatter = Formatter::new(OutputFormat::Joined, true);
        assert_eq!(
            formatter.format(&values()).unwrap(),
            "git commit -m, git add --all, git commit -m"
        );
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, true);
        assert_eq!(
            formatter.format(&values()[..2]).unwrap(),
            r#"["git commit -m","git add --all"]"#
        );
    }

    #[test]
    fn test_json_pretty_format() {
        let formatter = Formatter::new(OutputFormat::JsonPretty, false);
        assert_eq!(
            formatter.format(&values()[..2]).unwrap(),
            "[\n  \"git commit -m\",\n  \"git add --all\"\n]"
        );
    }

    #[test]
    fn test_empty_values() {
        for format in [OutputFormat::Lines, OutputFormat::Joined] {
            assert_eq!(Formatter::new(format, false).format(&[]).unwrap(), "");
        }
    }

    #[test]
    fn test_from_config() {
        let formatter = Formatter::from_config(&DisplayConfig::default());
        assert_eq!(formatter.format_type(), OutputFormat::Lines);
    }
}

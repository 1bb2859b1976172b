//! JSON formatting for committed values
//!
//! Values are rendered as a JSON array of strings, either compact or
//! pretty-printed with optional color highlighting.

use colored_json::prelude::*;
use serde::Serialize;

use crate::error::{MultivalError, Result};

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Indentation level
    indent: usize,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    /// * `indent` - Spaces per indentation level
    ///
    /// # Returns
    /// * `Self` - New formatter
    pub fn new(pretty: bool, use_colors: bool, indent: usize) -> Self {
        Self {
            pretty,
            indent,
            use_colors,
        }
    }

    /// Format values as a JSON array
    ///
    /// # Arguments
    /// * `values` - Committed values
    ///
    /// # Returns
    /// * `Result<String>` - JSON array string
    pub fn format(&self, values: &[String]) -> Result<String> {
        let json_str = if self.pretty {
            self.to_pretty_string(&values)?
        } else {
            serde_json::to_string(values)?
        };

        // Compact JSON stays as-is for piping
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }

    /// Convert a value to pretty-printed JSON with custom indentation
    fn to_pretty_string<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| MultivalError::Format(e.to_string()))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false, 2)
    }
}

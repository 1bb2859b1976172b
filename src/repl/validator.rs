//! Validator for reedline - decides whether Enter confirms

use reedline::{ValidationResult, Validator};

/// Validator for the multi-value editor
///
/// In multi-line mode Enter starts a new line (a separator) and confirming
/// is bound to a separate key. An empty buffer always confirms.
pub struct MultiValueValidator {
    multi_line: bool,
}

impl MultiValueValidator {
    /// Create a new validator
    pub fn new(multi_line: bool) -> Self {
        Self { multi_line }
    }
}

impl Validator for MultiValueValidator {
    /// Validate input for completeness
    ///
    /// # Arguments
    /// * `line` - The input buffer
    ///
    /// # Returns
    /// * `ValidationResult` - Incomplete makes Enter insert a newline
    fn validate(&self, line: &str) -> ValidationResult {
        if self.multi_line && !line.trim().is_empty() {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}

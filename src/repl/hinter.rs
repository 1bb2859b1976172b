//! Hinter for reedline - provides inline hints from the first matching candidate

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use super::completion::CompletionEngine;

/// Candidate hinter for reedline
pub struct CandidateHinter {
    /// Completion engine supplying candidates
    completion_engine: CompletionEngine,
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl CandidateHinter {
    /// Create a new candidate hinter with default style
    ///
    /// # Arguments
    /// * `completion_engine` - Engine computing prefixes and candidates
    ///
    /// # Returns
    /// * `Self` - New hinter
    pub fn new(completion_engine: CompletionEngine) -> Self {
        Self {
            completion_engine,
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }

    /// Remainder of the first candidate starting with the typed text
    fn hint_for(&self, line: &str, pos: usize) -> Option<String> {
        let change = self.completion_engine.text_changed(line, pos);

        // No hint until something has been typed for the current value
        if change.context.is_empty() {
            return None;
        }

        let typed = line.get(change.context.start..pos)?;
        let needle = typed.to_lowercase();

        let visible = change.visible();
        visible
            .iter()
            .filter_map(|candidate| candidate.remainder_after(&needle))
            .find(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Hinter for CandidateHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input buffer
    /// * `pos` - Cursor position
    /// * `_history` - Command history (unused)
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only provide hints if cursor is at the end of the buffer
        if pos != line.len() {
            return String::new();
        }

        match self.hint_for(line, pos) {
            Some(hint) => {
                self.current_hint = hint;
                if use_ansi_coloring {
                    self.style.paint(&self.current_hint).to_string()
                } else {
                    self.current_hint.clone()
                }
            }
            None => String::new(),
        }
    }

    /// Return the complete hint
    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    /// Return the next word of the hint
    fn next_hint_token(&self) -> String {
        let trimmed = self.current_hint.trim_start();
        let leading = &self.current_hint[..self.current_hint.len() - trimmed.len()];
        let word = trimmed.split_whitespace().next().unwrap_or("");
        format!("{}{}", leading, word)
    }
}

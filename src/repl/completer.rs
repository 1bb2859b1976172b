//! Completer for reedline - provides completion suggestions

use reedline::{Completer, Span, Suggestion};

use super::completion::CompletionEngine;

/// Multi-value completer for reedline
pub struct MultiValueCompleter {
    /// Completion engine for prefix and candidate lookup
    completion_engine: CompletionEngine,
}

impl MultiValueCompleter {
    /// Create a new multi-value completer
    ///
    /// # Arguments
    /// * `completion_engine` - Engine computing prefixes and candidates
    ///
    /// # Returns
    /// * `Self` - New completer
    pub fn new(completion_engine: CompletionEngine) -> Self {
        Self { completion_engine }
    }
}

impl Completer for MultiValueCompleter {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input buffer
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let (start, candidates) = self.completion_engine.complete(line, pos);
        let end = pos.min(line.len()).max(start);
        let description = self.completion_engine.advertisement().map(str::to_string);

        candidates
            .into_iter()
            .map(|pair| Suggestion {
                value: pair.replacement,
                description: pair.description.or_else(|| description.clone()),
                style: None,
                extra: None,
                span: Span::new(start, end),
                append_whitespace: false,
                match_indices: pair.match_indices,
            })
            .collect()
    }
}

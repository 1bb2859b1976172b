//! Completion context definitions
//!
//! A completion context captures what is being completed for one request:
//! the prefix and the span of the buffer a chosen candidate replaces.

/// The prefix under the cursor and where it sits in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    /// Partial value being typed
    pub prefix: String,
    /// Byte offset where a chosen candidate is inserted
    pub start: usize,
    /// Cursor position (byte index), end of the replacement span
    pub cursor: usize,
}

impl CompletionContext {
    /// Create a completion context
    pub fn new(prefix: impl Into<String>, start: usize, cursor: usize) -> Self {
        Self {
            prefix: prefix.into(),
            start,
            cursor,
        }
    }

    /// Get the prefix for this context
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Check whether nothing has been typed for the current value yet
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

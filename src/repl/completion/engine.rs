//! Completion engine - orchestrates the completion flow
//!
//! This module provides the contract the input controller talks to. On every
//! text change the controller asks for the prefix and the candidate set; on
//! confirm it asks for the committed values. The engine itself holds no text
//! and no cache: each call is a pure function of its arguments and the
//! injected hooks.

use std::sync::Arc;

use tracing::debug;

use super::context::CompletionContext;
use super::hooks::CompletionHooks;
use super::lookup::{LookupElement, filter_candidates};
use super::provider::CandidateProvider;
use super::separators::SeparatorSet;
use super::tokenizer::text_before_cursor;

/// Completion pair representing a candidate suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPair {
    /// Display text for the candidate
    pub display: String,
    /// Replacement text to insert
    pub replacement: String,
    /// Optional description for the candidate
    pub description: Option<String>,
    /// Character indices of the matched prefix inside `display`
    pub match_indices: Option<Vec<usize>>,
}

/// Result of a text change: what to render
#[derive(Debug, Clone, PartialEq)]
pub struct TextChange {
    /// Prefix under the cursor and its replacement span
    pub context: CompletionContext,
    /// Full candidate set, unfiltered
    pub candidates: Vec<LookupElement>,
}

impl TextChange {
    /// Candidates matching the prefix, in candidate-set order
    pub fn visible(&self) -> Vec<LookupElement> {
        filter_candidates(&self.candidates, self.context.prefix())
    }
}

/// Main completion engine
#[derive(Clone)]
pub struct CompletionEngine {
    /// Injected prefix, candidate and commit functions
    hooks: CompletionHooks,
    /// Text advertised next to the completion popup
    advertisement: Option<String>,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `hooks` - Prefix, candidate and commit functions
    pub fn new(hooks: CompletionHooks) -> Self {
        Self {
            hooks,
            advertisement: None,
        }
    }

    /// Engine for separated multi-value input backed by `provider`
    pub fn separated(
        separators: SeparatorSet,
        negative_supported: bool,
        provider: Arc<dyn CandidateProvider>,
    ) -> Self {
        Self::new(CompletionHooks::separated(
            separators,
            negative_supported,
            provider,
        ))
    }

    /// Attach the text advertised next to the completion popup
    pub fn with_advertisement(mut self, advertisement: impl Into<String>) -> Self {
        self.advertisement = Some(advertisement.into());
        self
    }

    /// The advertised text, if any
    pub fn advertisement(&self) -> Option<&str> {
        self.advertisement.as_deref()
    }

    /// Determine the prefix under the cursor
    ///
    /// # Arguments
    /// * `text` - Full text buffer
    /// * `cursor` - Cursor position (byte index), clamped to the buffer
    pub fn context(&self, text: &str, cursor: usize) -> CompletionContext {
        let before = text_before_cursor(text, cursor);
        let span = (self.hooks.prefix)(before);

        match before.get(span.clone()) {
            Some(prefix) => CompletionContext::new(prefix, span.start, before.len()),
            None => {
                debug!(?span, len = before.len(), "prefix span out of range, ignoring");
                CompletionContext::new("", before.len(), before.len())
            }
        }
    }

    /// Text changed at the cursor
    ///
    /// # Returns
    /// * `TextChange` - The prefix and the full candidate set to render
    pub fn text_changed(&self, text: &str, cursor: usize) -> TextChange {
        let context = self.context(text, cursor);
        let candidates: Vec<LookupElement> = (self.hooks.candidates)(context.prefix())
            .into_iter()
            .map(LookupElement::new)
            .collect();

        debug!(
            prefix = context.prefix(),
            candidates = candidates.len(),
            "text changed"
        );
        TextChange {
            context,
            candidates,
        }
    }

    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input buffer
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `(usize, Vec<CompletionPair>)` - Replacement start position and matching pairs
    pub fn complete(&self, line: &str, pos: usize) -> (usize, Vec<CompletionPair>) {
        let change = self.text_changed(line, pos);
        let prefix = change.context.prefix();

        let pairs: Vec<CompletionPair> = change
            .visible()
            .into_iter()
            .map(|element| CompletionPair {
                match_indices: element.match_indices(prefix),
                display: element.value().to_string(),
                replacement: element.into_value(),
                description: None,
            })
            .collect();

        (change.context.start, pairs)
    }

    /// Confirm the input
    ///
    /// # Returns
    /// * `Vec<String>` - Committed values extracted from the full text
    pub fn confirm(&self, text: &str) -> Vec<String> {
        let values = (self.hooks.commit)(text);
        debug!(count = values.len(), "confirmed values");
        values
    }
}

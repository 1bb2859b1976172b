//! Injected completion functions
//!
//! The controller is driven by three plain functions instead of a type
//! hierarchy: one locating the prefix, one assembling candidates and one
//! extracting the committed values. The defaults wire them to the
//! separator-aware tokenizer and a [`CandidateProvider`]; any of them can be
//! swapped out.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use super::provider::CandidateProvider;
use super::separators::SeparatorSet;
use super::tokenizer::{extract_values, prefix_span};

/// Locates the prefix inside the text before the cursor
pub type PrefixHook = Arc<dyn Fn(&str) -> Range<usize> + Send + Sync>;

/// Assembles candidates for a prefix
pub type CandidateHook = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Extracts the committed values from the full text
pub type CommitHook = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// The three functions a completion engine is built from
#[derive(Clone)]
pub struct CompletionHooks {
    pub prefix: PrefixHook,
    pub candidates: CandidateHook,
    pub commit: CommitHook,
}

impl CompletionHooks {
    /// Create hooks from explicit functions
    pub fn new(prefix: PrefixHook, candidates: CandidateHook, commit: CommitHook) -> Self {
        Self {
            prefix,
            candidates,
            commit,
        }
    }

    /// Default hooks for separated multi-value input
    ///
    /// # Arguments
    /// * `separators` - Separator set used for both prefix and extraction
    /// * `negative_supported` - Strip a leading `-` from the prefix
    /// * `provider` - Candidate provider
    pub fn separated(
        separators: SeparatorSet,
        negative_supported: bool,
        provider: Arc<dyn CandidateProvider>,
    ) -> Self {
        let prefix_separators = separators.clone();
        Self {
            prefix: Arc::new(move |text: &str| {
                prefix_span(text, &prefix_separators, negative_supported)
            }),
            candidates: Arc::new(move |prefix: &str| provider.candidates(prefix)),
            commit: Arc::new(move |text: &str| extract_values(text, &separators)),
        }
    }

    /// Replace the prefix function
    pub fn with_prefix(mut self, prefix: PrefixHook) -> Self {
        self.prefix = prefix;
        self
    }

    /// Replace the candidate function
    pub fn with_candidates(mut self, candidates: CandidateHook) -> Self {
        self.candidates = candidates;
        self
    }

    /// Replace the commit function
    pub fn with_commit(mut self, commit: CommitHook) -> Self {
        self.commit = commit;
        self
    }
}

impl fmt::Debug for CompletionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHooks")
            .field("prefix", &"<fn>")
            .field("candidates", &"<fn>")
            .field("commit", &"<fn>")
            .finish()
    }
}

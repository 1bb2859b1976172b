//! Completion system for multi-value input
//!
//! This module turns free text into discrete values and offers completions
//! for the value currently being typed. It is synchronous and holds no state
//! between calls: every operation is a function of (text, cursor, settings).
//!
//! # Architecture
//!
//! The completion system consists of several components:
//!
//! - **SeparatorSet**: The characters delimiting one value from the next
//! - **Tokenizer**: Locates the prefix under the cursor and extracts committed values
//! - **Provider**: Assembles candidates from static values and a dynamic source
//! - **Lookup**: Case-insensitive matching of candidates against the prefix
//! - **Hooks**: The injected prefix, candidate and commit functions
//! - **Engine**: The contract the input controller calls on text change and confirm
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use multival::repl::completion::{
//!     CommandTemplate, CompletionEngine, SeparatorSet, TemplateCandidateProvider,
//! };
//!
//! let provider = TemplateCandidateProvider::new(
//!     vec!["git commit -m".to_string()],
//!     vec![CommandTemplate::new("git merge branch ")],
//!     Arc::new(|| vec!["main".to_string()]),
//! );
//! let engine = CompletionEngine::separated(SeparatorSet::multi_line(), false, Arc::new(provider));
//!
//! let (start, pairs) = engine.complete("a, merge", 8);
//! assert_eq!(start, 3);
//! assert_eq!(pairs[0].replacement, "git merge branch main");
//!
//! assert_eq!(engine.confirm("a, b|c"), vec!["a", "b", "c"]);
//! ```

mod context;
mod engine;
mod hooks;
mod lookup;
mod provider;
mod separators;
mod tokenizer;

pub use context::CompletionContext;
pub use engine::{CompletionEngine, CompletionPair, TextChange};
pub use hooks::{CandidateHook, CommitHook, CompletionHooks, PrefixHook};
pub use lookup::{LookupElement, filter_candidates};
pub use provider::{
    CandidateProvider, CommandTemplate, DynamicSource, TemplateCandidateProvider, get_candidates,
};
pub use separators::{MULTI_LINE_SEPARATORS, SINGLE_LINE_SEPARATORS, SeparatorSet};
pub use tokenizer::{compute_prefix, extract_values, prefix_span, text_before_cursor};

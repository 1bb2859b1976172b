//! Interactive multi-value editor
//!
//! This module provides the terminal controller built on reedline:
//! - Separator-aware completion of the value under the cursor
//! - Inline hints from the first matching candidate
//! - Highlighting of separators and negated values
//! - Multi-line input where Enter starts a new value
//! - Pre-population of the buffer with an initial value
//!
//! The completion logic itself lives in [`completion`] and does not depend
//! on reedline.

pub mod completion;

mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;
mod validator;

pub use completer::MultiValueCompleter;
pub use engine::ReplEngine;
pub use highlighter::ValueHighlighter;
pub use hinter::CandidateHinter;
pub use prompt::MultiValuePrompt;
pub use validator::MultiValueValidator;

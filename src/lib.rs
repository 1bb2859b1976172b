//! Multi-value text input library
//!
//! This library provides the building blocks of a text input holding several
//! values separated by commas, pipes or newlines, with completion of the value
//! currently being typed.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting of committed values
//! - `repl`: Interactive editor and the completion system
//! - `source`: Dynamic candidate sources
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use multival::repl::completion::{CompletionEngine, SeparatorSet, TemplateCandidateProvider};
//!
//! let provider = TemplateCandidateProvider::with_values(["git commit -m", "git add --all"]);
//! let engine = CompletionEngine::separated(SeparatorSet::multi_line(), false, Arc::new(provider));
//!
//! let change = engine.text_changed("git commit -m, git a", 20);
//! assert_eq!(change.context.prefix(), "git a");
//! assert_eq!(change.visible()[0].value(), "git add --all");
//!
//! assert_eq!(
//!     engine.confirm("git commit -m, git add --all"),
//!     vec!["git commit -m", "git add --all"]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod repl;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use error::{MultivalError, Result};
pub use formatter::Formatter;
pub use repl::ReplEngine;
pub use repl::completion::{CompletionEngine, SeparatorSet, compute_prefix, extract_values};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

//! Error handling module for multival.
//!
//! The completion core is infallible: empty or malformed input degrades to
//! empty prefixes, candidate sets and value lists. The error types here cover
//! the outer layers only:
//! - Configuration loading and validation
//! - Dynamic candidate sources (recovered locally by the source itself)
//! - Output formatting and terminal I/O
//!
//! # Example
//!
//! ```rust
//! use multival::error::{ConfigError, MultivalError, Result};
//!
//! fn check(separators: &str) -> Result<()> {
//!     if separators.is_empty() {
//!         return Err(ConfigError::EmptySeparators.into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(matches!(check(""), Err(MultivalError::Config(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, MultivalError, Result, SourceError};

//! Separator set definitions
//!
//! A separator set is the ordered list of characters that delimit one value
//! from the next. Separators carry no precedence: only the position of an
//! occurrence matters, never which separator it is.

use std::fmt;

use crate::error::ConfigError;

/// Separators for single-line, comma-separated input
pub const SINGLE_LINE_SEPARATORS: &[char] = &[','];

/// Separators for multi-line input
pub const MULTI_LINE_SEPARATORS: &[char] = &[',', '|', '\n'];

/// Ordered, non-empty set of distinct separator characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: Vec<char>,
}

impl SeparatorSet {
    /// Create a separator set from the given characters
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// * `ConfigError::EmptySeparators` - No characters were given
    pub fn new<I>(chars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut distinct: Vec<char> = Vec::new();
        for c in chars {
            if !distinct.contains(&c) {
                distinct.push(c);
            }
        }

        if distinct.is_empty() {
            return Err(ConfigError::EmptySeparators);
        }

        Ok(Self { chars: distinct })
    }

    /// `{','}`: single-line comma-separated input
    pub fn single_line() -> Self {
        Self {
            chars: SINGLE_LINE_SEPARATORS.to_vec(),
        }
    }

    /// `{',', '|', '\n'}`: multi-line input
    pub fn multi_line() -> Self {
        Self {
            chars: MULTI_LINE_SEPARATORS.to_vec(),
        }
    }

    /// Drop `'\n'` so that newlines become literal content
    ///
    /// # Errors
    /// * `ConfigError::EmptySeparators` - `'\n'` was the only separator
    pub fn without_newline(&self) -> Result<Self, ConfigError> {
        Self::new(self.chars.iter().copied().filter(|c| *c != '\n'))
    }

    /// Check whether `c` is one of the separators
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Byte index of the separator occurring latest in `text`
    ///
    /// Each separator's last occurrence is located and the maximum wins,
    /// regardless of which separator character it is.
    pub fn last_position(&self, text: &str) -> Option<usize> {
        self.chars.iter().filter_map(|c| text.rfind(*c)).max()
    }

    /// The separator characters in definition order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::single_line()
    }
}

impl fmt::Display for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.chars.iter().map(|c| c.escape_default().to_string()).collect();
        write!(f, "{{{}}}", rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let result = SeparatorSet::new(Vec::new());
        assert!(matches!(result, Err(ConfigError::EmptySeparators)));
    }

    #[test]
    fn test_new_drops_duplicates() {
        let set = SeparatorSet::new([',', '|', ',']).unwrap();
        assert_eq!(set.chars(), &[',', '|']);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SeparatorSet::single_line().chars(), &[',']);
        assert_eq!(SeparatorSet::multi_line().chars(), &[',', '|', '\n']);
        assert_eq!(SeparatorSet::default(), SeparatorSet::single_line());
    }

    #[test]
    fn test_last_position_latest_wins() {
        let set = SeparatorSet::multi_line();
        // '|' at 1, ',' at 3: the comma is later even though '|' is listed after it
        assert_eq!(set.last_position("a|b,c"), Some(3));
        // '\n' at 3 is later than ',' at 1
        assert_eq!(set.last_position("a,b\nc"), Some(3));
    }

    #[test]
    fn test_last_position_none() {
        let set = SeparatorSet::multi_line();
        assert_eq!(set.last_position("git merge branch fea"), None);
        assert_eq!(set.last_position(""), None);
    }

    #[test]
    fn test_without_newline() {
        let set = SeparatorSet::multi_line().without_newline().unwrap();
        assert_eq!(set.chars(), &[',', '|']);
        assert!(!set.contains('\n'));

        let only_newline = SeparatorSet::new(['\n']).unwrap();
        assert!(only_newline.without_newline().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SeparatorSet::multi_line().to_string(), "{, | \\n}");
    }
}

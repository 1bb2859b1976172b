//! Lookup elements for rendering candidates
//!
//! The provider hands over candidates unfiltered. Deciding which of them are
//! shown for a prefix is the renderer's job, and it does so case-insensitively
//! against a lowercase lookup key computed once per candidate.

use std::ops::Range;

/// A candidate together with its lowercase lookup key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupElement {
    value: String,
    lookup_key: String,
}

impl LookupElement {
    /// Wrap a candidate, computing its lookup key
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let lookup_key = value.to_lowercase();
        Self { value, lookup_key }
    }

    /// The candidate text inserted on acceptance
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The lowercase key used for matching
    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }

    /// Check whether the candidate should be shown for `prefix`
    ///
    /// `prefix` must already be lowercased. An empty prefix matches
    /// everything; otherwise the key must contain it.
    pub fn matches_lowercase(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.lookup_key.contains(prefix)
    }

    /// Check whether the candidate should be shown for `prefix`
    pub fn matches(&self, prefix: &str) -> bool {
        self.matches_lowercase(&prefix.to_lowercase())
    }

    /// Character indices of the first match of `prefix`, for menu highlighting
    ///
    /// The indices refer to characters of the value, not of the lookup key.
    pub fn match_indices(&self, prefix: &str) -> Option<Vec<usize>> {
        if prefix.is_empty() {
            return None;
        }
        let needle = prefix.to_lowercase();
        let key_start = self.lookup_key.find(&needle)?;
        let range = self.value_range(key_start..key_start + needle.len())?;
        let char_start = self.value[..range.start].chars().count();
        let char_len = self.value[range].chars().count();
        Some((char_start..char_start + char_len).collect())
    }

    /// Rest of the value after a leading lowercase `needle`
    ///
    /// Returns `None` unless the lookup key starts with `needle`.
    pub fn remainder_after(&self, needle: &str) -> Option<&str> {
        if !self.lookup_key.starts_with(needle) {
            return None;
        }
        let range = self.value_range(0..needle.len())?;
        Some(&self.value[range.end..])
    }

    /// Map a byte range of the lookup key back to the value
    ///
    /// Lowercasing may change the byte length of a character, so offsets are
    /// walked character by character. `None` when the range splits the
    /// lowercase form of a single character.
    fn value_range(&self, key_range: Range<usize>) -> Option<Range<usize>> {
        let mut key_pos = 0;
        let mut start = None;
        let boundaries = self
            .value
            .char_indices()
            .map(|(value_pos, c)| (value_pos, Some(c)))
            .chain(std::iter::once((self.value.len(), None)));

        for (value_pos, c) in boundaries {
            if key_pos == key_range.start {
                start.get_or_insert(value_pos);
            }
            if key_pos == key_range.end {
                return start.map(|start| start..value_pos);
            }
            let c = c?;
            key_pos += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        }
        None
    }

    /// Consume the element, returning the candidate text
    pub fn into_value(self) -> String {
        self.value
    }
}

/// Filter `candidates` down to those matching `prefix`, keeping order
pub fn filter_candidates(candidates: &[LookupElement], prefix: &str) -> Vec<LookupElement> {
    let needle = prefix.to_lowercase();
    candidates
        .iter()
        .filter(|element| element.matches_lowercase(&needle))
        .cloned()
        .collect()
}

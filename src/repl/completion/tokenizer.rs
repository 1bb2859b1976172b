//! Tokenizer and value extraction
//!
//! Two views of the same text buffer:
//! - the *prefix*: the partial value being typed, i.e. everything after the
//!   latest separator before the cursor, trimmed
//! - the *committed values*: the whole buffer split on every separator,
//!   trimmed, with empty segments dropped
//!
//! Neither operation can fail. Empty input yields an empty prefix or an
//! empty value list.

use std::ops::Range;

use tracing::trace;

use super::separators::SeparatorSet;

/// Byte range of the prefix inside `text`
///
/// The range starts at the first non-whitespace character after the latest
/// separator (skipping one leading `-` when negative values are supported)
/// and ends at the last non-whitespace character. When no separator occurs
/// the whole text is considered.
pub fn prefix_span(text: &str, separators: &SeparatorSet, negative_supported: bool) -> Range<usize> {
    let segment_start = separators
        .last_position(text)
        .map(|pos| pos + text[pos..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);

    let segment = &text[segment_start..];
    let leading = segment.len() - segment.trim_start().len();
    let trimmed = segment.trim();

    let mut start = segment_start + leading;
    let end = start + trimmed.len();

    if negative_supported && trimmed.starts_with('-') {
        start += 1;
    }

    trace!(segment_start, start, end, "prefix span");
    start..end
}

/// Compute the prefix currently being typed
///
/// # Arguments
/// * `text` - Text before the cursor
/// * `separators` - Separator set
/// * `negative_supported` - Strip a single leading `-` from the prefix
///
/// # Returns
/// * `String` - The prefix, possibly empty
pub fn compute_prefix(text: &str, separators: &SeparatorSet, negative_supported: bool) -> String {
    text[prefix_span(text, separators, negative_supported)].to_string()
}

/// Split `text` into committed values
///
/// Every separator occurrence splits, consecutive separators produce empty
/// segments, and empty segments are discarded after trimming. Order and
/// duplicates are preserved.
pub fn extract_values(text: &str, separators: &SeparatorSet) -> Vec<String> {
    text.split(|c: char| separators.contains(c))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Text before `cursor`, with the cursor clamped to the buffer
///
/// Offsets past the end are clamped to the length; offsets inside a
/// multi-byte character move back to that character's boundary.
pub fn text_before_cursor(text: &str, cursor: usize) -> &str {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    &text[..cursor]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn comma() -> SeparatorSet {
        SeparatorSet::single_line()
    }

    fn multi() -> SeparatorSet {
        SeparatorSet::multi_line()
    }

    #[test]
    fn test_prefix_without_separator_is_trimmed_text() {
        assert_eq!(
            compute_prefix("git merge branch fea", &comma(), false),
            "git merge branch fea"
        );
        assert_eq!(compute_prefix("  spaced  ", &comma(), false), "spaced");
    }

    #[test]
    fn test_prefix_after_last_separator() {
        assert_eq!(compute_prefix("a, b", &comma(), false), "b");
        assert_eq!(compute_prefix("a, b,  ", &comma(), false), "");
        assert_eq!(compute_prefix("a|b, c", &multi(), false), "c");
    }

    #[test]
    fn test_prefix_latest_separator_wins() {
        // '|' is defined after ',' but occurs earlier, so the comma splits
        assert_eq!(compute_prefix("one|two,three", &multi(), false), "three");
        // newline occurs last
        assert_eq!(compute_prefix("one,two\nthree", &multi(), false), "three");
        assert_eq!(compute_prefix("one\ntwo|three", &multi(), false), "three");
    }

    #[test]
    fn test_prefix_negative_values() {
        assert_eq!(compute_prefix("foo,-bar", &comma(), true), "bar");
        assert_eq!(compute_prefix("foo,-bar", &comma(), false), "-bar");
        assert_eq!(compute_prefix("foo, -bar", &comma(), true), "bar");
        // exactly one dash is stripped
        assert_eq!(compute_prefix("--bar", &comma(), true), "-bar");
        assert_eq!(compute_prefix("-", &comma(), true), "");
    }

    #[test]
    fn test_prefix_empty_input() {
        assert_eq!(compute_prefix("", &comma(), false), "");
        assert_eq!(compute_prefix("", &multi(), true), "");
    }

    #[test]
    fn test_prefix_span_positions() {
        assert_eq!(prefix_span("a, bc", &comma(), false), 3..5);
        assert_eq!(prefix_span("a, -bc", &comma(), true), 4..6);
        assert_eq!(prefix_span("a, ", &comma(), false), 3..3);
        assert_eq!(prefix_span("", &comma(), false), 0..0);
    }

    #[test]
    fn test_prefix_span_multibyte_separator() {
        let set = SeparatorSet::new(['·']).unwrap();
        let text = "a·bc";
        let span = prefix_span(text, &set, false);
        assert_eq!(&text[span], "bc");
    }

    #[test]
    fn test_extract_values_scenario() {
        assert_eq!(extract_values("a, b|c\nd", &multi()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_extract_values_adjacent_separators() {
        assert_eq!(extract_values("a,,b", &comma()), vec!["a", "b"]);
        assert_eq!(extract_values("a,\n|b", &multi()), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_values_edge_cases() {
        assert!(extract_values("", &comma()).is_empty());
        assert!(extract_values(",,,", &comma()).is_empty());
        assert!(extract_values(" | \n , ", &multi()).is_empty());
        assert_eq!(extract_values("single", &comma()), vec!["single"]);
    }

    #[test]
    fn test_extract_values_keeps_duplicates_and_order() {
        assert_eq!(
            extract_values("b, a, b, -c", &comma()),
            vec!["b", "a", "b", "-c"]
        );
    }

    #[test]
    fn test_extract_values_single_line_keeps_newlines() {
        let set = SeparatorSet::multi_line().without_newline().unwrap();
        assert_eq!(extract_values("a\nb, c", &set), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_text_before_cursor() {
        assert_eq!(text_before_cursor("abc", 2), "ab");
        assert_eq!(text_before_cursor("abc", 99), "abc");
        assert_eq!(text_before_cursor("abc", 0), "");
        // 'é' occupies bytes 1..3
        assert_eq!(text_before_cursor("aé", 2), "a");
    }

    const ALPHABET: &[char] = &[
        'a', 'b', 'z', 'é', 'ß', '日', ',', '|', ';', '·', '\n', '-', ' ', '\t',
    ];

    fn arb_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ALPHABET), 0..32)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn arb_separators() -> impl Strategy<Value = SeparatorSet> {
        prop::sample::subsequence(vec![',', '|', '\n', ';', '·'], 1..=5)
            .prop_map(|chars| SeparatorSet::new(chars).unwrap())
    }

    proptest! {
        /// The prefix holds no separator and ends the trimmed text.
        #[test]
        fn prop_prefix_is_separator_free_suffix(text in arb_text(), set in arb_separators()) {
            let prefix = compute_prefix(&text, &set, false);
            prop_assert!(!prefix.chars().any(|c| set.contains(c)));
            prop_assert_eq!(prefix.trim(), prefix.as_str());
            prop_assert!(text.trim_end().ends_with(prefix.as_str()));
        }

        /// Without separators the prefix is the trimmed text, minus one dash
        /// when negative values are supported.
        #[test]
        fn prop_prefix_without_separator_is_trimmed(
            text in arb_text(),
            set in arb_separators(),
            negative in any::<bool>()
        ) {
            let text: String = text.chars().filter(|c| !set.contains(*c)).collect();
            let trimmed = text.trim();
            let expected = if negative {
                trimmed.strip_prefix('-').unwrap_or(trimmed)
            } else {
                trimmed
            };
            prop_assert_eq!(compute_prefix(&text, &set, negative), expected);
        }

        /// One value per non-empty trimmed segment.
        #[test]
        fn prop_extract_count_matches_segments(text in arb_text(), set in arb_separators()) {
            let expected = text
                .split(|c: char| set.contains(c))
                .filter(|segment| !segment.trim().is_empty())
                .count();
            prop_assert_eq!(extract_values(&text, &set).len(), expected);
        }

        /// Doubling separators, or following each by another separator,
        /// adds no values.
        #[test]
        fn prop_adjacent_separators_add_nothing(text in arb_text(), set in arb_separators()) {
            let extra = set.chars()[0];
            let doubled: String = text
                .chars()
                .flat_map(|c| if set.contains(c) { vec![c, c] } else { vec![c] })
                .collect();
            let mixed: String = text
                .chars()
                .flat_map(|c| if set.contains(c) { vec![c, extra] } else { vec![c] })
                .collect();

            let values = extract_values(&text, &set);
            prop_assert_eq!(&extract_values(&doubled, &set), &values);
            prop_assert_eq!(&extract_values(&mixed, &set), &values);
        }
    }
}

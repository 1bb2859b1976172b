//! Highlighter for multi-value input
//!
//! Separators are dimmed so the individual values stand out, and in
//! negative mode a value starting with `-` is shown in red.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use super::completion::SeparatorSet;

/// Highlighter for separated values
pub struct ValueHighlighter {
    separators: SeparatorSet,
    negative_supported: bool,
    enabled: bool,
    separator_style: Style,
    negated_style: Style,
}

impl ValueHighlighter {
    /// Create a new value highlighter
    ///
    /// # Arguments
    /// * `separators` - Characters delimiting values
    /// * `negative_supported` - Highlight values starting with `-`
    /// * `enabled` - Whether highlighting is applied at all
    pub fn new(separators: SeparatorSet, negative_supported: bool, enabled: bool) -> Self {
        Self {
            separators,
            negative_supported,
            enabled,
            separator_style: Style::new().fg(Color::DarkGray).bold(),
            negated_style: Style::new().fg(Color::Red),
        }
    }

    /// Style for one value segment
    fn value_style(&self, segment: &str) -> Style {
        if self.negative_supported && segment.trim_start().starts_with('-') {
            self.negated_style
        } else {
            Style::default()
        }
    }

    fn push_segment(&self, styled: &mut StyledText, segment: &str) {
        if !segment.is_empty() {
            styled.push((self.value_style(segment), segment.to_string()));
        }
    }
}

impl Highlighter for ValueHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut segment_start = 0;
        for (index, c) in line.char_indices() {
            if self.separators.contains(c) {
                self.push_segment(&mut styled, &line[segment_start..index]);
                styled.push((self.separator_style, c.to_string()));
                segment_start = index + c.len_utf8();
            }
        }
        self.push_segment(&mut styled, &line[segment_start..]);

        styled
    }
}

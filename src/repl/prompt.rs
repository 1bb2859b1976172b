//! Custom prompt implementation for multival

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt for the multi-value editor
pub struct MultiValuePrompt {
    /// Whether Enter inserts a newline
    multi_line: bool,
}

impl MultiValuePrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `multi_line` - Whether Enter inserts a newline instead of confirming
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(multi_line: bool) -> Self {
        Self { multi_line }
    }
}

impl Prompt for MultiValuePrompt {
    /// Render the left prompt (main prompt)
    fn render_prompt_left(&self) -> std::borrow::Cow<'_, str> {
        "values> ".into()
    }

    /// Render the right prompt with the confirm shortcut
    fn render_prompt_right(&self) -> std::borrow::Cow<'_, str> {
        if self.multi_line {
            "Alt+Enter to finish".into()
        } else {
            "Enter to finish".into()
        }
    }

    /// Render the prompt indicator (empty since it is part of the left prompt)
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> std::borrow::Cow<'_, str> {
        "".into()
    }

    /// Render the multiline prompt indicator
    fn render_prompt_multiline_indicator(&self) -> std::borrow::Cow<'_, str> {
        "      > ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `std::borrow::Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> std::borrow::Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_prompt() {
        let prompt = MultiValuePrompt::new(true);
        assert_eq!(prompt.render_prompt_left(), "values> ");
    }

    #[test]
    fn test_right_prompt_shows_confirm_shortcut() {
        assert_eq!(
            MultiValuePrompt::new(true).render_prompt_right(),
            "Alt+Enter to finish"
        );
        assert_eq!(
            MultiValuePrompt::new(false).render_prompt_right(),
            "Enter to finish"
        );
    }

    #[test]
    fn test_indicator_empty() {
        let prompt = MultiValuePrompt::new(true);
        let rendered = prompt.render_prompt_indicator(PromptEditMode::Default);
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_multiline_indicator_aligned() {
        let prompt = MultiValuePrompt::new(true);
        assert_eq!(
            prompt.render_prompt_multiline_indicator().len(),
            prompt.render_prompt_left().len()
        );
    }
}

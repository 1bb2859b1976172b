use reedline::{
    EditCommand, Emacs, IdeMenu, KeyCode, KeyModifiers, MenuBuilder, Reedline, ReedlineEvent,
    ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

use super::completer::MultiValueCompleter;
use super::completion::CompletionEngine;
use super::highlighter::ValueHighlighter;
use super::hinter::CandidateHinter;
use super::prompt::MultiValuePrompt;
use super::validator::MultiValueValidator;

/// Name of the completion popup menu
const COMPLETION_MENU: &str = "completion_menu";

/// Interactive editor returning the committed values on confirm
pub struct ReplEngine {
    /// Line editor for value input
    editor: Reedline,

    /// Prompt showing the confirm shortcut
    prompt: MultiValuePrompt,

    /// Completion engine, also used to extract values on confirm
    completion_engine: CompletionEngine,

    /// Text the buffer is pre-populated with
    initial_value: String,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `completion_engine` - Engine for completion and value extraction
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(completion_engine: CompletionEngine, config: &Config) -> Result<Self> {
        let multi_line = config.is_multi_line();
        let separators = config.separators()?;

        let completion_menu = Box::new(IdeMenu::default().with_name(COMPLETION_MENU));
        let edit_mode = Box::new(Emacs::new(Self::keybindings()));

        let mut editor = Reedline::create()
            .with_completer(Box::new(MultiValueCompleter::new(completion_engine.clone())))
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(edit_mode)
            .with_highlighter(Box::new(ValueHighlighter::new(
                separators,
                config.input.supports_negative_values,
                config.display.syntax_highlighting,
            )))
            .with_validator(Box::new(MultiValueValidator::new(multi_line)))
            .with_ansi_colors(config.display.color_output);

        if config.display.hints {
            editor = editor.with_hinter(Box::new(CandidateHinter::new(completion_engine.clone())));
        }

        Ok(Self {
            editor,
            prompt: MultiValuePrompt::new(multi_line),
            completion_engine,
            initial_value: config.input.initial_value.clone(),
        })
    }

    /// Key bindings: Tab opens the menu, Alt+Enter and Ctrl+Enter confirm
    fn keybindings() -> reedline::Keybindings {
        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );
        keybindings.add_binding(KeyModifiers::ALT, KeyCode::Enter, ReedlineEvent::Submit);
        keybindings.add_binding(KeyModifiers::CONTROL, KeyCode::Enter, ReedlineEvent::Submit);
        keybindings
    }

    /// Read input until the user confirms or cancels
    ///
    /// # Returns
    /// * `Result<Option<Vec<String>>>` - Committed values, or None when cancelled
    pub fn read_values(&mut self) -> Result<Option<Vec<String>>> {
        if !self.initial_value.is_empty() {
            self.editor
                .run_edit_commands(&[EditCommand::InsertString(self.initial_value.clone())]);
        }

        match self.editor.read_line(&self.prompt)? {
            Signal::Success(buffer) => Ok(Some(self.completion_engine.confirm(&buffer))),
            signal => {
                debug!(?signal, "input cancelled");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::completion::{SeparatorSet, TemplateCandidateProvider};
    use std::sync::Arc;

    fn create_test_engine() -> CompletionEngine {
        CompletionEngine::separated(
            SeparatorSet::multi_line(),
            false,
            Arc::new(TemplateCandidateProvider::with_values(["alpha"])),
        )
    }

    #[test]
    fn test_new_engine() {
        let repl = ReplEngine::new(create_test_engine(), &Config::default()).unwrap();
        assert!(repl.initial_value.is_empty());
    }

    #[test]
    fn test_new_engine_rejects_invalid_separators() {
        let mut config = Config::default();
        config.input.separators = Some(vec!["ab".to_string()]);
        assert!(ReplEngine::new(create_test_engine(), &config).is_err());
    }

    #[test]
    fn test_initial_value_kept() {
        let mut config = Config::default();
        config.input.initial_value = "a, b".to_string();
        let repl = ReplEngine::new(create_test_engine(), &config).unwrap();
        assert_eq!(repl.initial_value, "a, b");
    }
}

//! Configuration management for multival
//!
//! This module handles loading, parsing, and validating configuration:
//! - Configuration files (TOML format)
//! - Command-line arguments (applied by the CLI layer)
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values
//!
//! `multival.example.toml` at the repository root is a documented sample
//! that feeds the templates with local git branch names.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::repl::completion::{CommandTemplate, SeparatorSet};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input and separator configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Completion candidates configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Single-line or multi-line editing
    #[serde(default = "default_mode")]
    pub mode: InputMode,

    /// Explicit separator characters, overriding the mode's defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separators: Option<Vec<String>>,

    /// Strip a leading `-` from the completion prefix
    #[serde(default)]
    pub supports_negative_values: bool,

    /// Text the buffer is pre-populated with
    #[serde(default)]
    pub initial_value: String,
}

/// Editing mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// One line; values separated by commas
    SingleLine,

    /// Several lines; values separated by comma, `|` or newline
    MultiLine,
}

/// Completion candidates configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Candidates always offered, first
    #[serde(default = "default_static_candidates")]
    pub static_candidates: Vec<String>,

    /// Command prefixes each dynamic value is appended to
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,

    /// Text shown alongside the completion popup
    #[serde(default = "default_advertisement")]
    pub advertisement: String,

    /// External command supplying dynamic values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

/// External command supplying dynamic values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Program to run
    pub command: String,

    /// Program arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format (lines, json, json-pretty, joined)
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Enable syntax highlighting of separators and negated values
    #[serde(default = "default_syntax_highlighting")]
    pub syntax_highlighting: bool,

    /// Show inline hints from the first matching candidate
    #[serde(default = "default_hints")]
    pub hints: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One value per line
    Lines,

    /// Compact JSON array of strings
    ///
    /// Example: `["git commit -m","git add --all"]`
    Json,

    /// Pretty-printed JSON array, colored on a terminal
    JsonPretty,

    /// Values joined with `", "` on a single line
    Joined,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_mode() -> InputMode {
    InputMode::MultiLine
}

fn default_static_candidates() -> Vec<String> {
    vec!["git commit -m".to_string(), "git add --all".to_string()]
}

fn default_templates() -> Vec<String> {
    vec![
        "git merge branch ".to_string(),
        "git checkout branch ".to_string(),
    ]
}

fn default_advertisement() -> String {
    "Select one or more values separated with comma, | or new lines".to_string()
}

fn default_format() -> OutputFormat {
    OutputFormat::Lines
}

fn default_color_output() -> bool {
    true
}

fn default_syntax_highlighting() -> bool {
    true
}

fn default_hints() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            separators: None,
            supports_negative_values: false,
            initial_value: String::new(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            static_candidates: default_static_candidates(),
            templates: default_templates(),
            advertisement: default_advertisement(),
            source: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color_output: default_color_output(),
            syntax_highlighting: default_syntax_highlighting(),
            hints: default_hints(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration, falling back to defaults
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and defaults otherwise.
    ///
    /// # Arguments
    /// * `path` - Optional explicit configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".multival")
            .join("config.toml")
    }

    /// Serialize the configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        self.separators().map(|_| ())
    }

    /// The effective separator set
    ///
    /// Explicit separators override the mode's defaults. In single-line mode
    /// a newline is never a separator.
    ///
    /// # Returns
    /// * `Result<SeparatorSet>` - Separators, or the offending entry
    pub fn separators(&self) -> Result<SeparatorSet> {
        let set = match &self.input.separators {
            Some(entries) => {
                let chars = entries
                    .iter()
                    .map(|entry| single_char(entry))
                    .collect::<Result<Vec<char>>>()?;
                SeparatorSet::new(chars)?
            }
            None => match self.input.mode {
                InputMode::SingleLine => SeparatorSet::single_line(),
                InputMode::MultiLine => SeparatorSet::multi_line(),
            },
        };

        match self.input.mode {
            InputMode::SingleLine => Ok(set.without_newline()?),
            InputMode::MultiLine => Ok(set),
        }
    }

    /// Whether the editor accepts newlines
    pub fn is_multi_line(&self) -> bool {
        self.input.mode == InputMode::MultiLine
    }

    /// Completion templates built from the configured prefixes
    pub fn templates(&self) -> Vec<CommandTemplate> {
        self.completion
            .templates
            .iter()
            .map(CommandTemplate::new)
            .collect()
    }
}

/// Parse a separator entry that must be exactly one character
fn single_char(entry: &str) -> Result<char> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidValue {
            field: "input.separators".to_string(),
            value: entry.to_string(),
        }
        .into()),
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl OutputFormat {
    /// Check if format is JSON-based
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }

    /// Check if format requires pretty printing
    pub fn is_pretty(&self) -> bool {
        matches!(self, OutputFormat::JsonPretty)
    }
}

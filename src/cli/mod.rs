//! Command-line interface for multival
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Mode selection (interactive vs non-interactive extraction)
//! - Building the completion engine from the effective configuration

pub mod completion;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, InputMode, LogLevel, OutputFormat, SourceConfig};
use crate::error::Result;
use crate::repl::completion::{CompletionEngine, DynamicSource, TemplateCandidateProvider};
use crate::source::{CommandSource, StaticSource};

/// Multi-value input with separator-aware completion
#[derive(Parser, Debug)]
#[command(
    name = "multival",
    version,
    about = "Multi-value text input with completion",
    long_about = "Edit a list of values separated by commas, pipes or newlines, with
completion of the value under the cursor from static candidates and templated
dynamic values. The committed values are printed on confirm."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Single-line editing (comma is the only separator)
    #[arg(long)]
    pub single_line: bool,

    /// Separator characters, e.g. ",;\n"
    #[arg(long, value_name = "CHARS")]
    pub separators: Option<String>,

    /// Allow negated values with a leading '-'
    #[arg(long)]
    pub negative: bool,

    /// Initial buffer content
    #[arg(long, value_name = "TEXT")]
    pub initial: Option<String>,

    /// Additional static candidate (repeatable)
    #[arg(long = "candidate", value_name = "VALUE")]
    pub candidates: Vec<String>,

    /// Template prefix for dynamic values (repeatable, replaces configured templates)
    #[arg(long = "template", value_name = "PREFIX")]
    pub templates: Vec<String>,

    /// Command supplying dynamic values, one per output line
    #[arg(long, value_name = "CMD")]
    pub source_command: Option<String>,

    /// Argument for the source command (repeatable)
    #[arg(long = "source-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub source_args: Vec<String>,

    /// Extract values from TEXT and print them without prompting
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format (lines, json, json-pretty, joined)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for multival
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, elvish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Print the prefix under the cursor and the matching candidates
    Complete {
        /// Input text
        #[arg(long, value_name = "TEXT")]
        text: String,

        /// Cursor position in bytes (defaults to end of text)
        #[arg(long, value_name = "N")]
        cursor: Option<usize>,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load(args.config_file.as_deref())?;

        // Validate loaded configuration
        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        // Apply CLI arguments to override config values
        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    ///
    /// # Returns
    /// * `&Config` - Reference to configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    ///
    /// # Returns
    /// * `&CliArgs` - Reference to arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_input_args(config, args);
        Self::apply_completion_args(config, args);
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply input-related CLI arguments to configuration
    fn apply_input_args(config: &mut Config, args: &CliArgs) {
        if args.single_line {
            config.input.mode = InputMode::SingleLine;
        }

        if let Some(separators) = &args.separators {
            config.input.separators = Some(parse_separators(separators));
        }

        if args.negative {
            config.input.supports_negative_values = true;
        }

        if let Some(initial) = &args.initial {
            config.input.initial_value = initial.clone();
        }
    }

    /// Apply completion-related CLI arguments to configuration
    fn apply_completion_args(config: &mut Config, args: &CliArgs) {
        config
            .completion
            .static_candidates
            .extend(args.candidates.iter().cloned());

        if !args.templates.is_empty() {
            config.completion.templates = args.templates.clone();
        }

        if let Some(command) = &args.source_command {
            config.completion.source = Some(SourceConfig {
                command: command.clone(),
                args: args.source_args.clone(),
            });
        }
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if let Some(format_str) = &args.format {
            config.display.format = Self::parse_output_format(format_str);
        }

        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Parse output format string
    fn parse_output_format(format_str: &str) -> OutputFormat {
        match format_str.to_lowercase().as_str() {
            "lines" => OutputFormat::Lines,
            "json" => OutputFormat::Json,
            "json-pretty" | "jsonpretty" => OutputFormat::JsonPretty,
            "joined" => OutputFormat::Joined,
            _ => {
                eprintln!("Warning: Unknown format '{}', using default", format_str);
                OutputFormat::Lines
            }
        }
    }

    /// Build the dynamic source from configuration
    fn build_source(&self) -> Arc<dyn DynamicSource> {
        match &self.config.completion.source {
            Some(source) => Arc::new(CommandSource::from_config(source)),
            None => Arc::new(StaticSource::default()),
        }
    }

    /// Build the completion engine from the effective configuration
    ///
    /// # Returns
    /// * `Result<CompletionEngine>` - Engine, or error for invalid separators
    pub fn build_engine(&self) -> Result<CompletionEngine> {
        let separators = self.config.separators()?;
        let provider = TemplateCandidateProvider::new(
            self.config.completion.static_candidates.clone(),
            self.config.templates(),
            self.build_source(),
        );

        Ok(CompletionEngine::separated(
            separators,
            self.config.input.supports_negative_values,
            Arc::new(provider),
        )
        .with_advertisement(self.config.completion.advertisement.clone()))
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Complete { text, cursor }) => {
                let output = self.render_completions(text, cursor.unwrap_or(text.len()))?;
                println!("{}", output);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Render the prefix and the matching candidates, one per line
    ///
    /// The first line is the prefix under the cursor.
    ///
    /// # Arguments
    /// * `text` - Input text
    /// * `cursor` - Cursor position in bytes
    ///
    /// # Returns
    /// * `Result<String>` - Rendered lines or error
    pub fn render_completions(&self, text: &str, cursor: usize) -> Result<String> {
        let engine = self.build_engine()?;
        let (_, pairs) = engine.complete(text, cursor);
        let prefix = engine.context(text, cursor).prefix;

        let mut lines = Vec::with_capacity(pairs.len() + 1);
        lines.push(prefix);
        lines.extend(pairs.into_iter().map(|pair| pair.replacement));
        Ok(lines.join("\n"))
    }

    /// Extract committed values from text without prompting
    ///
    /// # Arguments
    /// * `text` - Full input text
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Committed values
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.build_engine()?.confirm(text))
    }

    /// Show version information
    fn show_version(&self) {
        println!("multival version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return Ok(());
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }
}

/// Split a separator argument into one entry per character
///
/// `\n` is read as a newline and `\\` as a backslash.
fn parse_separators(raw: &str) -> Vec<String> {
    let mut separators = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        let separator = match c {
            '\\' => match chars.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some(other) => other,
                None => '\\',
            },
            other => other,
        };
        separators.push(separator.to_string());
    }

    separators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::completion::SeparatorSet;

    fn cli(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface { args, config }
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(vec!["multival"]).unwrap();
        assert!(args.text.is_none());
        assert!(args.candidates.is_empty());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args = CliArgs::try_parse_from(vec!["multival", "--no-color", "--quiet"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_separators(",|"), vec![",", "|"]);
        assert_eq!(parse_separators(",\\n"), vec![",", "\n"]);
        assert_eq!(parse_separators("\\\\;"), vec!["\\", ";"]);
        assert_eq!(parse_separators("\\"), vec!["\\"]);
    }

    #[test]
    fn test_input_args_override_config() {
        let cli = cli(&[
            "multival",
            "--single-line",
            "--negative",
            "--initial",
            "a, b",
        ]);
        assert_eq!(cli.config().input.mode, InputMode::SingleLine);
        assert!(cli.config().input.supports_negative_values);
        assert_eq!(cli.config().input.initial_value, "a, b");
        assert_eq!(cli.config().separators().unwrap(), SeparatorSet::single_line());
    }

    #[test]
    fn test_candidates_append_and_templates_replace() {
        let cli = cli(&[
            "multival",
            "--candidate",
            "git stash",
            "--template",
            "git rebase ",
        ]);
        let completion = &cli.config().completion;
        assert_eq!(
            completion.static_candidates,
            vec!["git commit -m", "git add --all", "git stash"]
        );
        assert_eq!(completion.templates, vec!["git rebase "]);
    }

    #[test]
    fn test_source_command_args() {
        let cli = cli(&[
            "multival",
            "--source-command",
            "git",
            "--source-arg",
            "branch",
            "--source-arg",
            "--format=%(refname:short)",
        ]);
        assert_eq!(
            cli.config().completion.source,
            Some(SourceConfig {
                command: "git".to_string(),
                args: vec!["branch".to_string(), "--format=%(refname:short)".to_string()],
            })
        );
    }

    #[test]
    fn test_logging_args() {
        assert_eq!(cli(&["multival", "-v"]).config().logging.level, LogLevel::Debug);
        assert_eq!(cli(&["multival", "--vv"]).config().logging.level, LogLevel::Trace);
        assert_eq!(cli(&["multival", "-q"]).config().logging.level, LogLevel::Error);
        assert_eq!(cli(&["multival"]).config().logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(CliInterface::parse_output_format("JSON"), OutputFormat::Json);
        assert_eq!(
            CliInterface::parse_output_format("json-pretty"),
            OutputFormat::JsonPretty
        );
        assert_eq!(CliInterface::parse_output_format("joined"), OutputFormat::Joined);
        assert_eq!(CliInterface::parse_output_format("bogus"), OutputFormat::Lines);
    }

    #[test]
    fn test_extract_multi_line() {
        let cli = cli(&["multival"]);
        assert_eq!(
            cli.extract("git commit -m, git add --all\ngit merge branch dev|x").unwrap(),
            vec!["git commit -m", "git add --all", "git merge branch dev", "x"]
        );
    }

    #[test]
    fn test_extract_single_line_keeps_newlines() {
        let cli = cli(&["multival", "--single-line"]);
        assert_eq!(cli.extract("a|b\nc, d").unwrap(), vec!["a|b\nc", "d"]);
    }

    #[test]
    fn test_extract_custom_separators() {
        let cli = cli(&["multival", "--separators", ";"]);
        assert_eq!(cli.extract("a, b; c").unwrap(), vec!["a, b", "c"]);
    }

    #[test]
    fn test_invalid_separator_surfaces_on_build() {
        let cli = cli(&["multival", "--single-line", "--separators", "\\n"]);
        assert!(cli.build_engine().is_err());
    }

    #[test]
    fn test_render_completions() {
        let cli = cli(&["multival", "--candidate", "git stash"]);
        let output = cli.render_completions("x, GIT ST", 9).unwrap();
        assert_eq!(output, "GIT ST\ngit stash");
    }

    #[test]
    fn test_render_completions_negative() {
        let cli = cli(&["multival", "--negative"]);
        let output = cli.render_completions("-git a", 6).unwrap();
        assert_eq!(output, "git a\ngit add --all");
    }

    #[test]
    fn test_complete_subcommand_parsing() {
        let args =
            CliArgs::try_parse_from(vec!["multival", "complete", "--text", "a, b", "--cursor", "2"])
                .unwrap();
        match args.command {
            Some(Commands::Complete { text, cursor }) => {
                assert_eq!(text, "a, b");
                assert_eq!(cursor, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[completion]\nstatic_candidates = [\"alpha\"]\ntemplates = []\n",
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let args = CliArgs::try_parse_from(vec!["multival", "-c", &path, "--candidate", "beta"])
            .unwrap();
        let cli = CliInterface::from_args(args).unwrap();
        assert_eq!(cli.config().completion.static_candidates, vec!["alpha", "beta"]);
        assert!(cli.config().completion.templates.is_empty());
    }
}

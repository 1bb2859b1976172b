//! multival - multi-value text input
//!
//! Edits a list of values separated by commas, pipes or newlines, completing
//! the value under the cursor, and prints the committed values on confirm.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! multival --source-command git --source-arg branch --source-arg --format=%(refname:short)
//!
//! # Non-interactive extraction
//! multival --text "git commit -m, git add --all" --format json
//! ```

use tracing::Level;

use multival::cli::CliInterface;
use multival::error::Result;
use multival::formatter::Formatter;
use multival::repl::ReplEngine;

/// Application entry point
fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Handle subcommands, non-interactive extraction or the interactive editor
///
/// # Returns
/// * `Result<bool>` - False when the user cancelled the input
fn run() -> Result<bool> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(true);
    }

    let values = match &cli.args().text {
        Some(text) => cli.extract(text)?,
        None => match run_interactive_mode(&cli)? {
            Some(values) => values,
            None => return Ok(false),
        },
    };

    display_values(&cli, &values)?;
    Ok(true)
}

/// Run the interactive editor
///
/// # Returns
/// * `Result<Option<Vec<String>>>` - Committed values, or None when cancelled
fn run_interactive_mode(cli: &CliInterface) -> Result<Option<Vec<String>>> {
    let engine = cli.build_engine()?;
    let mut repl = ReplEngine::new(engine, cli.config())?;
    repl.read_values()
}

/// Print committed values in the configured format
fn display_values(cli: &CliInterface, values: &[String]) -> Result<()> {
    let formatter = Formatter::from_config(&cli.config().display);
    let output = formatter.format(values)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Initialize logging system based on verbosity level
///
/// Logs go to stderr; stdout carries the committed values.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level: Level = cli.config().logging.level.to_tracing_level();

    // Build subscriber with level filter
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Configure timestamps
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}

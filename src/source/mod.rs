//! Dynamic candidate sources
//!
//! Sources supply the base values that completion templates expand, for
//! example branch names. They are queried on every completion request and
//! never cached. A source that fails logs the failure and yields no values,
//! so completion falls back to the static candidates.

use std::process::Command;

use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::repl::completion::DynamicSource;

/// Source returning a fixed list of values
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    values: Vec<String>,
}

impl StaticSource {
    /// Create a source from the given values
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl DynamicSource for StaticSource {
    fn fetch(&self) -> Vec<String> {
        self.values.clone()
    }
}

/// Source running an external command, one value per output line
///
/// Blank lines are skipped and every line is trimmed. The command runs
/// synchronously on each request; no timeout is applied here.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Create a command source
    ///
    /// # Arguments
    /// * `program` - Program to run, e.g. `git`
    /// * `args` - Arguments, e.g. `["branch", "--format=%(refname:short)"]`
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a command source from configuration
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Command line for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command and parse its output
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Values, or the reason the command failed
    pub fn run(&self) -> Result<Vec<String>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| SourceError::SpawnFailed {
                command: self.command_line(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SourceError::CommandFailed {
                command: self.command_line(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| SourceError::InvalidOutput(e.to_string()))?;

        Ok(parse_lines(&stdout))
    }
}

impl DynamicSource for CommandSource {
    fn fetch(&self) -> Vec<String> {
        match self.run() {
            Ok(values) => {
                debug!(command = %self.command_line(), count = values.len(), "fetched source values");
                values
            }
            Err(e) => {
                warn!("dynamic source unavailable: {}", e);
                Vec::new()
            }
        }
    }
}

/// Split command output into trimmed, non-empty lines
fn parse_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

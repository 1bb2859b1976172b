use std::{fmt, io};

/// Crate-wide `Result` type using [`MultivalError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, MultivalError>;

/// Top-level error type for multival operations.
///
/// The completion core never produces one of these. They come from the
/// surrounding layers: configuration loading, dynamic sources, output
/// formatting and the terminal editor.
#[derive(Debug)]
pub enum MultivalError {
    /// Configuration errors.
    Config(ConfigError),

    /// Dynamic candidate source errors.
    Source(SourceError),

    /// I/O errors.
    Io(io::Error),

    /// Output formatting errors.
    Format(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// The effective separator set is empty.
    EmptySeparators,
}

/// Errors raised while querying a dynamic candidate source.
#[derive(Debug)]
pub enum SourceError {
    /// The source command could not be started.
    SpawnFailed { command: String, reason: String },

    /// The source command exited unsuccessfully.
    CommandFailed { command: String, status: String, stderr: String },

    /// The source produced output that is not valid UTF-8.
    InvalidOutput(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MultivalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultivalError::Config(e) => write!(f, "Configuration error: {e}"),
            MultivalError::Source(e) => write!(f, "Source error: {e}"),
            MultivalError::Io(e) => write!(f, "I/O error: {e}"),
            MultivalError::Format(msg) => write!(f, "Format error: {msg}"),
            MultivalError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::EmptySeparators => write!(f, "At least one separator is required"),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::SpawnFailed { command, reason } => {
                write!(f, "Failed to run '{command}': {reason}")
            }
            SourceError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "'{command}' exited with {status}")
                } else {
                    write!(f, "'{command}' exited with {status}: {stderr}")
                }
            }
            SourceError::InvalidOutput(msg) => write!(f, "Invalid source output: {msg}"),
        }
    }
}

impl std::error::Error for MultivalError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for SourceError {}

/* ========================= Conversions to MultivalError ========================= */

impl From<io::Error> for MultivalError {
    fn from(err: io::Error) -> Self {
        MultivalError::Io(err)
    }
}

impl From<ConfigError> for MultivalError {
    fn from(err: ConfigError) -> Self {
        MultivalError::Config(err)
    }
}

impl From<SourceError> for MultivalError {
    fn from(err: SourceError) -> Self {
        MultivalError::Source(err)
    }
}

impl From<toml::de::Error> for MultivalError {
    fn from(err: toml::de::Error) -> Self {
        MultivalError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for MultivalError {
    fn from(err: toml::ser::Error) -> Self {
        MultivalError::Format(err.to_string())
    }
}

impl From<serde_json::Error> for MultivalError {
    fn from(err: serde_json::Error) -> Self {
        MultivalError::Format(err.to_string())
    }
}

impl From<String> for MultivalError {
    fn from(msg: String) -> Self {
        MultivalError::Generic(msg)
    }
}

impl From<&str> for MultivalError {
    fn from(msg: &str) -> Self {
        MultivalError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MultivalError::from(ConfigError::InvalidValue {
            field: "input.separators".to_string(),
            value: ",;".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value ',;' for field 'input.separators'"
        );
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::CommandFailed {
            command: "git branch".to_string(),
            status: "exit status: 128".to_string(),
            stderr: "not a git repository".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'git branch' exited with exit status: 128: not a git repository"
        );

        let quiet = SourceError::CommandFailed {
            command: "false".to_string(),
            status: "exit status: 1".to_string(),
            stderr: String::new(),
        };
        assert_eq!(quiet.to_string(), "'false' exited with exit status: 1");
    }

    #[test]
    fn test_generic_from_str() {
        let err: MultivalError = "boom".into();
        assert!(matches!(err, MultivalError::Generic(ref m) if m == "boom"));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_conversion() {
        let err: MultivalError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.to_string().starts_with("I/O error:"));
    }
}

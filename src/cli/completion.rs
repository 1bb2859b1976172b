//! Shell completion generation for multival
//!
//! This module generates shell completion scripts for bash, zsh, fish,
//! elvish and PowerShell. For bash, values of `--candidate` are completed
//! from the configured candidate set through `multival complete`.

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::CliArgs;
use crate::error::{MultivalError, Result};

/// Generate shell completion script and print it to stdout
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish, elvish, powershell)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let script = render_completion(shell_name)?;
    print!("{}", script);
    Ok(())
}

/// Render the completion script for a shell
///
/// # Arguments
/// * `shell_name` - Shell type, case-insensitive
///
/// # Returns
/// * `Result<String>` - Completion script or error for an unknown shell
pub fn render_completion(shell_name: &str) -> Result<String> {
    let shell = parse_shell(shell_name)?;

    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, "multival", &mut buffer);
    let basic_completion = String::from_utf8_lossy(&buffer).into_owned();

    match shell {
        Shell::Bash => Ok(format!("{}{}", basic_completion, BASH_CANDIDATES)),
        _ => Ok(basic_completion),
    }
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "elvish" => Ok(Shell::Elvish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        _ => Err(MultivalError::Generic(format!(
            "Unsupported shell: {}. Supported shells: bash, zsh, fish, elvish, powershell",
            shell_name
        ))),
    }
}

/// Bash hook completing `--candidate` values from the configured candidates
const BASH_CANDIDATES: &str = r#"
# Complete --candidate values from the configured candidate set
_multival_enhanced() {
    local cur prev words cword
    _init_completion || return

    if [[ "$prev" == "--candidate" ]]; then
        local IFS=$'\n'
        COMPREPLY=($(multival complete --text "$cur" 2>/dev/null | tail -n +2))
        return 0
    fi

    _multival "$@"
}

complete -F _multival_enhanced multival
"#;

//! Shell detection and export formatting.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var_os("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if env::var_os("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if env::var_os("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(path) if path.contains("zsh") => Self::Zsh,
            Ok(path) if path.contains("fish") => Self::Fish,
            Ok(path) if path.contains("pwsh") || path.contains("powershell") => Self::PowerShell,
            _ => Self::Bash,
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values are single-quoted so that spaces, newlines (PEM chains) and
    /// shell metacharacters survive.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitsign_config::output::ShellType;
    ///
    /// assert_eq!(
    ///     ShellType::Bash.format_export("GITSIGN_LOG", "/tmp/log"),
    ///     "export GITSIGN_LOG='/tmp/log'"
    /// );
    /// assert_eq!(ShellType::Fish.format_export("GITSIGN_LOG", "a b"), "set -gx GITSIGN_LOG 'a b'");
    /// assert_eq!(ShellType::PowerShell.format_export("GITSIGN_LOG", "x"), "$env:GITSIGN_LOG='x'");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                format!("export {var}='{}'", value.replace('\'', r"'\''"))
            }
            Self::Fish => format!(
                "set -gx {var} '{}'",
                value.replace('\\', r"\\").replace('\'', r"\'")
            ),
            Self::PowerShell => format!("$env:{var}='{}'", value.replace('\'', "''")),
        }
    }
}

impl FromStr for ShellType {
    type Err = String;

    /// Parse a shell name (case-insensitive): "bash", "sh", "zsh", "fish",
    /// "powershell", "pwsh".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" => Ok(Self::PowerShell),
            _ => Err(format!(
                "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
            )),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Zsh => write!(f, "zsh"),
            Self::Fish => write!(f, "fish"),
            Self::PowerShell => write!(f, "powershell"),
        }
    }
}

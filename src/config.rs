//! Formatter configuration.
//!
//! [`FormatterConfig`] controls the environment-dependent parts of a report:
//! color, terminal width, the base directory for relative paths and the
//! glyph set. It can be built in code, deserialized, or derived from the
//! environment with [`FormatterConfig::from_env`].
//!
//! # Example
//!
//! ```
//! use stylelint_pretty::config::{ColorChoice, FormatterConfig, TerminalWidth};
//!
//! let config = FormatterConfig::default()
//!     .with_color(ColorChoice::Never)
//!     .with_terminal_width(TerminalWidth::Fixed(100));
//!
//! assert_eq!(config.terminal_width.columns(), Some(100));
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Let console decide from the attached terminal.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

/// Source of the terminal width used to size the text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalWidth {
    /// Query stdout; no width when it is not a terminal.
    #[default]
    Detect,
    /// Behave as a terminal with this many columns.
    Fixed(usize),
    /// Behave as a non-interactive output.
    None,
}

impl TerminalWidth {
    /// Resolve to a column count, or `None` for non-interactive output.
    pub fn columns(self) -> Option<usize> {
        match self {
            Self::Detect => console::Term::stdout()
                .size_checked()
                .map(|(_rows, cols)| usize::from(cols)),
            Self::Fixed(columns) => Some(columns),
            Self::None => None,
        }
    }
}

/// Glyph set for severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    /// ✖ ⚠ ℹ
    #[default]
    Unicode,
    /// × ‼ i
    Fallback,
}

/// Configuration for [`ReportFormatter`](crate::report::ReportFormatter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub color: ColorChoice,
    pub terminal_width: TerminalWidth,
    /// Base for relative source paths; the process cwd when unset.
    pub cwd: Option<PathBuf>,
    pub symbols: SymbolSet,
}

impl FormatterConfig {
    /// Default configuration adjusted by `NO_COLOR` and `FORCE_COLOR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() {
            config.color = ColorChoice::Never;
        } else if std::env::var_os("FORCE_COLOR").is_some_and(|v| v != "0") {
            config.color = ColorChoice::Always;
        }
        config
    }

    /// Set the color choice.
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the terminal width source.
    pub fn with_terminal_width(mut self, terminal_width: TerminalWidth) -> Self {
        self.terminal_width = terminal_width;
        self
    }

    /// Set the base directory for relative paths.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the glyph set.
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// The configured base directory made absolute, else the process cwd.
    pub fn resolve_cwd(&self) -> Option<PathBuf> {
        match &self.cwd {
            Some(cwd) => match std::path::absolute(cwd) {
                Ok(absolute) => Some(absolute),
                Err(e) => {
                    tracing::warn!("Cannot resolve base directory {}: {}", cwd.display(), e);
                    Some(cwd.clone())
                }
            },
            None => match std::env::current_dir() {
                Ok(cwd) => Some(cwd),
                Err(e) => {
                    tracing::warn!("Cannot read current directory: {}", e);
                    None
                }
            },
        }
    }
}

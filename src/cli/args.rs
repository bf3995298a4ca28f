//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ColorChoice, FormatterConfig, SymbolSet, TerminalWidth};

/// Format stylelint JSON results as a readable report.
#[derive(Debug, Parser)]
#[command(name = "stylelint-pretty")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Results file produced by `stylelint --formatter json` (stdin if omitted)
    pub input: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Terminal width to size the message column for
    #[arg(long)]
    pub columns: Option<usize>,

    /// Treat output as non-interactive (no message column sizing)
    #[arg(long, conflicts_with = "columns")]
    pub no_tty: bool,

    /// Directory source paths are shown relative to
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Use the fallback symbol set (for consoles without full Unicode)
    #[arg(long)]
    pub fallback_symbols: bool,

    /// Exit with status 2 when the report contains errors
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Formatter configuration: environment defaults overridden by flags.
    pub fn formatter_config(&self) -> FormatterConfig {
        let mut config = FormatterConfig::from_env();

        if self.no_color {
            config.color = ColorChoice::Never;
        } else if let Some(color) = self.color {
            config.color = color;
        }

        if self.no_tty {
            config.terminal_width = TerminalWidth::None;
        } else if let Some(columns) = self.columns {
            config.terminal_width = TerminalWidth::Fixed(columns);
        }

        if let Some(cwd) = &self.cwd {
            config.cwd = Some(cwd.clone());
        }

        if self.fallback_symbols {
            config.symbols = SymbolSet::Fallback;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_and_flags() {
        let cli = Cli::parse_from([
            "stylelint-pretty",
            "results.json",
            "--no-color",
            "--columns",
            "120",
            "--cwd",
            "/project",
            "--fallback-symbols",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("results.json")));
        let config = cli.formatter_config();
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.terminal_width, TerminalWidth::Fixed(120));
        assert_eq!(config.cwd, Some(PathBuf::from("/project")));
        assert_eq!(config.symbols, SymbolSet::Fallback);
    }

    #[test]
    fn color_flag_selects_choice() {
        let cli = Cli::parse_from(["stylelint-pretty", "--color", "always"]);
        assert_eq!(cli.formatter_config().color, ColorChoice::Always);
    }

    #[test]
    fn no_tty_disables_width() {
        let cli = Cli::parse_from(["stylelint-pretty", "--no-tty"]);
        assert_eq!(cli.formatter_config().terminal_width, TerminalWidth::None);
    }

    #[test]
    fn conflicting_width_flags_are_rejected() {
        let result = Cli::try_parse_from(["stylelint-pretty", "--no-tty", "--columns", "80"]);
        assert!(result.is_err());
    }

    #[test]
    fn stdin_when_no_input() {
        let cli = Cli::parse_from(["stylelint-pretty"]);
        assert!(cli.input.is_none());
        assert!(!cli.fail_on_error);
    }
}

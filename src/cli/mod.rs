//! Command-line interface for stylelint-pretty.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Reads results, formats them and picks the exit code

pub mod args;

pub use args::Cli;

use std::io::{Read, Write};

use anyhow::Context;

use crate::error::Result;
use crate::report::{load_results, load_results_file, ReportFormatter};

/// Result of running the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Read results from the input file or `stdin`, write the report to `out`.
pub fn run<R: Read, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> Result<CommandResult> {
    let results = match &cli.input {
        Some(path) => load_results_file(path)?,
        None => load_results(stdin, "<stdin>")?,
    };
    tracing::debug!("Loaded {} result(s)", results.len());

    let formatter = ReportFormatter::new(cli.formatter_config());
    let (report, counters) = formatter.format_with_counts(&results);
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write report")?;

    if cli.fail_on_error && counters.errors > 0 {
        return Ok(CommandResult::failure(2));
    }
    Ok(CommandResult::success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const RESULTS: &str = r##"[{
        "source": "<stdin>",
        "warnings": [{"line": 1, "column": 5, "rule": "color-no-invalid-hex", "severity": "error", "text": "Unexpected invalid hex color \"#ab\" (color-no-invalid-hex)"}],
        "deprecations": [],
        "invalidOptionWarnings": []
    }]"##;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["stylelint-pretty", "--no-color", "--no-tty"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn formats_stdin() {
        let mut out = Vec::new();
        let result = run(&cli(&[]), RESULTS.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(out.contains("<stdin>:1:5"));
        assert!(out.contains("color-no-invalid-hex"));
        assert!(out.contains("1 error"));
    }

    #[test]
    fn fail_on_error_sets_exit_code() {
        let mut out = Vec::new();
        let result = run(&cli(&["--fail-on-error"]), RESULTS.as_bytes(), &mut out).unwrap();
        assert_eq!(result.exit_code, 2);
        assert!(!result.success);
    }

    #[test]
    fn clean_input_writes_nothing() {
        let mut out = Vec::new();
        let result = run(&cli(&["--fail-on-error"]), "[]".as_bytes(), &mut out).unwrap();
        assert!(result.success);
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_carries_context() {
        let err = run(&cli(&[]), RESULTS.as_bytes(), &mut BrokenPipe).unwrap_err();

        assert!(matches!(err, crate::error::ReportError::Other(_)));
        assert_eq!(err.to_string(), "Failed to write report");
    }

    #[test]
    fn malformed_input_is_an_error() {
        let mut out = Vec::new();
        assert!(run(&cli(&[]), "not json".as_bytes(), &mut out).is_err());
    }
}

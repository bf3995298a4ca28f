//! stylelint-pretty CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stylelint_pretty::cli::{run, Cli};
use stylelint_pretty::config::ColorChoice;
use stylelint_pretty::ui::ReportTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stylelint_pretty=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stylelint_pretty=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("stylelint-pretty starting with args: {:?}", cli);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    match run(&cli, stdin, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let theme = if cli.no_color || cli.color == Some(ColorChoice::Never) {
                ReportTheme::plain()
            } else {
                ReportTheme::new()
            };
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}

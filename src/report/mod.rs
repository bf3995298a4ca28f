//! Report generation.
//!
//! The pipeline for one report:
//!
//! - **Notices** - unique invalid options and deprecations ([`notices`])
//! - **Results** - one warning table per result ([`render`]), sized by
//!   [`columns`] and ordered by [`sort`]
//! - **Summary** - totals from the [`RunCounters`] gathered along the way
//!
//! # Example
//!
//! ```
//! use stylelint_pretty::config::{ColorChoice, FormatterConfig, TerminalWidth};
//! use stylelint_pretty::report::{LintResult, ReportFormatter, Warning};
//!
//! let mut result = LintResult::new("<input css 1>");
//! result.warnings.push(
//!     Warning::new("error", "Unexpected empty block (block-no-empty)")
//!         .with_line(3)
//!         .with_column(12)
//!         .with_rule("block-no-empty"),
//! );
//!
//! let formatter = ReportFormatter::new(
//!     FormatterConfig::default()
//!         .with_color(ColorChoice::Never)
//!         .with_terminal_width(TerminalWidth::None),
//! );
//! let output = formatter.format(&[result]);
//!
//! assert!(output.starts_with("\n<input css 1>\n"));
//! assert!(output.ends_with("Summary:\n ✖ 1 error\n\n"));
//! ```

pub mod columns;
pub mod model;
pub mod notices;
pub mod render;
pub mod sort;
pub mod summary;

pub use columns::ColumnWidths;
pub use model::{load_results, load_results_file, LintResult, Notice, ParseError, Severity, Warning};
pub use render::RenderContext;
pub use summary::RunCounters;

use crate::config::FormatterConfig;
use crate::ui::ReportTheme;

/// Turns lint results into a printable report.
///
/// Holds no per-report state: every call to [`format`](Self::format) starts
/// from zeroed counters, so calls are independent of each other.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    config: FormatterConfig,
    theme: ReportTheme,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl ReportFormatter {
    /// Create a formatter for the given configuration.
    pub fn new(config: FormatterConfig) -> Self {
        let theme = ReportTheme::for_choice(config.color);
        Self { config, theme }
    }

    /// Format results into a report.
    ///
    /// Returns an empty string when there is nothing to report. Otherwise
    /// the report is wrapped in one leading and two trailing newlines.
    pub fn format(&self, results: &[LintResult]) -> String {
        self.format_with_counts(results).0
    }

    /// Format results and also return the counters behind the summary.
    pub fn format_with_counts(&self, results: &[LintResult]) -> (String, RunCounters) {
        let mut counters = RunCounters::default();
        let cwd = self.config.resolve_cwd();
        let ctx = RenderContext {
            theme: &self.theme,
            symbols: self.config.symbols,
            tty_columns: self.config.terminal_width.columns(),
            cwd: cwd.as_deref(),
        };

        let mut output = notices::format_invalid_options(results, &self.theme, &mut counters);
        output.push_str(&notices::format_deprecations(
            results,
            &self.theme,
            &mut counters,
        ));

        for result in results {
            output.push_str(&render::format_result(result, &ctx, &mut counters));
        }

        output.push_str(&summary::format_summary(
            &counters,
            &self.theme,
            self.config.symbols,
        ));

        tracing::debug!(
            results = results.len(),
            errors = counters.errors,
            warnings = counters.warnings,
            invalid_options = counters.invalid_options,
            deprecations = counters.deprecations,
            "Formatted report"
        );

        let trimmed = output.trim();
        let report = if trimmed.is_empty() {
            String::new()
        } else {
            format!("\n{}\n\n", trimmed)
        };

        (report, counters)
    }
}

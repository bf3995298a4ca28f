//! stylelint-pretty - Readable terminal reports for stylelint results.
//!
//! Takes the results stylelint produces for each analyzed source and
//! renders a column-aligned, color-coded report followed by a summary.
//! Nothing is written anywhere: the report is returned as a string.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Color, terminal width and path settings
//! - [`error`] - Error types and result aliases
//! - [`report`] - Result model and the formatting pipeline
//! - [`ui`] - Theme, glyphs and table rendering
//!
//! # Example
//!
//! ```
//! use stylelint_pretty::config::{ColorChoice, FormatterConfig};
//! use stylelint_pretty::report::{LintResult, ReportFormatter};
//!
//! let formatter = ReportFormatter::new(FormatterConfig::default().with_color(ColorChoice::Never));
//!
//! // Results without findings produce no output at all
//! assert_eq!(formatter.format(&[LintResult::new("/project/a.css")]), "");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{ReportError, Result};
pub use report::ReportFormatter;

//! Lint result records.
//!
//! These types mirror the JSON shape stylelint emits for each analyzed
//! source: warnings, deprecations, invalid-option notices and, for sources
//! that failed to parse, parse errors.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Severity tag attached to a warning.
///
/// Unrecognized tags are kept verbatim in [`Severity::Other`]; such rows
/// are still rendered but carry no glyph and count toward nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    /// An error.
    Error,
    /// A warning.
    Warning,
    /// Any other tag.
    Other(String),
}

impl Severity {
    /// The tag as it appears in stylelint output.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this is the error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<String> for Severity {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lint warning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Warning {
    /// 1-based line, if known.
    #[serde(default)]
    pub line: Option<u64>,
    /// 1-based column, if known.
    #[serde(default)]
    pub column: Option<u64>,
    /// Rule that produced the warning.
    #[serde(default)]
    pub rule: Option<String>,
    /// Severity tag.
    pub severity: Severity,
    /// Message text.
    pub text: String,
}

impl Warning {
    /// Create a warning with no location and no rule.
    pub fn new(severity: impl Into<Severity>, text: impl Into<String>) -> Self {
        Self {
            line: None,
            column: None,
            rule: None,
            severity: severity.into(),
            text: text.into(),
        }
    }

    /// Set the line.
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the column.
    pub fn with_column(mut self, column: u64) -> Self {
        self.column = Some(column);
        self
    }

    /// Set the rule name.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

/// A free-text notice (deprecation or invalid option).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notice {
    /// Message text.
    pub text: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A failure to parse the source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    #[serde(default)]
    pub line: Option<u64>,
    #[serde(default)]
    pub column: Option<u64>,
    /// Kind of parse failure, e.g. `CssSyntaxError`.
    pub stylelint_type: String,
    pub text: String,
}

impl ParseError {
    /// The error expressed as an error-severity warning.
    pub fn to_warning(&self) -> Warning {
        Warning {
            line: self.line,
            column: self.column,
            rule: Some(self.stylelint_type.clone()),
            severity: Severity::Error,
            text: format!("{} ({})", self.text, self.stylelint_type),
        }
    }
}

/// Results for one analyzed source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Absolute path of the source, or a `<...>` marker for synthetic input.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
    #[serde(default)]
    pub deprecations: Vec<Notice>,
    #[serde(default)]
    pub invalid_option_warnings: Vec<Notice>,
    #[serde(default)]
    pub parse_errors: Option<Vec<ParseError>>,
}

impl LintResult {
    /// Create an empty result for the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Warnings followed by parse errors converted to warnings.
    ///
    /// Returns a fresh list; `self` is left untouched.
    pub fn merged_warnings(&self) -> Vec<Warning> {
        let parse_errors = self.parse_errors.as_deref().unwrap_or_default();
        let mut merged = Vec::with_capacity(self.warnings.len() + parse_errors.len());
        merged.extend(self.warnings.iter().cloned());
        merged.extend(parse_errors.iter().map(ParseError::to_warning));
        merged
    }
}

/// Decode a JSON array of results from a reader.
///
/// `origin` names the input in error messages.
pub fn load_results<R: Read>(reader: R, origin: &str) -> Result<Vec<LintResult>> {
    serde_json::from_reader(reader).map_err(|source| ReportError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Decode a JSON results file.
pub fn load_results_file(path: &Path) -> Result<Vec<LintResult>> {
    if !path.exists() {
        return Err(ReportError::ResultsNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    load_results(std::io::BufReader::new(file), &path.display().to_string())
}

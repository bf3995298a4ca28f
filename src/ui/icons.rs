//! Severity glyphs.
//!
//! `Glyph` mirrors the log-symbols vocabulary: a Unicode set for capable
//! terminals and a fallback set for consoles that cannot render it.

use super::theme::ReportTheme;
use crate::config::SymbolSet;
use crate::report::Severity;

/// Glyph kinds used in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Errors.
    Error,
    /// Warnings.
    Warning,
    /// Invalid options and deprecations in the summary.
    Info,
}

impl Glyph {
    /// Glyph for a warning severity, if it has one.
    pub fn for_severity(severity: &Severity) -> Option<Self> {
        match severity {
            Severity::Error => Some(Self::Error),
            Severity::Warning => Some(Self::Warning),
            Severity::Other(_) => None,
        }
    }

    /// Unicode symbol.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    /// Symbol for terminals without full Unicode support.
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Error => "×",
            Self::Warning => "‼",
            Self::Info => "i",
        }
    }

    /// Symbol from the given set.
    pub fn symbol(self, set: SymbolSet) -> &'static str {
        match set {
            SymbolSet::Unicode => self.icon(),
            SymbolSet::Fallback => self.fallback(),
        }
    }

    /// Symbol colored with the theme.
    pub fn styled(self, theme: &ReportTheme, set: SymbolSet) -> String {
        let symbol = self.symbol(set);
        match self {
            Self::Error => theme.alert.apply_to(symbol).to_string(),
            Self::Warning => theme.caution.apply_to(symbol).to_string(),
            Self::Info => theme.info.apply_to(symbol).to_string(),
        }
    }
}

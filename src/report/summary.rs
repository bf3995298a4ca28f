//! Run counters and the closing summary block.

use crate::config::SymbolSet;
use crate::ui::{Glyph, ReportTheme};

/// Counts gathered while formatting one report.
///
/// A fresh value is created per report and dropped with it, so separate
/// reports never share counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Unique deprecation notices.
    pub deprecations: usize,
    /// Rendered error-severity warnings.
    pub errors: usize,
    /// Unique invalid-option notices.
    pub invalid_options: usize,
    /// Rendered warning-severity warnings.
    pub warnings: usize,
}

impl RunCounters {
    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.deprecations + self.errors + self.invalid_options + self.warnings
    }

    /// Whether any counter is non-zero.
    pub fn has_any(&self) -> bool {
        self.total() > 0
    }
}

/// `word` for a count of one, otherwise its plural.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Render the summary block, or nothing when every counter is zero.
///
/// The block starts with a newline so it can be appended directly.
pub fn format_summary(counters: &RunCounters, theme: &ReportTheme, symbols: SymbolSet) -> String {
    if !counters.has_any() {
        return String::new();
    }

    let mut output = format!("\n{}", theme.heading.apply_to("Summary:"));
    let lines = [
        (counters.errors, Glyph::Error, &theme.alert, pluralize("error", counters.errors)),
        (counters.warnings, Glyph::Warning, &theme.caution, pluralize("warning", counters.warnings)),
        (
            counters.invalid_options,
            Glyph::Info,
            &theme.alert,
            format!("invalid {}", pluralize("option", counters.invalid_options)),
        ),
        (
            counters.deprecations,
            Glyph::Info,
            &theme.caution,
            pluralize("deprecation", counters.deprecations),
        ),
    ];

    for (count, glyph, style, noun) in lines {
        if count == 0 {
            continue;
        }
        // The glyph keeps its own color inside the line's color.
        output.push_str(&format!(
            "\n{}{}{}",
            style.apply_to(" "),
            glyph.styled(theme, symbols),
            style.apply_to(format!(" {} {}", count, noun))
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_counts() {
        assert_eq!(pluralize("error", 1), "error");
        assert_eq!(pluralize("error", 2), "errors");
        assert_eq!(pluralize("option", 0), "options");
    }

    #[test]
    fn no_summary_when_nothing_counted() {
        let counters = RunCounters::default();
        assert_eq!(
            format_summary(&counters, &ReportTheme::plain(), SymbolSet::Unicode),
            ""
        );
    }

    #[test]
    fn lists_non_zero_counters_in_fixed_order() {
        let counters = RunCounters {
            deprecations: 2,
            errors: 1,
            invalid_options: 1,
            warnings: 0,
        };

        let output = format_summary(&counters, &ReportTheme::plain(), SymbolSet::Unicode);

        assert_eq!(
            output,
            "\nSummary:\n ✖ 1 error\n ℹ 1 invalid option\n ℹ 2 deprecations"
        );
    }

    #[test]
    fn uses_fallback_symbols() {
        let counters = RunCounters {
            warnings: 3,
            ..RunCounters::default()
        };

        let output = format_summary(&counters, &ReportTheme::plain(), SymbolSet::Fallback);

        assert_eq!(output, "\nSummary:\n ‼ 3 warnings");
    }

    #[test]
    fn info_glyph_keeps_its_own_color() {
        let theme = ReportTheme::forced();
        let counters = RunCounters {
            invalid_options: 1,
            deprecations: 1,
            ..RunCounters::default()
        };

        let output = format_summary(&counters, &theme, SymbolSet::Unicode);
        let blue_info = theme.info.apply_to("ℹ").to_string();

        assert_eq!(output.matches(&blue_info).count(), 2);
        assert_eq!(
            console::strip_ansi_codes(&output),
            "\nSummary:\n ℹ 1 invalid option\n ℹ 1 deprecation"
        );
    }

    #[test]
    fn total_sums_all_counters() {
        let counters = RunCounters {
            deprecations: 1,
            errors: 2,
            invalid_options: 3,
            warnings: 4,
        };
        assert_eq!(counters.total(), 10);
        assert!(counters.has_any());
    }
}

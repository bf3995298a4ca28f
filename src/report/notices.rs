//! Invalid-option and deprecation notices.
//!
//! Notices are collected across all results, de-duplicated by exact text
//! (first occurrence wins) and rendered as a block ahead of the warnings.

use itertools::Itertools;

use super::model::{LintResult, Notice};
use super::summary::RunCounters;
use crate::ui::ReportTheme;

fn unique_texts<'a, F>(results: &'a [LintResult], notices: F) -> Vec<&'a str>
where
    F: Fn(&'a LintResult) -> &'a [Notice],
{
    results
        .iter()
        .flat_map(|result| notices(result).iter().map(|n| n.text.as_str()))
        .unique()
        .collect()
}

/// Render unique invalid-option notices and record their count.
pub fn format_invalid_options(
    results: &[LintResult],
    theme: &ReportTheme,
    counters: &mut RunCounters,
) -> String {
    let texts = unique_texts(results, |r| r.invalid_option_warnings.as_slice());
    counters.invalid_options = texts.len();

    texts
        .iter()
        .map(|text| format!("{}{}.\n", theme.alert.apply_to("Invalid option: "), text))
        .collect()
}

/// Render unique deprecation notices and record their count.
pub fn format_deprecations(
    results: &[LintResult],
    theme: &ReportTheme,
    counters: &mut RunCounters,
) -> String {
    let texts = unique_texts(results, |r| r.deprecations.as_slice());
    counters.deprecations = texts.len();

    texts
        .iter()
        .map(|text| format!("{}{}\n", theme.caution.apply_to("Deprecated rule: "), text))
        .collect()
}

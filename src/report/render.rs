//! Per-result warning table.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::columns::ColumnWidths;
use super::model::{LintResult, Severity, Warning};
use super::sort::sort_warnings;
use super::summary::RunCounters;
use crate::config::SymbolSet;
use crate::ui::{Glyph, ReportTheme, Table};

/// Runs of control characters, collapsed to a single space in messages.
static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x01-\x1A]+").expect("CONTROL_CHARS must compile")
});

/// Everything a result needs from its surroundings to render.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a ReportTheme,
    pub symbols: SymbolSet,
    /// Terminal width, `None` for non-interactive output.
    pub tty_columns: Option<usize>,
    /// Base for relative paths.
    pub cwd: Option<&'a Path>,
}

/// Path shown for a source.
///
/// Sources starting with `<` name synthetic input and are kept verbatim.
/// Other sources are made relative to `cwd` and use `/` separators.
pub fn display_path(source: &str, cwd: Option<&Path>) -> String {
    if source.starts_with('<') {
        return source.to_string();
    }

    let relative = cwd.and_then(|cwd| {
        let base = normalize(&std::path::absolute(cwd).unwrap_or_else(|_| cwd.to_path_buf()));
        pathdiff::diff_paths(normalize(&base.join(source)), &base)
    });

    match relative {
        Some(relative) => relative
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/"),
        None => source.replace('\\', "/"),
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// `path:line:column`, omitting whatever is unknown.
///
/// The column is only shown together with a line.
pub fn location_label(path: &str, warning: &Warning) -> String {
    let mut location = path.to_string();

    if let Some(line) = warning.line.filter(|&l| l > 0) {
        if location.is_empty() {
            location = line.to_string();
        } else {
            location.push_str(&format!(":{}", line));
        }

        if let Some(column) = warning.column.filter(|&c| c > 0) {
            location.push_str(&format!(":{}", column));
        }
    }

    location
}

/// Message with control characters flattened and a trailing `(rule)` removed.
pub fn clean_text(text: &str, rule: Option<&str>) -> String {
    let flattened = CONTROL_CHARS.replace_all(text, " ");
    if let Some(rule) = rule.filter(|r| !r.is_empty()) {
        let suffix = format!("({})", rule);
        if let Some(stripped) = flattened.strip_suffix(suffix.as_str()) {
            return stripped.to_string();
        }
    }
    flattened.into_owned()
}

fn count(severity: &Severity, counters: &mut RunCounters) {
    match severity {
        Severity::Error => counters.errors += 1,
        Severity::Warning => counters.warnings += 1,
        Severity::Other(_) => {}
    }
}

fn build_row(warning: &Warning, path: &str, ctx: &RenderContext<'_>) -> [String; 4] {
    let glyph = Glyph::for_severity(&warning.severity)
        .map(|g| g.styled(ctx.theme, ctx.symbols))
        .unwrap_or_default();
    let rule = warning.rule.as_deref().unwrap_or("");

    [
        ctx.theme.dim.apply_to(location_label(path, warning)).to_string(),
        glyph,
        clean_text(&warning.text, warning.rule.as_deref()),
        ctx.theme.dim.apply_to(rule).to_string(),
    ]
}

/// Render one result's warnings, parse errors included, as a table.
///
/// Returns an empty string when there is nothing to show. Otherwise the
/// block starts with a blank line and, when the result names a source, an
/// underlined header with its path.
pub fn format_result(
    result: &LintResult,
    ctx: &RenderContext<'_>,
    counters: &mut RunCounters,
) -> String {
    let mut warnings = result.merged_warnings();
    if warnings.is_empty() {
        return String::new();
    }
    sort_warnings(&mut warnings);

    let source = result.source.as_deref().filter(|s| !s.is_empty());
    let path = source
        .map(|s| display_path(s, ctx.cwd))
        .unwrap_or_default();

    let mut widths = ColumnWidths::default();
    let rows: Vec<[String; 4]> = warnings
        .iter()
        .map(|warning| {
            count(&warning.severity, counters);
            let row = build_row(warning, &path, ctx);
            widths.update(&row);
            row
        })
        .collect();

    let resolved = widths.resolved(ctx.tty_columns);
    tracing::trace!(
        source = %path,
        rows = rows.len(),
        widths = ?widths.0,
        text_width = resolved[2],
        "Laid out warning table"
    );

    let mut table = Table::new(resolved.to_vec());
    for row in rows {
        table.add_row(row.into());
    }

    let mut output = String::from("\n");
    if source.is_some() {
        output.push_str(&format!(" {}\n", ctx.theme.heading.apply_to(&path)));
    }
    output.push_str(&table.render());
    output
}

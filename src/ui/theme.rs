//! Visual theme and styling.

use console::Style;

use crate::config::ColorChoice;

/// Styles used by the report.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for errors and invalid options (red).
    pub alert: Style,
    /// Style for warnings and deprecations (yellow).
    pub caution: Style,
    /// Style for informational glyphs (blue).
    pub info: Style,
    /// Style for locations and rule names (dim).
    pub dim: Style,
    /// Style for source headers and the summary title (underlined).
    pub heading: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the default colored theme.
    ///
    /// Whether escapes are actually emitted is left to console's own
    /// terminal detection.
    pub fn new() -> Self {
        Self {
            alert: Style::new().red(),
            caution: Style::new().yellow(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            heading: Style::new().underlined(),
        }
    }

    /// Create a theme that always emits escapes.
    pub fn forced() -> Self {
        let theme = Self::new();
        Self {
            alert: theme.alert.force_styling(true),
            caution: theme.caution.force_styling(true),
            info: theme.info.force_styling(true),
            dim: theme.dim.force_styling(true),
            heading: theme.heading.force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            alert: Style::new(),
            caution: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            heading: Style::new(),
        }
    }

    /// Pick a theme for a color choice.
    pub fn for_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::new(),
            ColorChoice::Always => Self::forced(),
            ColorChoice::Never => Self::plain(),
        }
    }

    /// Format an error message for stderr (icon + text in red).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.alert.apply_to(format!("✖ {}", msg)))
    }
}

//! Terminal presentation primitives.
//!
//! This module provides:
//! - [`ReportTheme`] for the colors used in a report
//! - [`Glyph`] for severity symbols
//! - [`Table`] for borderless, width-bounded tables

pub mod icons;
pub mod table;
pub mod theme;

pub use icons::Glyph;
pub use table::Table;
pub use theme::ReportTheme;

//! `zonesnap template`: print a built-in layout.

use super::types::TemplateKind;
use crate::error::ZoneSnapError;
use crate::zones::Layout;
use crate::zones::geometry::templates;

/// Builds the layout for a template.
///
/// `count` is the number of columns or rows; `rows` is only used by the grid.
#[must_use]
pub fn build(kind: TemplateKind, count: u32, rows: u32) -> Layout {
    match kind {
        TemplateKind::Columns => templates::columns(count),
        TemplateKind::Rows => templates::rows(count),
        TemplateKind::Grid => templates::grid(count, rows),
        TemplateKind::Priority => templates::priority_grid(),
        TemplateKind::Focus => templates::focus(),
    }
}

/// Prints the template as pretty JSON, ready to save as a layout file.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn execute(kind: TemplateKind, count: u32, rows: u32) -> Result<(), ZoneSnapError> {
    let layout = build(kind, count, rows);
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

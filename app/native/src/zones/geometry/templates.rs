//! Built-in layout templates.
//!
//! Every template produces relative-mode zones that tile the unit square with
//! no gaps, so the resolver is solely responsible for spacing.

use crate::zones::state::{Layout, Rect, Zone};

/// Equal-width vertical columns. `count == 0` yields an empty layout.
#[must_use]
pub fn columns(count: u32) -> Layout {
    let zones = (0..count)
        .map(|i| {
            let geometry = Rect::new(fraction(i, count), 0.0, span(i, count), 1.0);
            Zone::relative(format!("Column {}", i + 1), geometry)
        })
        .collect();
    Layout::with_zones(format!("{count} Columns"), zones)
}

/// Equal-height horizontal rows. `count == 0` yields an empty layout.
#[must_use]
pub fn rows(count: u32) -> Layout {
    let zones = (0..count)
        .map(|i| {
            let geometry = Rect::new(0.0, fraction(i, count), 1.0, span(i, count));
            Zone::relative(format!("Row {}", i + 1), geometry)
        })
        .collect();
    Layout::with_zones(format!("{count} Rows"), zones)
}

/// A `cols` × `rows` grid, numbered row-major from the top-left.
#[must_use]
pub fn grid(cols: u32, rows: u32) -> Layout {
    let mut zones = Vec::with_capacity(cols.saturating_mul(rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let geometry = Rect::new(
                fraction(col, cols),
                fraction(row, rows),
                span(col, cols),
                span(row, rows),
            );
            zones.push(Zone::relative(format!("Cell {}.{}", row + 1, col + 1), geometry));
        }
    }
    Layout::with_zones(format!("{cols}x{rows} Grid"), zones)
}

/// A large primary zone on the left with two stacked zones on the right.
#[must_use]
pub fn priority_grid() -> Layout {
    let mut layout = Layout::with_zones(
        "Priority Grid",
        vec![
            Zone::relative("Primary", Rect::new(0.0, 0.0, 2.0 / 3.0, 1.0)),
            Zone::relative("Secondary", Rect::new(2.0 / 3.0, 0.0, 1.0 / 3.0, 0.5)),
            Zone::relative("Tertiary", Rect::new(2.0 / 3.0, 0.5, 1.0 / 3.0, 0.5)),
        ],
    );
    layout.description = "Large primary zone with a stacked side column".to_string();
    layout
}

/// A wide centre zone flanked by two narrow side zones.
#[must_use]
pub fn focus() -> Layout {
    let mut layout = Layout::with_zones(
        "Focus",
        vec![
            Zone::relative("Left", Rect::new(0.0, 0.0, 0.2, 1.0)),
            Zone::relative("Center", Rect::new(0.2, 0.0, 0.6, 1.0)),
            Zone::relative("Right", Rect::new(0.8, 0.0, 0.2, 1.0)),
        ],
    );
    layout.description = "Wide centre zone with narrow side zones".to_string();
    layout
}

/// Start of slot `index` out of `count`.
fn fraction(index: u32, count: u32) -> f64 { f64::from(index) / f64::from(count) }

/// Width of slot `index`, computed from neighbouring starts so slots tile exactly.
fn span(index: u32, count: u32) -> f64 { fraction(index + 1, count) - fraction(index, count) }

// ============================================================================
// Tests
// ============================================================================

//! Capabilities the geometry engine consumes from its host.
//!
//! The engine never reads settings or screens directly. Hosts implement
//! [`GapSettings`] (usually the loaded configuration) and [`ScreenProvider`]
//! (usually a [`Screen`] snapshot) and pass them in.

use crate::zones::state::{EdgeGaps, Rect, Screen};

/// Global gap settings used when a layout has no override.
///
/// All values are fully resolved, non-negative pixel counts.
pub trait GapSettings {
    /// Gap between adjacent zones.
    fn zone_padding(&self) -> u32;

    /// Uniform gap at the screen boundary.
    fn outer_gap(&self) -> u32;

    /// Whether the per-edge outer gaps replace the uniform one.
    fn use_per_side_outer_gap(&self) -> bool { false }

    /// Outer gap at the top edge.
    fn outer_gap_top(&self) -> u32 { self.outer_gap() }

    /// Outer gap at the bottom edge.
    fn outer_gap_bottom(&self) -> u32 { self.outer_gap() }

    /// Outer gap at the left edge.
    fn outer_gap_left(&self) -> u32 { self.outer_gap() }

    /// Outer gap at the right edge.
    fn outer_gap_right(&self) -> u32 { self.outer_gap() }

    /// The effective outer gaps: per-edge values if active, else uniform.
    fn outer_gaps(&self) -> EdgeGaps {
        if self.use_per_side_outer_gap() {
            EdgeGaps::new(
                to_gap(self.outer_gap_top()),
                to_gap(self.outer_gap_bottom()),
                to_gap(self.outer_gap_left()),
                to_gap(self.outer_gap_right()),
            )
        } else {
            EdgeGaps::uniform(to_gap(self.outer_gap()))
        }
    }
}

fn to_gap(value: u32) -> i32 { i32::try_from(value).unwrap_or(i32::MAX) }

/// Supplies the reference rectangles zones are resolved against.
pub trait ScreenProvider {
    /// Full screen bounds.
    fn frame(&self) -> Rect;

    /// Screen bounds with reserved panel areas removed.
    fn available_frame(&self) -> Rect { self.frame() }
}

impl ScreenProvider for Screen {
    fn frame(&self) -> Rect { self.frame }

    fn available_frame(&self) -> Rect { self.visible_frame }
}

impl ScreenProvider for Rect {
    fn frame(&self) -> Rect { *self }
}

/// Fixed gap values, handy for tests and callers without a settings store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticGaps {
    /// Gap between adjacent zones.
    pub zone_padding: u32,
    /// Outer gaps per edge.
    pub outer: EdgeGaps,
}

impl StaticGaps {
    /// Same outer gap on every edge.
    #[must_use]
    pub const fn uniform(zone_padding: u32, outer_gap: u32) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let outer = EdgeGaps::uniform(outer_gap as i32);
        Self { zone_padding, outer }
    }

    /// No gaps at all.
    #[must_use]
    pub const fn zero() -> Self { Self::uniform(0, 0) }
}

impl GapSettings for StaticGaps {
    fn zone_padding(&self) -> u32 { self.zone_padding }

    fn outer_gap(&self) -> u32 { non_negative(self.outer.top) }

    fn use_per_side_outer_gap(&self) -> bool { true }

    fn outer_gap_top(&self) -> u32 { non_negative(self.outer.top) }

    fn outer_gap_bottom(&self) -> u32 { non_negative(self.outer.bottom) }

    fn outer_gap_left(&self) -> u32 { non_negative(self.outer.left) }

    fn outer_gap_right(&self) -> u32 { non_negative(self.outer.right) }
}

fn non_negative(value: i32) -> u32 { u32::try_from(value).unwrap_or(0) }

// ============================================================================
// Tests
// ============================================================================

//! Gap configuration types.
//!
//! Global gap settings used by every layout that does not override them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::zones::GapSettings;

/// Default gap between adjacent zones, in pixels.
pub const DEFAULT_ZONE_PADDING: u32 = 8;

/// Default gap at the screen boundary, in pixels.
pub const DEFAULT_OUTER_GAP: u32 = 8;

/// Global gaps configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GapsConfig {
    /// Gap between adjacent zones.
    pub zone_padding: u32,

    /// Uniform gap at the screen boundary.
    pub outer_gap: u32,

    /// Use the per-side values below instead of `outerGap`.
    pub use_per_side_outer_gap: bool,

    /// Gap at the top screen edge.
    pub outer_gap_top: u32,

    /// Gap at the bottom screen edge.
    pub outer_gap_bottom: u32,

    /// Gap at the left screen edge.
    pub outer_gap_left: u32,

    /// Gap at the right screen edge.
    pub outer_gap_right: u32,
}

impl Default for GapsConfig {
    fn default() -> Self {
        Self {
            zone_padding: DEFAULT_ZONE_PADDING,
            outer_gap: DEFAULT_OUTER_GAP,
            use_per_side_outer_gap: false,
            outer_gap_top: DEFAULT_OUTER_GAP,
            outer_gap_bottom: DEFAULT_OUTER_GAP,
            outer_gap_left: DEFAULT_OUTER_GAP,
            outer_gap_right: DEFAULT_OUTER_GAP,
        }
    }
}

impl GapSettings for GapsConfig {
    fn zone_padding(&self) -> u32 { self.zone_padding }

    fn outer_gap(&self) -> u32 { self.outer_gap }

    fn use_per_side_outer_gap(&self) -> bool { self.use_per_side_outer_gap }

    fn outer_gap_top(&self) -> u32 { self.outer_gap_top }

    fn outer_gap_bottom(&self) -> u32 { self.outer_gap_bottom }

    fn outer_gap_left(&self) -> u32 { self.outer_gap_left }

    fn outer_gap_right(&self) -> u32 { self.outer_gap_right }
}

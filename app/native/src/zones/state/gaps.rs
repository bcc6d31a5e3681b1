//! Per-edge gap values with an "inherit" sentinel.
//!
//! Layouts store their gap overrides with `-1` meaning "use the value from the
//! enclosing scope" (the global settings). [`EdgeGaps::resolve`] must be
//! applied before the values are used geometrically.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "inherit from the enclosing scope".
pub const INHERIT: i32 = -1;

/// Four independent pixel gaps, one per screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeGaps {
    /// Gap at the top edge.
    pub top: i32,
    /// Gap at the bottom edge.
    pub bottom: i32,
    /// Gap at the left edge.
    pub left: i32,
    /// Gap at the right edge.
    pub right: i32,
}

impl Default for EdgeGaps {
    fn default() -> Self { Self::inherit() }
}

impl EdgeGaps {
    /// Create gaps with separate values per edge.
    #[must_use]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Create gaps with the same value on every edge.
    #[must_use]
    pub const fn uniform(gap: i32) -> Self { Self::new(gap, gap, gap, gap) }

    /// Create gaps that inherit every edge from the enclosing scope.
    #[must_use]
    pub const fn inherit() -> Self { Self::uniform(INHERIT) }

    /// Create gaps with every edge set to zero.
    #[must_use]
    pub const fn zero() -> Self { Self::uniform(0) }

    /// Returns true if no edge still carries the inherit sentinel.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.top >= 0 && self.bottom >= 0 && self.left >= 0 && self.right >= 0
    }

    /// Returns true if every edge inherits.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        self.top < 0 && self.bottom < 0 && self.left < 0 && self.right < 0
    }

    /// Replaces every inheriting edge with the matching edge of `fallback`.
    ///
    /// Edges that are still negative afterwards are clamped to zero, so the
    /// result is always fully resolved.
    #[must_use]
    pub const fn resolve(&self, fallback: &Self) -> Self {
        Self {
            top: pick(self.top, fallback.top),
            bottom: pick(self.bottom, fallback.bottom),
            left: pick(self.left, fallback.left),
            right: pick(self.right, fallback.right),
        }
    }

    /// Returns the edges as `(top, bottom, left, right)` pixel insets.
    ///
    /// Inheriting edges count as zero.
    #[must_use]
    pub fn to_insets(&self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.top.max(0)),
            f64::from(self.bottom.max(0)),
            f64::from(self.left.max(0)),
            f64::from(self.right.max(0)),
        )
    }
}

const fn pick(value: i32, fallback: i32) -> i32 {
    let chosen = if value < 0 { fallback } else { value };
    if chosen < 0 { 0 } else { chosen }
}

// ============================================================================
// Tests
// ============================================================================

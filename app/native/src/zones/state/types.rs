//! Core geometry types shared by zones, layouts and the constraint solver.
//!
//! All coordinates are in logical pixels with the origin at the top-left of
//! the virtual desktop. Relative zone geometry reuses [`Rect`] with components
//! in the normalized 0..1 range.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry Types
// ============================================================================

/// A rectangle with position and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a zero-sized rectangle at origin.
    #[must_use]
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }

    /// Create a rectangle from its four edges.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Check if this rectangle has valid dimensions.
    #[must_use]
    pub fn is_valid(&self) -> bool { self.width > 0.0 && self.height > 0.0 }

    /// X coordinate of the right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Y coordinate of the bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Check if this rectangle contains a point.
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive, so
    /// two rectangles sharing an edge never both claim a point on it.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check if this rectangle intersects with another (positive overlap area).
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Area shared by two rectangles, zero when they do not intersect.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }

    /// Calculate the area of this rectangle.
    #[must_use]
    pub fn area(&self) -> f64 { self.width * self.height }

    /// Get the center point of this rectangle.
    #[must_use]
    pub fn center(&self) -> Point { Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0) }

    /// Euclidean distance from a point to the nearest edge, zero if inside.
    #[must_use]
    pub fn distance_to_point(&self, point: Point) -> f64 {
        let dx = (self.x - point.x).max(point.x - self.right()).max(0.0);
        let dy = (self.y - point.y).max(point.y - self.bottom()).max(0.0);
        dx.hypot(dy)
    }

    /// Rounds the four edges to whole pixels.
    ///
    /// Rounding edges instead of sizes keeps boundaries shared by two
    /// rectangles identical after rounding.
    #[must_use]
    pub fn round_edges(&self) -> Self {
        Self::from_edges(
            self.x.round(),
            self.y.round(),
            self.right().round(),
            self.bottom().round(),
        )
    }

    /// Check if two rectangles are approximately equal (within epsilon).
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.width - other.width).abs() < epsilon
            && (self.height - other.height).abs() < epsilon
    }
}

/// A point in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

// ============================================================================
// Screen Type
// ============================================================================

/// A physical display as seen by the geometry engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Display name (e.g., "DP-1").
    pub name: String,

    /// Full frame including panel areas.
    pub frame: Rect,

    /// Usable frame (excluding panels and taskbars).
    pub visible_frame: Rect,
}

impl Screen {
    /// Creates a screen whose visible frame equals its full frame.
    #[must_use]
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self { name: name.into(), frame, visible_frame: frame }
    }

    /// Sets the visible frame (panel exclusion area removed).
    #[must_use]
    pub fn with_visible_frame(mut self, visible_frame: Rect) -> Self {
        self.visible_frame = visible_frame;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

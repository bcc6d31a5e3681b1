//! Axis abstraction shared by the solver phases.
//!
//! Every phase works on one axis at a time. `Axis` maps a rectangle to its
//! span along that axis (start, length, end) and along the perpendicular axis.

use super::MinSize;
use crate::zones::state::Rect;

/// Coordinates closer than this are treated as the same pixel boundary.
pub const TOLERANCE: f64 = 0.5;

/// Smallest length any rectangle is shrunk to.
pub const MIN_LENGTH_PX: f64 = 1.0;

/// Direction the solver is currently working along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Widths, x coordinates.
    Horizontal,
    /// Heights, y coordinates.
    Vertical,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    pub fn start(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    pub fn len(self, rect: &Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    pub fn end(self, rect: &Rect) -> f64 { self.start(rect) + self.len(rect) }

    /// Moves both edges along this axis, leaving the perpendicular span untouched.
    pub fn set_span(self, rect: &mut Rect, start: f64, end: f64) {
        match self {
            Self::Horizontal => {
                rect.x = start;
                rect.width = end - start;
            }
            Self::Vertical => {
                rect.y = start;
                rect.height = end - start;
            }
        }
    }

    /// Whether `a` and `b` share a positive-length span on the perpendicular axis.
    pub fn cross_overlaps(self, a: &Rect, b: &Rect) -> bool {
        let cross = self.cross();
        let overlap = cross.end(a).min(cross.end(b)) - cross.start(a).max(cross.start(b));
        overlap > TOLERANCE
    }

    /// Requested length, rounded up to whole pixels; zero when unconstrained.
    pub fn required(self, min: &MinSize) -> f64 {
        let value = match self {
            Self::Horizontal => min.width,
            Self::Vertical => min.height,
        };
        if value.is_finite() && value > 0.0 { value.ceil() } else { 0.0 }
    }

    /// Length a rectangle must keep when donating space.
    pub fn floor(self, min: &MinSize) -> f64 { self.required(min).max(MIN_LENGTH_PX) }

    /// How far `rect` falls short of its minimum (negative when satisfied).
    pub fn deficit(self, rect: &Rect, min: &MinSize) -> f64 { self.required(min) - self.len(rect) }

    /// Space `rect` can give up without dropping below its floor.
    pub fn surplus(self, rect: &Rect, min: &MinSize) -> f64 {
        (self.len(rect) - self.floor(min)).max(0.0)
    }

    /// Whether any rectangle is meaningfully below its minimum on this axis.
    pub fn has_deficit(self, rects: &[Rect], min_sizes: &[MinSize]) -> bool {
        rects.iter().zip(min_sizes).any(|(rect, min)| self.deficit(rect, min) > TOLERANCE)
    }

    const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let rect = Rect::new(10.0, 20.0, 300.0, 400.0);
        assert_eq!(Axis::Horizontal.start(&rect), 10.0);
        assert_eq!(Axis::Horizontal.end(&rect), 310.0);
        assert_eq!(Axis::Vertical.len(&rect), 400.0);
        assert_eq!(Axis::Vertical.end(&rect), 420.0);
    }

    #[test]
    fn test_set_span_keeps_cross_axis() {
        let mut rect = Rect::new(10.0, 20.0, 300.0, 400.0);
        Axis::Horizontal.set_span(&mut rect, 50.0, 150.0);
        assert_eq!(rect, Rect::new(50.0, 20.0, 100.0, 400.0));
        Axis::Vertical.set_span(&mut rect, 0.0, 10.0);
        assert_eq!(rect, Rect::new(50.0, 0.0, 100.0, 10.0));
    }

    #[test]
    fn test_required_rounds_up_and_ignores_invalid() {
        assert_eq!(Axis::Horizontal.required(&MinSize::new(399.2, 0.0)), 400.0);
        assert_eq!(Axis::Vertical.required(&MinSize::new(399.2, 0.0)), 0.0);
        assert_eq!(Axis::Horizontal.required(&MinSize::new(f64::NAN, -5.0)), 0.0);
        assert_eq!(Axis::Vertical.floor(&MinSize::none()), 1.0);
    }

    #[test]
    fn test_surplus_respects_floor() {
        let rect = Rect::new(0.0, 0.0, 500.0, 300.0);
        assert_eq!(Axis::Horizontal.surplus(&rect, &MinSize::new(200.0, 0.0)), 300.0);
        assert_eq!(Axis::Vertical.surplus(&rect, &MinSize::none()), 299.0);
        assert_eq!(Axis::Horizontal.surplus(&rect, &MinSize::new(800.0, 0.0)), 0.0);
    }

    #[test]
    fn test_cross_overlap_requires_positive_span() {
        let top = Rect::new(0.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 100.0);
        let beside = Rect::new(100.0, 50.0, 100.0, 100.0);
        assert!(!Axis::Horizontal.cross_overlaps(&top, &below));
        assert!(Axis::Horizontal.cross_overlaps(&top, &beside));
        assert!(Axis::Vertical.cross_overlaps(&top, &below));
    }

    #[test]
    fn test_has_deficit_uses_tolerance() {
        let rects = [Rect::new(0.0, 0.0, 399.6, 100.0)];
        assert!(!Axis::Horizontal.has_deficit(&rects, &[MinSize::new(400.0, 0.0)]));
        assert!(Axis::Horizontal.has_deficit(&rects, &[MinSize::new(401.0, 0.0)]));
    }
}

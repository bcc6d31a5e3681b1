//! Overlap cleanup.
//!
//! Separates any pair of rectangles that still overlap after the axis phases
//! (typically because the input already overlapped). Cleanup only ever
//! shrinks rectangles.

use super::axis::{Axis, MIN_LENGTH_PX};
use super::{MinSize, SolverConfig};
use crate::zones::state::Rect;

/// Overlaps thinner than this are rounding noise.
const OVERLAP_EPSILON: f64 = 1e-6;

/// Runs cleanup passes until no pair overlaps or the pass limit is hit.
///
/// Returns the number of pairs separated.
pub fn resolve(rects: &mut [Rect], min_sizes: &[MinSize], config: &SolverConfig) -> usize {
    let mut resolved = 0;
    for pass in 0..config.max_cleanup_passes {
        let mut found = false;
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                if let Some(axis) = separation_axis(&rects[i], &rects[j]) {
                    separate(rects, min_sizes, config, axis, (i, j));
                    resolved += 1;
                    found = true;
                }
            }
        }
        if !found {
            break;
        }
        tracing::debug!(pass, resolved, "solver: overlap cleanup pass");
    }
    resolved
}

/// Axis with the smaller penetration, or `None` if the pair does not overlap.
fn separation_axis(a: &Rect, b: &Rect) -> Option<Axis> {
    let dx = a.right().min(b.right()) - a.x.max(b.x);
    let dy = a.bottom().min(b.bottom()) - a.y.max(b.y);
    if dx <= OVERLAP_EPSILON || dy <= OVERLAP_EPSILON {
        return None;
    }
    Some(if dx <= dy { Axis::Horizontal } else { Axis::Vertical })
}

fn separate(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    config: &SolverConfig,
    axis: Axis,
    (i, j): (usize, usize),
) {
    // `first` starts earlier along the axis and keeps the low side.
    let (first, second) = if axis.start(&rects[j]) < axis.start(&rects[i]) { (j, i) } else { (i, j) };
    let (a, b) = (rects[first], rects[second]);
    let (min_a, min_b) = (&min_sizes[first], &min_sizes[second]);

    let (a_start, a_end) = (axis.start(&a), axis.end(&a));
    let (b_start, b_end) = (axis.start(&b), axis.end(&b));
    let low = b_start;
    let high = a_end.min(b_end);

    // The side with more surplus gives up more of the overlap.
    let surplus_a = axis.surplus(&a, min_a);
    let surplus_b = axis.surplus(&b, min_b);
    let total = surplus_a + surplus_b;
    let weighted = if total > 0.0 {
        high - (high - low) * surplus_a / total
    } else {
        low + (high - low) / 2.0
    };

    let floor_a = axis.floor(min_a);
    let floor_b = axis.floor(min_b);
    let mut boundary = weighted.round();
    if a_start + floor_a <= b_end - floor_b {
        boundary = boundary.clamp(a_start + floor_a, b_end - floor_b);
    }
    let lower = low.max(a_start + MIN_LENGTH_PX);
    let upper = high.min(b_end - MIN_LENGTH_PX);
    boundary = if lower <= upper { boundary.clamp(lower, upper) } else { low + (high - low) / 2.0 };

    let (mut new_a_end, mut new_b_start) = (boundary, boundary);
    if config.inner_gap > 0.0 {
        let gap_a = boundary - (config.inner_gap / 2.0).floor();
        let gap_b = boundary + (config.inner_gap / 2.0).ceil();
        if gap_a - a_start >= floor_a && b_end - gap_b >= floor_b {
            new_a_end = gap_a;
            new_b_start = gap_b;
        }
    }

    axis.set_span(&mut rects[first], a_start, new_a_end);
    axis.set_span(&mut rects[second], new_b_start, b_end);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn config() -> SolverConfig { SolverConfig::default() }

    #[test]
    fn test_non_overlapping_rects_untouched() {
        let mut rects = vec![Rect::new(0.0, 0.0, 500.0, 500.0), Rect::new(500.0, 0.0, 500.0, 500.0)];
        let before = rects.clone();

        assert_eq!(resolve(&mut rects, &[MinSize::none(); 2], &config()), 0);
        assert_eq!(rects, before);
    }

    #[test]
    fn test_equal_surplus_splits_overlap_evenly() {
        let mut rects = vec![Rect::new(0.0, 0.0, 600.0, 500.0), Rect::new(400.0, 0.0, 600.0, 500.0)];

        let resolved = resolve(&mut rects, &[MinSize::none(); 2], &config());

        assert_eq!(resolved, 1);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(rects[1], Rect::new(500.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn test_side_with_more_surplus_gives_more() {
        let mut rects = vec![Rect::new(0.0, 0.0, 600.0, 500.0), Rect::new(400.0, 0.0, 600.0, 500.0)];
        // Surplus 300 on the left, 100 on the right: the left yields 3/4 of the overlap.
        let mins = vec![MinSize::new(300.0, 0.0), MinSize::new(500.0, 0.0)];

        resolve(&mut rects, &mins, &config());

        assert_eq!(rects[0].right(), 450.0);
        assert_eq!(rects[1].x, 450.0);
        assert_eq!(rects[1].width, 550.0);
    }

    #[test]
    fn test_separates_along_smaller_penetration() {
        // Overlap is 100 wide and 20 tall: separate vertically.
        let mut rects = vec![Rect::new(0.0, 0.0, 100.0, 300.0), Rect::new(0.0, 280.0, 100.0, 300.0)];

        resolve(&mut rects, &[MinSize::none(); 2], &config());

        assert_eq!(rects[0], Rect::new(0.0, 0.0, 100.0, 290.0));
        assert_eq!(rects[1], Rect::new(0.0, 290.0, 100.0, 290.0));
    }

    #[test]
    fn test_gap_reinserted_when_minimums_allow() {
        let mut rects = vec![Rect::new(0.0, 0.0, 600.0, 500.0), Rect::new(400.0, 0.0, 600.0, 500.0)];
        let config = SolverConfig::default().with_inner_gap(9.0);

        resolve(&mut rects, &[MinSize::none(); 2], &config);

        assert_eq!(rects[0].right(), 496.0);
        assert_eq!(rects[1].x, 505.0);
    }

    #[test]
    fn test_cleanup_only_shrinks() {
        let mut rects = vec![Rect::new(100.0, 100.0, 400.0, 400.0), Rect::new(200.0, 150.0, 100.0, 100.0)];
        let before = rects.clone();

        resolve(&mut rects, &[MinSize::none(); 2], &config());

        for (after, before) in rects.iter().zip(&before) {
            assert!(after.x >= before.x && after.y >= before.y);
            assert!(after.right() <= before.right() && after.bottom() <= before.bottom());
            assert!(after.width >= 1.0 && after.height >= 1.0);
        }
        assert!(!rects[0].intersects(&rects[1]));
    }
}

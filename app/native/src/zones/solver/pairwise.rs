//! Phase 2: pairwise stealing.
//!
//! Used when boundary grouping cannot describe the arrangement (nested splits,
//! rectangles spanning several columns). A rectangle below its minimum takes
//! space from an adjacent neighbour with surplus by moving the boundary they
//! share. Every other rectangle with an edge on that boundary moves with it, so
//! nested splits stay aligned. A neighbour with nothing to spare relays the
//! pull to the rectangle beyond it, so space travels along a row.

use smallvec::SmallVec;

use super::axis::{Axis, TOLERANCE};
use super::{MinSize, SolverConfig};
use crate::zones::state::Rect;

/// Indices of rectangles that move with a boundary.
type Movers = SmallVec<[usize; 8]>;

/// Which side of the receiver the donor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Donor ends where the receiver starts.
    Before,
    /// Donor starts where the receiver ends.
    After,
}

/// A boundary move: the coordinate on the donor side and the receiver side.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    side: Side,
    donor_edge: f64,
    receiver_edge: f64,
}

/// Space a rectangle needs to pull in from one side.
#[derive(Debug, Clone, Copy)]
struct Pull {
    side: Side,
    wanted: f64,
    /// Remaining relay hops.
    depth: usize,
}

/// Rectangles on either side of a boundary that move with it.
#[derive(Debug, Default)]
struct CoMovers {
    shrinkers: Movers,
    growers: Movers,
}

/// Runs stealing rounds until nothing changes or the round limit is hit.
///
/// Returns the number of rounds that moved at least one boundary.
pub fn steal(rects: &mut [Rect], min_sizes: &[MinSize], axis: Axis, config: &SolverConfig) -> usize {
    let mut rounds = 0;
    for _ in 0..config.max_steal_rounds {
        if !steal_round(rects, min_sizes, axis, config) {
            break;
        }
        rounds += 1;
    }
    tracing::debug!(axis = axis.as_str(), rounds, "solver: pairwise stealing finished");
    rounds
}

fn steal_round(rects: &mut [Rect], min_sizes: &[MinSize], axis: Axis, config: &SolverConfig) -> bool {
    let mut changed = false;
    for receiver in 0..rects.len() {
        changed |= steal_direct(rects, min_sizes, axis, config, receiver);
        changed |= steal_through(rects, min_sizes, axis, config, receiver);
    }
    changed
}

/// Takes space for `receiver` from adjacent neighbours with surplus.
fn steal_direct(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
    receiver: usize,
) -> bool {
    let threshold = config.effective_adjacency_threshold();
    let mut changed = false;

    for donor in 0..rects.len() {
        let deficit = axis.deficit(&rects[receiver], &min_sizes[receiver]);
        if deficit <= TOLERANCE {
            break;
        }
        if donor == receiver || !axis.cross_overlaps(&rects[receiver], &rects[donor]) {
            continue;
        }
        let Some(boundary) = shared_boundary(&rects[receiver], &rects[donor], axis, threshold) else {
            continue;
        };

        let surplus = axis.surplus(&rects[donor], &min_sizes[donor]);
        let movers = co_movers(rects, axis, boundary);
        let amount =
            clamp_amount(rects, min_sizes, axis, config, boundary, &movers, deficit.min(surplus));
        if amount > TOLERANCE {
            move_boundary(rects, axis, boundary, &movers, amount);
            changed = true;
        }
    }

    changed
}

/// Takes space for `receiver` through neighbours that have too little to give,
/// by first moving their far edge into the next rectangle along.
fn steal_through(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
    receiver: usize,
) -> bool {
    let threshold = config.effective_adjacency_threshold();
    let mut changed = false;

    for donor in 0..rects.len() {
        let deficit = axis.deficit(&rects[receiver], &min_sizes[receiver]);
        if deficit <= TOLERANCE {
            break;
        }
        if donor == receiver || !axis.cross_overlaps(&rects[receiver], &rects[donor]) {
            continue;
        }
        let Some(boundary) = shared_boundary(&rects[receiver], &rects[donor], axis, threshold) else {
            continue;
        };
        let wanted = deficit - axis.surplus(&rects[donor], &min_sizes[donor]);
        if wanted <= TOLERANCE {
            continue;
        }

        let pull = Pull { side: boundary.side, wanted, depth: rects.len() };
        if replenish(rects, min_sizes, axis, config, donor, pull) <= TOLERANCE {
            continue;
        }
        changed = true;

        let surplus = axis.surplus(&rects[donor], &min_sizes[donor]);
        let movers = co_movers(rects, axis, boundary);
        let amount =
            clamp_amount(rects, min_sizes, axis, config, boundary, &movers, deficit.min(surplus));
        if amount > TOLERANCE {
            move_boundary(rects, axis, boundary, &movers, amount);
        }
    }

    changed
}

/// Grows `rect` at its far edge by taking from the rectangle beyond it,
/// relaying further along the same side when that one is short too.
///
/// Returns the length gained.
fn replenish(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
    rect: usize,
    pull: Pull,
) -> f64 {
    let threshold = config.effective_adjacency_threshold();
    let mut gained = 0.0;

    for next in 0..rects.len() {
        let wanted = pull.wanted - gained;
        if wanted <= TOLERANCE {
            break;
        }
        if next == rect || !axis.cross_overlaps(&rects[rect], &rects[next]) {
            continue;
        }
        let Some(boundary) = shared_boundary(&rects[rect], &rects[next], axis, threshold)
            .filter(|boundary| boundary.side == pull.side)
        else {
            continue;
        };

        let mut surplus = axis.surplus(&rects[next], &min_sizes[next]);
        if surplus < wanted && pull.depth > 0 {
            let further = Pull { side: pull.side, wanted: wanted - surplus, depth: pull.depth - 1 };
            replenish(rects, min_sizes, axis, config, next, further);
            surplus = axis.surplus(&rects[next], &min_sizes[next]);
        }

        let movers = co_movers(rects, axis, boundary);
        let amount =
            clamp_amount(rects, min_sizes, axis, config, boundary, &movers, wanted.min(surplus));
        if amount > TOLERANCE {
            move_boundary(rects, axis, boundary, &movers, amount);
            gained += amount;
        }
    }

    gained
}

/// The boundary between `receiver` and `donor` if they sit next to each other.
fn shared_boundary(receiver: &Rect, donor: &Rect, axis: Axis, threshold: f64) -> Option<Boundary> {
    let before = axis.start(receiver) - axis.end(donor);
    if (-TOLERANCE..=threshold).contains(&before) {
        return Some(Boundary {
            side: Side::Before,
            donor_edge: axis.end(donor),
            receiver_edge: axis.start(receiver),
        });
    }

    let after = axis.start(donor) - axis.end(receiver);
    if (-TOLERANCE..=threshold).contains(&after) {
        return Some(Boundary {
            side: Side::After,
            donor_edge: axis.start(donor),
            receiver_edge: axis.end(receiver),
        });
    }

    None
}

/// Rectangles that shrink with the donor.
fn is_shrinker(rect: &Rect, axis: Axis, boundary: Boundary) -> bool {
    let edge = match boundary.side {
        Side::Before => axis.end(rect),
        Side::After => axis.start(rect),
    };
    (edge - boundary.donor_edge).abs() < TOLERANCE
}

/// Rectangles that grow with the receiver.
fn is_grower(rect: &Rect, axis: Axis, boundary: Boundary) -> bool {
    let edge = match boundary.side {
        Side::Before => axis.start(rect),
        Side::After => axis.end(rect),
    };
    (edge - boundary.receiver_edge).abs() < TOLERANCE
}

fn co_movers(rects: &[Rect], axis: Axis, boundary: Boundary) -> CoMovers {
    let mut movers = CoMovers::default();
    for (i, rect) in rects.iter().enumerate() {
        match (is_shrinker(rect, axis, boundary), is_grower(rect, axis, boundary)) {
            (true, false) => movers.shrinkers.push(i),
            (false, true) => movers.growers.push(i),
            _ => {}
        }
    }
    movers
}

/// Limits `amount` so no co-moving donor drops below its floor and no
/// co-moving receiver runs into a rectangle that stays put.
fn clamp_amount(
    rects: &[Rect],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
    boundary: Boundary,
    movers: &CoMovers,
    amount: f64,
) -> f64 {
    let mut amount = amount;

    for &i in &movers.shrinkers {
        amount = amount.min(axis.surplus(&rects[i], &min_sizes[i]));
    }

    for grower in movers.growers.iter().map(|&i| &rects[i]) {
        for other in rects {
            if is_grower(other, axis, boundary)
                || is_shrinker(other, axis, boundary)
                || !axis.cross_overlaps(grower, other)
            {
                continue;
            }
            let distance = match boundary.side {
                Side::Before => axis.start(grower) - axis.end(other),
                Side::After => axis.start(other) - axis.end(grower),
            };
            if distance >= -TOLERANCE {
                amount = amount.min(distance - config.inner_gap);
            }
        }
    }

    amount.max(0.0)
}

fn move_boundary(rects: &mut [Rect], axis: Axis, boundary: Boundary, movers: &CoMovers, amount: f64) {
    for &i in &movers.shrinkers {
        let rect = &mut rects[i];
        let (start, end) = (axis.start(rect), axis.end(rect));
        match boundary.side {
            Side::Before => axis.set_span(rect, start, end - amount),
            Side::After => axis.set_span(rect, start + amount, end),
        }
    }
    for &i in &movers.growers {
        let rect = &mut rects[i];
        let (start, end) = (axis.start(rect), axis.end(rect));
        match boundary.side {
            Side::Before => axis.set_span(rect, start - amount, end),
            Side::After => axis.set_span(rect, start, end + amount),
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

    fn config() -> SolverConfig { SolverConfig::default() }

    #[test]
    fn test_receiver_takes_from_left_neighbour() {
        let mut rects = vec![Rect::new(0.0, 0.0, 600.0, 500.0), Rect::new(600.0, 0.0, 400.0, 500.0)];
        let mins = vec![MinSize::none(), MinSize::new(500.0, 0.0)];

        let rounds = steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rounds, 1);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(rects[1], Rect::new(500.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn test_receiver_takes_from_right_neighbour_across_gap() {
        let mut rects = vec![Rect::new(0.0, 0.0, 300.0, 500.0), Rect::new(308.0, 0.0, 692.0, 500.0)];
        let mins = vec![MinSize::new(450.0, 0.0), MinSize::new(300.0, 0.0)];

        steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rects[0].width, 450.0);
        assert_eq!(rects[1].x, 458.0);
        assert_eq!(rects[1].right(), 1000.0);
    }

    #[test]
    fn test_donor_keeps_its_own_minimum() {
        let mut rects = vec![Rect::new(0.0, 0.0, 600.0, 500.0), Rect::new(600.0, 0.0, 400.0, 500.0)];
        let mins = vec![MinSize::new(550.0, 0.0), MinSize::new(500.0, 0.0)];

        steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rects[0].width, 550.0);
        assert_eq!(rects[1].width, 450.0);
    }

    #[test]
    fn test_shared_boundary_co_moves() {
        // Two stacked rows split at x=640 above a full-width bottom row.
        let mut rects = vec![
            Rect::new(0.0, 0.0, 640.0, 360.0),
            Rect::new(640.0, 0.0, 640.0, 360.0),
            Rect::new(0.0, 360.0, 640.0, 360.0),
            Rect::new(640.0, 360.0, 640.0, 360.0),
            Rect::new(0.0, 720.0, 1280.0, 360.0),
        ];
        let mut mins = vec![MinSize::none(); 5];
        mins[1] = MinSize::new(800.0, 0.0);

        steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rects[1], Rect::new(480.0, 0.0, 800.0, 360.0));
        assert_eq!(rects[3], Rect::new(480.0, 360.0, 800.0, 360.0), "lower right grows too");
        assert_eq!(rects[2].right(), 480.0, "lower left shrinks too");
        assert_eq!(rects[4], Rect::new(0.0, 720.0, 1280.0, 360.0));
    }

    #[test]
    fn test_far_rectangles_are_not_donors() {
        let mut rects = vec![Rect::new(0.0, 0.0, 300.0, 500.0), Rect::new(700.0, 0.0, 300.0, 500.0)];
        let mins = vec![MinSize::none(), MinSize::new(400.0, 0.0)];
        let before = rects.clone();

        let rounds = steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rounds, 0);
        assert_eq!(rects, before);
    }

    #[test]
    fn test_grower_stops_at_stationary_neighbour() {
        // C sits left of B's lower half, ends short of A's edge and has no surplus.
        let mut rects = vec![
            Rect::new(0.0, 0.0, 600.0, 200.0),
            Rect::new(600.0, 0.0, 400.0, 500.0),
            Rect::new(0.0, 200.0, 550.0, 300.0),
        ];
        let mins = vec![MinSize::none(), MinSize::new(600.0, 0.0), MinSize::new(550.0, 0.0)];

        steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rects[1].x, 550.0);
        assert_eq!(rects[0].right(), 550.0);
        assert_eq!(rects[2], Rect::new(0.0, 200.0, 550.0, 300.0));
    }

    #[test]
    fn test_side_by_side_pair_grows_with_full_height_neighbour_shrinking() {
        let mut rects = vec![
            Rect::new(0.0, 0.0, 500.0, 1000.0),
            Rect::new(500.0, 0.0, 500.0, 500.0),
            Rect::new(500.0, 500.0, 500.0, 500.0),
        ];
        let mins = vec![MinSize::none(), MinSize::new(700.0, 0.0), MinSize::none()];

        steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rects[0], Rect::new(0.0, 0.0, 300.0, 1000.0));
        assert_eq!(rects[1], Rect::new(300.0, 0.0, 700.0, 500.0));
        assert_eq!(rects[2], Rect::new(300.0, 500.0, 700.0, 500.0), "lower right follows");
    }

    #[test]
    fn test_space_travels_through_drained_neighbour() {
        // Header spanning three columns; the right column needs more than its
        // direct neighbour can give.
        let mut rects = vec![
            Rect::new(0.0, 0.0, 1920.0, 200.0),
            Rect::new(0.0, 200.0, 469.0, 880.0),
            Rect::new(469.0, 200.0, 236.0, 880.0),
            Rect::new(705.0, 200.0, 1215.0, 880.0),
        ];
        let mut mins = vec![MinSize::none(); 4];
        mins[3] = MinSize::new(1458.0, 0.0);

        let rounds = steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rounds, 1);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 1920.0, 200.0));
        assert_eq!(rects[1], Rect::new(0.0, 200.0, 461.0, 880.0));
        assert_eq!(rects[2], Rect::new(461.0, 200.0, 1.0, 880.0));
        assert_eq!(rects[3], Rect::new(462.0, 200.0, 1458.0, 880.0));
    }

    #[test]
    fn test_relay_stops_at_screen_edge() {
        let mut rects = vec![
            Rect::new(0.0, 0.0, 300.0, 500.0),
            Rect::new(300.0, 0.0, 300.0, 500.0),
            Rect::new(600.0, 0.0, 400.0, 500.0),
        ];
        let mins = vec![MinSize::new(300.0, 0.0), MinSize::new(300.0, 0.0), MinSize::new(500.0, 0.0)];
        let before = rects.clone();

        let rounds = steal(&mut rects, &mins, Axis::Horizontal, &config());

        assert_eq!(rounds, 0);
        assert_eq!(rects, before);
    }
}

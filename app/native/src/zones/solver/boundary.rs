//! Phase 1: boundary grouping.
//!
//! Rectangles are grouped by the distinct edge coordinates along one axis.
//! Consecutive coordinates form columns; when every rectangle spans exactly
//! one column the axis is solved as a 1-D problem by moving column boundaries,
//! so rectangles that share an edge keep sharing it.

use super::axis::{Axis, MIN_LENGTH_PX, TOLERANCE};
use super::{MinSize, SolverConfig};
use crate::zones::state::Rect;

/// How a boundary solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryOutcome {
    /// Every column received its demand.
    Solved,
    /// Demands exceeded the span; columns were compressed.
    Compressed,
}

/// Why the boundary solve could not be applied to this axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryAbort {
    /// Some rectangle spans more (or less) than one column.
    Irregular,
    /// An empty column wider than the adjacency threshold separates rectangles.
    NonAdjacentGap { width: f64 },
}

#[derive(Debug, Clone, Copy)]
struct Column {
    width: f64,
    /// Largest floor among members, or the locked width of a gap column.
    demand: f64,
    gap: bool,
}

/// Runs the boundary solve for one axis, writing results back into `rects`.
pub fn solve(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
) -> Result<BoundaryOutcome, BoundaryAbort> {
    let coords = boundaries(rects, axis);
    let (Some(&start), Some(&end)) = (coords.first(), coords.last()) else {
        return Err(BoundaryAbort::Irregular);
    };
    if coords.len() < 2 {
        return Err(BoundaryAbort::Irregular);
    }

    let membership = assign_columns(rects, axis, &coords)?;
    let columns = build_columns(&coords, &membership, min_sizes, axis, config)?;

    let span = end - start;
    let demand: f64 = columns.iter().map(|c| c.demand).sum();

    let (edges, outcome) = if demand > span + TOLERANCE {
        tracing::warn!(
            axis = axis.as_str(),
            demand,
            span,
            "solver: minimum sizes exceed available space, compressing"
        );
        (edges_from_lengths(&compress(&columns, span), start, end), BoundaryOutcome::Compressed)
    } else {
        (sweep(&columns, start, end), BoundaryOutcome::Solved)
    };

    for (rect, &column) in rects.iter_mut().zip(&membership) {
        axis.set_span(rect, edges[column], edges[column + 1]);
    }

    Ok(outcome)
}

/// Sorted distinct edge coordinates, merging those within tolerance.
fn boundaries(rects: &[Rect], axis: Axis) -> Vec<f64> {
    let mut coords: Vec<f64> =
        rects.iter().flat_map(|r| [axis.start(r), axis.end(r)]).filter(|c| c.is_finite()).collect();
    coords.sort_by(f64::total_cmp);
    coords.dedup_by(|current, previous| (*current - *previous).abs() < TOLERANCE);
    coords
}

fn column_index(coords: &[f64], value: f64) -> Option<usize> {
    coords.iter().position(|c| (c - value).abs() < TOLERANCE)
}

/// Column index of every rectangle.
fn assign_columns(rects: &[Rect], axis: Axis, coords: &[f64]) -> Result<Vec<usize>, BoundaryAbort> {
    rects
        .iter()
        .map(|rect| {
            let first = column_index(coords, axis.start(rect));
            let last = column_index(coords, axis.end(rect));
            match (first, last) {
                (Some(first), Some(last)) if last == first + 1 => Ok(first),
                _ => Err(BoundaryAbort::Irregular),
            }
        })
        .collect()
}

fn build_columns(
    coords: &[f64],
    membership: &[usize],
    min_sizes: &[MinSize],
    axis: Axis,
    config: &SolverConfig,
) -> Result<Vec<Column>, BoundaryAbort> {
    let mut columns: Vec<Column> = coords
        .windows(2)
        .map(|pair| Column { width: pair[1] - pair[0], demand: 0.0, gap: true })
        .collect();

    for (&index, min) in membership.iter().zip(min_sizes) {
        let column = &mut columns[index];
        column.gap = false;
        column.demand = column.demand.max(axis.floor(min));
    }

    let threshold = config.effective_adjacency_threshold();
    for column in columns.iter_mut().filter(|c| c.gap) {
        if column.width > threshold {
            return Err(BoundaryAbort::NonAdjacentGap { width: column.width });
        }
        column.demand = column.width;
    }

    Ok(columns)
}

/// Pushes boundaries forward, then back from the far edge, so every column
/// gets its demand while the outer edges stay put.
fn sweep(columns: &[Column], start: f64, end: f64) -> Vec<f64> {
    let mut forward = Vec::with_capacity(columns.len() + 1);
    forward.push(start);
    let mut position = start;
    let mut original = start;
    for column in columns {
        original += column.width;
        position = if column.gap { position + column.width } else { original.max(position + column.demand) };
        forward.push(position);
    }

    let mut edges = forward.clone();
    let mut position = end;
    if let Some(last) = edges.last_mut() {
        *last = end;
    }
    for (index, column) in columns.iter().enumerate().rev() {
        position = if column.gap {
            position - column.width
        } else {
            forward[index].min(position - column.demand)
        };
        edges[index] = position;
    }
    edges[0] = start;
    edges
}

/// Column lengths when the demands do not fit in `span`.
///
/// Every column is sized in proportion to its demand with a 1px floor. Gap
/// columns keep their width when the other columns still get 1px each.
/// Unconstrained columns demand 1px, so constrained columns keeping their
/// full minimum is only possible when the demands fit, which the sweep covers.
#[allow(clippy::cast_precision_loss)]
fn compress(columns: &[Column], span: f64) -> Vec<f64> {
    let gaps: f64 = columns.iter().filter(|c| c.gap).map(|c| c.width).sum();
    let non_gap = columns.iter().filter(|c| !c.gap).count();
    let keep_gaps = span - gaps >= non_gap as f64 * MIN_LENGTH_PX;
    let pool = if keep_gaps { span - gaps } else { span };

    let participants: Vec<usize> =
        (0..columns.len()).filter(|&i| !keep_gaps || !columns[i].gap).collect();
    let mut lengths: Vec<f64> = columns.iter().map(|c| c.width).collect();

    if pool < participants.len() as f64 * MIN_LENGTH_PX {
        let even = pool / participants.len() as f64;
        for &i in &participants {
            lengths[i] = even;
        }
        return lengths;
    }

    let total: f64 = participants.iter().map(|&i| columns[i].demand).sum();
    for &i in &participants {
        lengths[i] = (pool * columns[i].demand / total).max(MIN_LENGTH_PX);
    }

    // Floors can push the sum past the pool; take the excess from the largest.
    let mut excess: f64 = participants.iter().map(|&i| lengths[i]).sum::<f64>() - pool;
    let mut by_size = participants;
    by_size.sort_by(|&a, &b| lengths[b].total_cmp(&lengths[a]));
    for i in by_size {
        if excess <= f64::EPSILON {
            break;
        }
        let cut = excess.min(lengths[i] - MIN_LENGTH_PX).max(0.0);
        lengths[i] -= cut;
        excess -= cut;
    }

    lengths
}

/// Column edges from `start`, with the last edge pinned to `end`.
///
/// Interior edges are rounded to whole pixels when every column is at least
/// 1px long; rounding cumulative positions keeps each column at 1px or more.
fn edges_from_lengths(lengths: &[f64], start: f64, end: f64) -> Vec<f64> {
    let whole = lengths.iter().all(|&length| length >= MIN_LENGTH_PX);
    let mut edges = Vec::with_capacity(lengths.len() + 1);
    let mut position = start;
    edges.push(position);
    for length in lengths {
        position += length;
        edges.push(if whole { position.round() } else { position });
    }
    if let Some(last) = edges.last_mut() {
        *last = end;
    }
    edges
}

// ============================================================================
// Tests
// ============================================================================

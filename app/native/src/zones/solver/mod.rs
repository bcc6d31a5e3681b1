//! Minimum-size enforcement for resolved zone rectangles.
//!
//! The solver adjusts a flat set of pixel rectangles so each one meets a
//! minimum width and height, while keeping the arrangement free of overlaps
//! and preserving the gaps between neighbours.
//!
//! # Architecture
//!
//! Each axis is solved independently, widths first:
//! 1. **Boundary grouping** - treat distinct edge coordinates as columns and
//!    move column boundaries (regular grids and column layouts)
//! 2. **Pairwise stealing** - move the boundary between a short rectangle and
//!    an adjacent neighbour with surplus (nested splits, irregular layouts)
//!
//! A final cleanup pass separates any rectangles that still overlap.

mod axis;
mod boundary;
mod overlap;
mod pairwise;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use self::axis::{Axis, TOLERANCE};
use self::boundary::{BoundaryAbort, BoundaryOutcome};
use crate::zones::state::Rect;

/// Largest separation at which two rectangles still count as neighbours.
pub const DEFAULT_ADJACENCY_THRESHOLD: f64 = 20.0;

/// Default limit on pairwise stealing rounds per axis.
pub const DEFAULT_MAX_STEAL_ROUNDS: usize = 8;

/// Default limit on overlap cleanup passes.
pub const DEFAULT_MAX_CLEANUP_PASSES: usize = 3;

/// Minimum size for one rectangle. Zero (or negative) means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MinSize {
    pub width: f64,
    pub height: f64,
}

impl MinSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    /// No constraint on either axis.
    #[must_use]
    pub const fn none() -> Self { Self::new(0.0, 0.0) }

    /// Whether neither axis is constrained.
    #[must_use]
    pub fn is_none(&self) -> bool { !is_constraint(self.width) && !is_constraint(self.height) }

    /// Whether `rect` meets this minimum on both axes, within the solver tolerance.
    #[must_use]
    pub fn is_met_by(&self, rect: &Rect) -> bool {
        [Axis::Horizontal, Axis::Vertical].iter().all(|axis| axis.deficit(rect, self) <= TOLERANCE)
    }
}

fn is_constraint(value: f64) -> bool { value.is_finite() && value > 0.0 }

/// Solver tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Gap kept between neighbours when the solver has to re-create one.
    pub inner_gap: f64,
    /// Largest separation at which two rectangles are considered adjacent.
    pub adjacency_threshold: f64,
    /// Limit on pairwise stealing rounds per axis.
    pub max_steal_rounds: usize,
    /// Limit on overlap cleanup passes.
    pub max_cleanup_passes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            inner_gap: 0.0,
            adjacency_threshold: DEFAULT_ADJACENCY_THRESHOLD,
            max_steal_rounds: DEFAULT_MAX_STEAL_ROUNDS,
            max_cleanup_passes: DEFAULT_MAX_CLEANUP_PASSES,
        }
    }
}

impl SolverConfig {
    /// Sets the gap the rectangles were resolved with.
    #[must_use]
    pub const fn with_inner_gap(mut self, inner_gap: f64) -> Self {
        self.inner_gap = inner_gap;
        self
    }

    /// Adjacency threshold, never smaller than the inner gap.
    #[must_use]
    pub fn effective_adjacency_threshold(&self) -> f64 {
        self.adjacency_threshold.max(self.inner_gap)
    }
}

/// What happened on one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AxisOutcome {
    /// Every rectangle already met its minimum; nothing moved.
    #[default]
    Satisfied,
    /// Column boundaries were moved.
    Boundary,
    /// Minimums did not fit; columns were compressed proportionally.
    BoundaryCompressed,
    /// Boundaries between neighbours were moved pairwise.
    Pairwise { rounds: usize },
}

impl AxisOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfied => "satisfied",
            Self::Boundary => "boundary",
            Self::BoundaryCompressed => "compressed",
            Self::Pairwise { .. } => "pairwise",
        }
    }
}

impl fmt::Display for AxisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pairwise { rounds } => write!(f, "pairwise ({rounds} rounds)"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Summary of a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// Input was empty or the slices had different lengths; nothing ran.
    pub skipped: bool,
    pub horizontal: AxisOutcome,
    pub vertical: AxisOutcome,
    /// Number of overlapping pairs separated by cleanup.
    pub overlaps_resolved: usize,
}

impl SolveReport {
    const fn not_run() -> Self {
        Self {
            skipped: true,
            horizontal: AxisOutcome::Satisfied,
            vertical: AxisOutcome::Satisfied,
            overlaps_resolved: 0,
        }
    }

    /// Whether any phase may have moved a rectangle.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.skipped
            && (self.horizontal != AxisOutcome::Satisfied
                || self.vertical != AxisOutcome::Satisfied
                || self.overlaps_resolved > 0)
    }
}

/// Enforces minimum sizes on resolved rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintSolver {
    config: SolverConfig,
}

impl ConstraintSolver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self { Self { config } }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig { &self.config }

    /// Adjusts `rects` in place so each meets the matching entry of `min_sizes`.
    ///
    /// Empty input or slices of different lengths are left untouched. When the
    /// minimums cannot all fit, rectangles are compressed proportionally rather
    /// than overlapping.
    pub fn solve(&self, rects: &mut [Rect], min_sizes: &[MinSize]) -> SolveReport {
        if rects.is_empty() || rects.len() != min_sizes.len() {
            tracing::debug!(
                rects = rects.len(),
                min_sizes = min_sizes.len(),
                "solver: skipping, nothing to solve"
            );
            return SolveReport::not_run();
        }

        let horizontal = self.solve_axis(rects, min_sizes, Axis::Horizontal);
        let vertical = self.solve_axis(rects, min_sizes, Axis::Vertical);
        let overlaps_resolved = overlap::resolve(rects, min_sizes, &self.config);

        SolveReport { skipped: false, horizontal, vertical, overlaps_resolved }
    }

    fn solve_axis(&self, rects: &mut [Rect], min_sizes: &[MinSize], axis: Axis) -> AxisOutcome {
        if !axis.has_deficit(rects, min_sizes) {
            return AxisOutcome::Satisfied;
        }

        match boundary::solve(rects, min_sizes, axis, &self.config) {
            Ok(BoundaryOutcome::Compressed) => AxisOutcome::BoundaryCompressed,
            Ok(BoundaryOutcome::Solved) if !axis.has_deficit(rects, min_sizes) => {
                tracing::debug!(axis = axis.as_str(), "solver: solved by boundary grouping");
                AxisOutcome::Boundary
            }
            Ok(BoundaryOutcome::Solved) => {
                let rounds = pairwise::steal(rects, min_sizes, axis, &self.config);
                AxisOutcome::Pairwise { rounds }
            }
            Err(reason) => {
                match reason {
                    BoundaryAbort::Irregular => {
                        tracing::debug!(axis = axis.as_str(), "solver: irregular arrangement");
                    }
                    BoundaryAbort::NonAdjacentGap { width } => {
                        tracing::debug!(axis = axis.as_str(), width, "solver: non-adjacent gap");
                    }
                }
                let rounds = pairwise::steal(rects, min_sizes, axis, &self.config);
                AxisOutcome::Pairwise { rounds }
            }
        }
    }
}

/// Convenience wrapper around [`ConstraintSolver::solve`].
pub fn enforce_minimum_sizes(
    rects: &mut [Rect],
    min_sizes: &[MinSize],
    config: &SolverConfig,
) -> SolveReport {
    ConstraintSolver::new(*config).solve(rects, min_sizes)
}

// ============================================================================
// Tests
// ============================================================================

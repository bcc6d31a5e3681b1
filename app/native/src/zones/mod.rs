//! Zone geometry engine.
//!
//! - [`state`]: zones, layouts and the rectangle primitives they are built from
//! - [`geometry`]: resolving layouts into gapped pixel rectangles
//! - [`solver`]: enforcing minimum sizes on resolved rectangles

pub mod geometry;
pub mod solver;
pub mod state;

pub use geometry::{GapSettings, GeometryResolver, ScreenProvider, StaticGaps};
pub use solver::{
    AxisOutcome, ConstraintSolver, MinSize, SolveReport, SolverConfig, enforce_minimum_sizes,
};
pub use state::{EdgeGaps, GeometryMode, Layout, Point, Rect, Screen, Size, Zone};

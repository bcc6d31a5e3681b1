//! Geometry resolution: zones to gapped pixel rectangles.

mod providers;
mod resolver;
pub mod templates;

pub use providers::{GapSettings, ScreenProvider, StaticGaps};
pub use resolver::{GeometryResolver, zone_geometry_with_gaps};

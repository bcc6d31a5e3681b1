//! Zone and layout data model.
//!
//! These types form an owned tree:
//! - `Layout` owns an ordered `Vec<Zone>` (no back references)
//! - `Zone` holds relative or fixed geometry plus a cached absolute rectangle
//! - `EdgeGaps` carries per-edge gap overrides with an inherit sentinel

mod gaps;
mod layout;
mod types;
mod zone;

pub use gaps::{EdgeGaps, INHERIT};
pub use layout::Layout;
pub use types::{Point, Rect, Screen, Size};
pub use zone::{
    FIXED_EDGE_TOLERANCE_PX, GeometryMode, RELATIVE_EDGE_TOLERANCE, ScreenEdges, Zone,
    ZoneAppearance,
};

//! A single snap zone.
//!
//! A zone is defined either relative to the screen (all components in the
//! normalized 0..1 range) or in fixed pixels relative to the screen origin.
//! Exactly one of the two representations is authoritative, selected by
//! [`GeometryMode`]; the other is kept so switching modes is lossless.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Point, Rect};

/// Edge tolerance for relative geometry, as a fraction of the normalized span.
pub const RELATIVE_EDGE_TOLERANCE: f64 = 0.01;

/// Edge tolerance for fixed geometry, in pixels.
pub const FIXED_EDGE_TOLERANCE_PX: f64 = 5.0;

/// How a zone's geometry is defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GeometryMode {
    /// Normalized 0..1 rectangle scaled by the screen size.
    #[default]
    Relative,

    /// Absolute pixel rectangle offset by the screen origin.
    Fixed,
}

impl GeometryMode {
    /// Returns the mode name as a static kebab-case string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Fixed => "fixed",
        }
    }
}

/// Which edges of a zone lie on the screen boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Visual attributes consumed by overlay renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneAppearance {
    /// Fill color while a window hovers over the zone (hex string).
    pub highlight_color: String,
    /// Fill color while the zone is idle (hex string).
    pub inactive_color: String,
    /// Border color (hex string).
    pub border_color: String,
    /// Opacity while highlighted (0.0-1.0).
    pub active_opacity: f64,
    /// Opacity while idle (0.0-1.0).
    pub inactive_opacity: f64,
    /// Border width in pixels.
    pub border_width: u32,
    /// Corner radius in pixels.
    pub border_radius: u32,
}

impl Default for ZoneAppearance {
    fn default() -> Self {
        Self {
            highlight_color: "#3daee9aa".to_string(),
            inactive_color: "#40000000".to_string(),
            border_color: "#ffffffff".to_string(),
            active_opacity: 0.5,
            inactive_opacity: 0.3,
            border_width: 2,
            border_radius: 8,
        }
    }
}

/// A rectangular snap target within a layout.
///
/// Zones are not `Clone`: a copy must get a fresh identity, use
/// [`Zone::duplicate`].
#[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique identifier (UUID v7 for time-ordering).
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,

    /// User-facing name.
    #[serde(default)]
    pub name: String,

    /// 1-based position within the owning layout, used for keyboard navigation.
    #[serde(default)]
    pub number: u32,

    /// Which geometry representation is authoritative.
    #[serde(default)]
    pub mode: GeometryMode,

    /// Normalized geometry, meaningful in [`GeometryMode::Relative`].
    #[serde(default)]
    pub relative_geometry: Rect,

    /// Pixel geometry relative to the screen origin, meaningful in [`GeometryMode::Fixed`].
    #[serde(default)]
    pub fixed_geometry: Rect,

    /// Last resolved absolute geometry.
    #[serde(skip)]
    absolute_geometry: Rect,

    /// Visual attributes.
    #[serde(default)]
    pub appearance: ZoneAppearance,
}

impl Zone {
    /// Creates a relative zone. Components are not clamped to 0..1.
    #[must_use]
    pub fn relative(name: impl Into<String>, geometry: Rect) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            number: 0,
            mode: GeometryMode::Relative,
            relative_geometry: geometry,
            fixed_geometry: Rect::zero(),
            absolute_geometry: Rect::zero(),
            appearance: ZoneAppearance::default(),
        }
    }

    /// Creates a fixed zone with pixel geometry relative to the screen origin.
    #[must_use]
    pub fn fixed(name: impl Into<String>, geometry: Rect) -> Self {
        Self {
            mode: GeometryMode::Fixed,
            relative_geometry: Rect::zero(),
            fixed_geometry: geometry,
            ..Self::relative(name, Rect::zero())
        }
    }

    /// Copies the zone under a new identity. The cached geometry is kept.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: self.name.clone(),
            number: self.number,
            mode: self.mode,
            relative_geometry: self.relative_geometry,
            fixed_geometry: self.fixed_geometry,
            absolute_geometry: self.absolute_geometry,
            appearance: self.appearance.clone(),
        }
    }

    /// Returns the geometry of the authoritative representation.
    #[must_use]
    pub const fn geometry(&self) -> Rect {
        match self.mode {
            GeometryMode::Relative => self.relative_geometry,
            GeometryMode::Fixed => self.fixed_geometry,
        }
    }

    /// Computes the absolute pixel geometry against a reference rectangle.
    ///
    /// Relative components outside 0..1 pass through, producing a zone that
    /// extends beyond the reference rectangle.
    #[must_use]
    pub fn calculate_absolute_geometry(&self, screen: &Rect) -> Rect {
        match self.mode {
            GeometryMode::Relative => {
                let rel = &self.relative_geometry;
                Rect::new(
                    screen.x + rel.x * screen.width,
                    screen.y + rel.y * screen.height,
                    rel.width * screen.width,
                    rel.height * screen.height,
                )
            }
            GeometryMode::Fixed => {
                let fixed = &self.fixed_geometry;
                Rect::new(screen.x + fixed.x, screen.y + fixed.y, fixed.width, fixed.height)
            }
        }
    }

    /// Recomputes and caches the absolute geometry.
    pub fn recalculate_absolute_geometry(&mut self, screen: &Rect) {
        self.absolute_geometry = self.calculate_absolute_geometry(screen);
    }

    /// Returns the cached absolute geometry.
    #[must_use]
    pub const fn absolute_geometry(&self) -> Rect { self.absolute_geometry }

    /// Checks whether the cached absolute geometry contains a point.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.absolute_geometry.contains_point(point)
    }

    /// Distance from a point to the nearest edge of the cached absolute geometry.
    #[must_use]
    pub fn distance_to_point(&self, point: Point) -> f64 {
        self.absolute_geometry.distance_to_point(point)
    }

    /// Determines which edges of the zone sit on the boundary of `screen`.
    ///
    /// Relative zones compare normalized coordinates against 0 and 1 with
    /// [`RELATIVE_EDGE_TOLERANCE`]. Fixed zones compare pixel coordinates
    /// against 0 and the screen size with [`FIXED_EDGE_TOLERANCE_PX`].
    #[must_use]
    pub fn screen_edges(&self, screen: &Rect) -> ScreenEdges {
        match self.mode {
            GeometryMode::Relative => {
                let rel = &self.relative_geometry;
                let tol = RELATIVE_EDGE_TOLERANCE;
                ScreenEdges {
                    top: rel.y <= tol,
                    bottom: rel.bottom() >= 1.0 - tol,
                    left: rel.x <= tol,
                    right: rel.right() >= 1.0 - tol,
                }
            }
            GeometryMode::Fixed => {
                let fixed = &self.fixed_geometry;
                let tol = FIXED_EDGE_TOLERANCE_PX;
                ScreenEdges {
                    top: fixed.y <= tol,
                    bottom: fixed.bottom() >= screen.height - tol,
                    left: fixed.x <= tol,
                    right: fixed.right() >= screen.width - tol,
                }
            }
        }
    }

    /// Switches the authoritative representation.
    ///
    /// The geometry of the new mode is derived from the cached absolute
    /// geometry against `screen`, so the zone keeps its on-screen position.
    pub fn convert_mode(&mut self, mode: GeometryMode, screen: &Rect) {
        if mode == self.mode {
            return;
        }
        let abs = self.calculate_absolute_geometry(screen);
        match mode {
            GeometryMode::Fixed => {
                self.fixed_geometry = Rect::new(abs.x - screen.x, abs.y - screen.y, abs.width, abs.height);
            }
            GeometryMode::Relative => {
                if !screen.is_valid() {
                    tracing::debug!("zone: cannot convert to relative against an empty screen");
                    return;
                }
                self.relative_geometry = Rect::new(
                    (abs.x - screen.x) / screen.width,
                    (abs.y - screen.y) / screen.height,
                    abs.width / screen.width,
                    abs.height / screen.height,
                );
            }
        }
        self.mode = mode;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn screen() -> Rect { Rect::new(0.0, 0.0, 1920.0, 1080.0) }

    #[test]
    fn test_relative_half_width_resolves_exactly() {
        let zone = Zone::relative("Left", Rect::new(0.0, 0.0, 0.5, 1.0));
        assert_eq!(zone.calculate_absolute_geometry(&screen()), Rect::new(0.0, 0.0, 960.0, 1080.0));
    }

    #[test]
    fn test_relative_geometry_offsets_by_screen_origin() {
        let zone = Zone::relative("Right", Rect::new(0.5, 0.0, 0.5, 1.0));
        let second_screen = Rect::new(1920.0, 0.0, 2560.0, 1440.0);
        assert_eq!(
            zone.calculate_absolute_geometry(&second_screen),
            Rect::new(3200.0, 0.0, 1280.0, 1440.0)
        );
    }

    #[test]
    fn test_relative_geometry_is_not_clamped() {
        let zone = Zone::relative("Overhang", Rect::new(-0.1, 0.0, 1.2, 1.0));
        let abs = zone.calculate_absolute_geometry(&screen());
        assert_eq!(abs.x, -192.0);
        assert_eq!(abs.width, 2304.0);
    }

    #[test]
    fn test_fixed_geometry_is_not_scaled() {
        let zone = Zone::fixed("Fixed", Rect::new(100.0, 50.0, 800.0, 600.0));
        let offset = Rect::new(1920.0, 0.0, 1280.0, 1024.0);
        assert_eq!(
            zone.calculate_absolute_geometry(&offset),
            Rect::new(2020.0, 50.0, 800.0, 600.0)
        );
    }

    #[test]
    fn test_mode_selects_authoritative_geometry() {
        let mut zone = Zone::relative("Z", Rect::new(0.0, 0.0, 0.5, 0.5));
        zone.fixed_geometry = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert_eq!(zone.geometry(), Rect::new(0.0, 0.0, 0.5, 0.5));
        zone.mode = GeometryMode::Fixed;
        assert_eq!(zone.geometry(), Rect::new(10.0, 10.0, 100.0, 100.0));
    }

    #[test]
    fn test_contains_and_distance_use_cached_geometry() {
        let mut zone = Zone::relative("Z", Rect::new(0.0, 0.0, 0.5, 1.0));
        assert!(!zone.contains_point(Point::new(100.0, 100.0)));

        zone.recalculate_absolute_geometry(&screen());
        assert!(zone.contains_point(Point::new(100.0, 100.0)));
        assert_eq!(zone.distance_to_point(Point::new(100.0, 100.0)), 0.0);
        assert_eq!(zone.distance_to_point(Point::new(1000.0, 100.0)), 40.0);
    }

    #[test]
    fn test_relative_screen_edges_use_fractional_tolerance() {
        let zone = Zone::relative("Z", Rect::new(0.005, 0.5, 0.49, 0.498));
        let edges = zone.screen_edges(&screen());
        assert!(edges.left);
        assert!(!edges.right);
        assert!(!edges.top);
        assert!(edges.bottom);
    }

    #[test]
    fn test_fixed_screen_edges_use_pixel_tolerance() {
        let zone = Zone::fixed("Z", Rect::new(4.0, 10.0, 1913.0, 1000.0));
        let edges = zone.screen_edges(&screen());
        assert!(edges.left);
        assert!(edges.right);
        assert!(!edges.top);
        assert!(!edges.bottom);
    }

    #[test]
    fn test_duplicate_gets_new_identity() {
        let zone = Zone::relative("Z", Rect::new(0.0, 0.0, 1.0, 1.0));
        let copy = zone.duplicate();
        assert_ne!(zone.id, copy.id);
        assert_eq!(zone.relative_geometry, copy.relative_geometry);
        assert_eq!(zone.name, copy.name);
    }

    #[test]
    fn test_convert_mode_keeps_position() {
        let mut zone = Zone::relative("Z", Rect::new(0.25, 0.5, 0.5, 0.5));
        zone.convert_mode(GeometryMode::Fixed, &screen());
        assert_eq!(zone.mode, GeometryMode::Fixed);
        assert_eq!(zone.fixed_geometry, Rect::new(480.0, 540.0, 960.0, 540.0));

        zone.convert_mode(GeometryMode::Relative, &screen());
        assert!(zone.relative_geometry.approx_eq(&Rect::new(0.25, 0.5, 0.5, 0.5), 1e-9));
    }

    #[test]
    fn test_serialization_skips_cached_geometry() {
        let mut zone = Zone::relative("Z", Rect::new(0.0, 0.0, 1.0, 1.0));
        zone.recalculate_absolute_geometry(&screen());
        let json = serde_json::to_value(&zone).unwrap();
        assert!(json.get("absoluteGeometry").is_none());
        assert_eq!(json["mode"], "relative");

        let back: Zone = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, zone.id);
        assert_eq!(back.absolute_geometry(), Rect::zero());
    }
}

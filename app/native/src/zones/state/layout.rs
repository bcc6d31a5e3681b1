//! Layouts: ordered zone collections with gap overrides.
//!
//! A layout owns its zones in a dense vector. Stored order doubles as the
//! z-order for point queries and determines zone numbers, which are kept as a
//! contiguous 1..N sequence by renumbering after every structural mutation.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::gaps::{EdgeGaps, INHERIT};
use super::types::{Point, Rect};
use super::zone::Zone;

/// An ordered set of zones plus gap configuration.
///
/// Layouts are not `Clone`: a copy must get fresh layout and zone identities,
/// use [`Layout::duplicate`].
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Unique identifier (UUID v7 for time-ordering).
    pub id: Uuid,

    /// User-facing name.
    pub name: String,

    /// Optional description shown in layout pickers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Zones in display order.
    zones: Vec<Zone>,

    /// Inner gap override in pixels, `-1` to use the global setting.
    zone_padding: i32,

    /// Uniform outer gap override in pixels, `-1` to use the global setting.
    outer_gap: i32,

    /// Per-edge outer gap overrides, used when `use_per_side_outer_gap` is set.
    outer_gaps: EdgeGaps,

    /// Whether the per-edge outer gap overrides are active.
    use_per_side_outer_gap: bool,

    /// Resolve against the full screen instead of the available area.
    use_full_screen_geometry: bool,

    /// Screen rectangle of the last geometry recalculation.
    #[serde(skip)]
    last_screen: Option<Rect>,
}

/// Serialized form of a layout; converted into [`Layout`] so zones are renumbered.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutRecord {
    #[serde(default = "Uuid::now_v7")]
    id: Uuid,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    zones: Vec<Zone>,
    #[serde(default = "inherit_gap")]
    zone_padding: i32,
    #[serde(default = "inherit_gap")]
    outer_gap: i32,
    #[serde(default)]
    outer_gaps: EdgeGaps,
    #[serde(default)]
    use_per_side_outer_gap: bool,
    #[serde(default)]
    use_full_screen_geometry: bool,
}

const fn inherit_gap() -> i32 { INHERIT }

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = LayoutRecord::deserialize(deserializer)?;
        let mut layout = Self {
            id: record.id,
            name: record.name,
            description: record.description,
            zones: record.zones,
            zone_padding: record.zone_padding,
            outer_gap: record.outer_gap,
            outer_gaps: record.outer_gaps,
            use_per_side_outer_gap: record.use_per_side_outer_gap,
            use_full_screen_geometry: record.use_full_screen_geometry,
            last_screen: None,
        };
        layout.renumber_zones();
        Ok(layout)
    }
}

impl Default for Layout {
    fn default() -> Self { Self::new("") }
}

impl Layout {
    /// Creates an empty layout that inherits all gap settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            description: String::new(),
            zones: Vec::new(),
            zone_padding: INHERIT,
            outer_gap: INHERIT,
            outer_gaps: EdgeGaps::inherit(),
            use_per_side_outer_gap: false,
            use_full_screen_geometry: false,
            last_screen: None,
        }
    }

    /// Creates a layout from zones, numbering them in order.
    #[must_use]
    pub fn with_zones(name: impl Into<String>, zones: Vec<Zone>) -> Self {
        let mut layout = Self::new(name);
        layout.zones = zones;
        layout.renumber_zones();
        layout
    }

    /// Copies the layout; the copy and each of its zones get new identities.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: self.name.clone(),
            description: self.description.clone(),
            zones: self.zones.iter().map(Zone::duplicate).collect(),
            zone_padding: self.zone_padding,
            outer_gap: self.outer_gap,
            outer_gaps: self.outer_gaps,
            use_per_side_outer_gap: self.use_per_side_outer_gap,
            use_full_screen_geometry: self.use_full_screen_geometry,
            last_screen: None,
        }
    }

    // ========================================================================
    // Zone access
    // ========================================================================

    /// Zones in display order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] { &self.zones }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize { self.zones.len() }

    /// Returns true if the layout has no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.zones.is_empty() }

    /// Zone at a storage index.
    #[must_use]
    pub fn zone(&self, index: usize) -> Option<&Zone> { self.zones.get(index) }

    /// Mutable zone at a storage index. Invalidates the geometry cache.
    pub fn zone_mut(&mut self, index: usize) -> Option<&mut Zone> {
        self.last_screen = None;
        self.zones.get_mut(index)
    }

    /// Zone with the given id.
    #[must_use]
    pub fn zone_by_id(&self, id: Uuid) -> Option<&Zone> { self.zones.iter().find(|z| z.id == id) }

    /// Zone with the given 1-based number.
    #[must_use]
    pub fn zone_by_number(&self, number: u32) -> Option<&Zone> {
        self.zones.iter().find(|z| z.number == number)
    }

    /// Storage index of the zone with the given id.
    #[must_use]
    pub fn index_of(&self, id: Uuid) -> Option<usize> { self.zones.iter().position(|z| z.id == id) }

    // ========================================================================
    // Structural mutation
    // ========================================================================

    /// Appends a zone.
    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
        self.structure_changed();
    }

    /// Inserts a zone at `index`, appending if the index is past the end.
    pub fn insert_zone(&mut self, index: usize, zone: Zone) {
        let index = index.min(self.zones.len());
        self.zones.insert(index, zone);
        self.structure_changed();
    }

    /// Removes and returns the zone at `index`.
    pub fn remove_zone(&mut self, index: usize) -> Option<Zone> {
        if index >= self.zones.len() {
            return None;
        }
        let zone = self.zones.remove(index);
        self.structure_changed();
        Some(zone)
    }

    /// Removes and returns the zone with the given id.
    pub fn remove_zone_by_id(&mut self, id: Uuid) -> Option<Zone> {
        let index = self.index_of(id)?;
        self.remove_zone(index)
    }

    /// Moves the zone at `from` to position `to`.
    ///
    /// Returns false if either index is out of range.
    pub fn move_zone(&mut self, from: usize, to: usize) -> bool {
        let len = self.zones.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let zone = self.zones.remove(from);
            self.zones.insert(to, zone);
            self.structure_changed();
        }
        true
    }

    /// Removes every zone.
    pub fn clear_zones(&mut self) {
        self.zones.clear();
        self.structure_changed();
    }

    /// Reassigns zone numbers as 1..N in stored order.
    fn renumber_zones(&mut self) {
        for (number, zone) in (1u32..).zip(self.zones.iter_mut()) {
            zone.number = number;
        }
    }

    fn structure_changed(&mut self) {
        self.renumber_zones();
        self.last_screen = None;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// First zone in stored order whose absolute geometry contains `point`.
    #[must_use]
    pub fn zone_at_point(&self, point: Point) -> Option<&Zone> {
        self.zones.iter().find(|z| z.contains_point(point))
    }

    /// Zone closest to `point`.
    ///
    /// Ties go to the earliest zone. A negative `max_distance` disables the
    /// distance limit.
    #[must_use]
    pub fn nearest_zone(&self, point: Point, max_distance: f64) -> Option<&Zone> {
        let mut best: Option<(&Zone, f64)> = None;
        for zone in &self.zones {
            let distance = zone.distance_to_point(point);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((zone, distance));
            }
        }
        best.filter(|&(_, d)| max_distance < 0.0 || d <= max_distance).map(|(zone, _)| zone)
    }

    /// All zones whose absolute geometry intersects `rect`.
    #[must_use]
    pub fn zones_in_rect(&self, rect: &Rect) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.absolute_geometry().intersects(rect)).collect()
    }

    /// All zones within `threshold` pixels of `point`.
    #[must_use]
    pub fn adjacent_zones(&self, point: Point, threshold: f64) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.distance_to_point(point) <= threshold).collect()
    }

    // ========================================================================
    // Geometry cache
    // ========================================================================

    /// Recomputes every zone's absolute geometry against `screen`.
    ///
    /// Returns false without doing any work when `screen` matches the
    /// rectangle of the previous recalculation and nothing was mutated since.
    pub fn recalculate_zone_geometries(&mut self, screen: &Rect) -> bool {
        if self.last_screen.as_ref() == Some(screen) {
            tracing::trace!(layout = %self.name, "layout: geometry cache hit");
            return false;
        }
        for zone in &mut self.zones {
            zone.recalculate_absolute_geometry(screen);
        }
        self.last_screen = Some(*screen);
        true
    }

    /// Forces the next [`Layout::recalculate_zone_geometries`] to recompute.
    pub const fn invalidate_geometry(&mut self) { self.last_screen = None; }

    /// Screen rectangle of the last recalculation, if still valid.
    #[must_use]
    pub const fn last_screen(&self) -> Option<Rect> { self.last_screen }

    // ========================================================================
    // Gap overrides
    // ========================================================================

    /// Inner gap override, `None` when inherited.
    #[must_use]
    pub fn zone_padding(&self) -> Option<u32> { u32::try_from(self.zone_padding).ok() }

    /// Sets the inner gap override; `None` inherits the global setting.
    pub fn set_zone_padding(&mut self, padding: Option<u32>) {
        self.zone_padding = padding.map_or(INHERIT, clamp_gap);
        self.last_screen = None;
    }

    /// Uniform outer gap override, `None` when inherited.
    #[must_use]
    pub fn outer_gap(&self) -> Option<u32> { u32::try_from(self.outer_gap).ok() }

    /// Sets the uniform outer gap override; `None` inherits the global setting.
    pub fn set_outer_gap(&mut self, gap: Option<u32>) {
        self.outer_gap = gap.map_or(INHERIT, clamp_gap);
        self.last_screen = None;
    }

    /// Per-edge outer gap overrides (edges may carry the inherit sentinel).
    #[must_use]
    pub const fn outer_gaps(&self) -> EdgeGaps { self.outer_gaps }

    /// Sets the per-edge outer gap overrides.
    pub fn set_outer_gaps(&mut self, gaps: EdgeGaps) {
        self.outer_gaps = gaps;
        self.last_screen = None;
    }

    /// Whether per-edge outer gap overrides are active.
    #[must_use]
    pub const fn use_per_side_outer_gap(&self) -> bool { self.use_per_side_outer_gap }

    /// Enables or disables the per-edge outer gap overrides.
    pub fn set_use_per_side_outer_gap(&mut self, enabled: bool) {
        self.use_per_side_outer_gap = enabled;
        self.last_screen = None;
    }

    /// Whether zones resolve against the full screen instead of the available area.
    #[must_use]
    pub const fn use_full_screen_geometry(&self) -> bool { self.use_full_screen_geometry }

    /// Chooses between the full screen and the available area.
    pub fn set_use_full_screen_geometry(&mut self, enabled: bool) {
        self.use_full_screen_geometry = enabled;
        self.last_screen = None;
    }
}

fn clamp_gap(gap: u32) -> i32 { i32::try_from(gap).unwrap_or(i32::MAX) }

// ============================================================================
// Tests
// ============================================================================

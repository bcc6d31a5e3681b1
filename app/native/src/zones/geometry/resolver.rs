//! Gap application: turns zones into the pixel rectangles windows are placed in.
//!
//! Each edge of a zone is classified independently. Edges on the screen
//! boundary are inset by the outer gap of that edge; interior edges are inset
//! by half the inner gap, so two neighbouring zones end up exactly one inner
//! gap apart.

use super::providers::{GapSettings, ScreenProvider};
use crate::zones::state::{EdgeGaps, Layout, Rect, Zone};

/// Resolves zones against a screen using global gap settings and per-layout overrides.
pub struct GeometryResolver<'a, S: GapSettings + ?Sized> {
    settings: &'a S,
}

impl<'a, S: GapSettings + ?Sized> GeometryResolver<'a, S> {
    /// Creates a resolver backed by the given settings.
    #[must_use]
    pub const fn new(settings: &'a S) -> Self { Self { settings } }

    /// Inner gap for a layout: its override if set, else the global value.
    #[must_use]
    pub fn effective_zone_padding(&self, layout: &Layout) -> f64 {
        f64::from(layout.zone_padding().unwrap_or_else(|| self.settings.zone_padding()))
    }

    /// Fully resolved outer gaps for a layout.
    ///
    /// Per-edge overrides (when enabled) fall back to the layout's uniform
    /// override, which falls back to the global settings.
    #[must_use]
    pub fn effective_outer_gaps(&self, layout: &Layout) -> EdgeGaps {
        let global = self.settings.outer_gaps().resolve(&EdgeGaps::zero());
        let uniform = layout.outer_gap().map_or(global, |gap| {
            EdgeGaps::uniform(i32::try_from(gap).unwrap_or(i32::MAX))
        });
        if layout.use_per_side_outer_gap() {
            layout.outer_gaps().resolve(&uniform)
        } else {
            uniform
        }
    }

    /// The rectangle zones of `layout` are resolved against.
    #[must_use]
    pub fn reference_rect<P: ScreenProvider + ?Sized>(&self, layout: &Layout, screen: &P) -> Rect {
        if layout.use_full_screen_geometry() {
            screen.frame()
        } else {
            screen.available_frame()
        }
    }

    /// Resolves a single zone of `layout` to its gapped pixel rectangle.
    #[must_use]
    pub fn resolve_zone<P: ScreenProvider + ?Sized>(
        &self,
        zone: &Zone,
        layout: &Layout,
        screen: &P,
    ) -> Rect {
        let reference = self.reference_rect(layout, screen);
        zone_geometry_with_gaps(
            zone,
            &reference,
            self.effective_zone_padding(layout),
            &self.effective_outer_gaps(layout),
        )
    }

    /// Refreshes the layout's cached geometry and resolves every zone.
    ///
    /// The result is aligned with `layout.zones()`; an empty layout yields an
    /// empty vector.
    pub fn resolve_layout<P: ScreenProvider + ?Sized>(
        &self,
        layout: &mut Layout,
        screen: &P,
    ) -> Vec<Rect> {
        let reference = self.reference_rect(layout, screen);
        if !reference.is_valid() {
            tracing::debug!(layout = %layout.name, "resolver: empty reference rectangle");
            return Vec::new();
        }
        layout.recalculate_zone_geometries(&reference);

        let inner_gap = self.effective_zone_padding(layout);
        let outer = self.effective_outer_gaps(layout);
        layout
            .zones()
            .iter()
            .map(|zone| zone_geometry_with_gaps(zone, &reference, inner_gap, &outer))
            .collect()
    }
}

/// Applies inner and outer gaps to a zone's raw geometry.
///
/// Edges are rounded to whole pixels. If the insets would collapse the zone,
/// the raw rounded geometry is returned instead.
#[must_use]
pub fn zone_geometry_with_gaps(
    zone: &Zone,
    reference: &Rect,
    inner_gap: f64,
    outer: &EdgeGaps,
) -> Rect {
    let raw = zone.calculate_absolute_geometry(reference);
    let edges = zone.screen_edges(reference);
    let (outer_top, outer_bottom, outer_left, outer_right) = outer.to_insets();
    let half = inner_gap.max(0.0) / 2.0;

    let top = if edges.top { outer_top } else { half };
    let bottom = if edges.bottom { outer_bottom } else { half };
    let left = if edges.left { outer_left } else { half };
    let right = if edges.right { outer_right } else { half };

    let gapped =
        Rect::from_edges(raw.x + left, raw.y + top, raw.right() - right, raw.bottom() - bottom)
            .round_edges();

    if gapped.is_valid() {
        gapped
    } else {
        tracing::debug!(zone = %zone.name, "resolver: gaps collapse zone, using raw geometry");
        raw.round_edges()
    }
}

// ============================================================================
// Tests
// ============================================================================

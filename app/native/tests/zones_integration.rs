//! End-to-end tests for the zone geometry engine.
//!
//! These exercise the public API the way a window manager would: load a
//! layout, resolve it against a screen with configured gaps, then enforce
//! minimum window sizes on the result.

#![allow(clippy::float_cmp)]

use std::io::Write;

use zonesnap_lib::config::load_config_from_path;
use zonesnap_lib::zones::geometry::templates;
use zonesnap_lib::zones::{
    AxisOutcome, ConstraintSolver, GeometryResolver, Layout, MinSize, Rect, Screen, SolverConfig,
    StaticGaps, Zone, enforce_minimum_sizes,
};

// ============================================================================
// Helpers
// ============================================================================

fn screen(width: f64, height: f64) -> Screen { Screen::new("test", Rect::new(0.0, 0.0, width, height)) }

fn assert_no_overlaps(rects: &[Rect]) {
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(a.intersection_area(b) < 1e-6, "{a:?} overlaps {b:?}");
        }
    }
}

fn assert_minimums_met(rects: &[Rect], mins: &[MinSize]) {
    for (rect, min) in rects.iter().zip(mins) {
        assert!(min.is_met_by(rect), "{rect:?} does not meet {min:?}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_relative_half_resolves_to_exact_pixels() {
    let zone = Zone::relative("Left", Rect::new(0.0, 0.0, 0.5, 1.0));
    let absolute = zone.calculate_absolute_geometry(&Rect::new(0.0, 0.0, 1920.0, 1080.0));
    assert_eq!(absolute, Rect::new(0.0, 0.0, 960.0, 1080.0));
}

#[test]
fn test_grid_resolves_with_inner_gaps_only() {
    let gaps = StaticGaps::uniform(10, 0);
    let mut layout = templates::grid(2, 2);
    let rects = GeometryResolver::new(&gaps).resolve_layout(&mut layout, &screen(1920.0, 1080.0));

    assert_eq!(rects, vec![
        Rect::new(0.0, 0.0, 955.0, 535.0),
        Rect::new(965.0, 0.0, 955.0, 535.0),
        Rect::new(0.0, 545.0, 955.0, 535.0),
        Rect::new(965.0, 545.0, 955.0, 535.0),
    ]);
    assert_no_overlaps(&rects);
}

#[test]
fn test_config_file_gaps_drive_resolution() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{
            // Wide inner gap, flush with the screen edges
            "gaps": {{ "zonePadding": 20, "outerGap": 0 }}
        }}"#
    )
    .unwrap();
    let (config, _) = load_config_from_path(file.path()).unwrap();

    let mut layout = templates::columns(2);
    let rects =
        GeometryResolver::new(&config.gaps).resolve_layout(&mut layout, &screen(1000.0, 500.0));

    assert_eq!(rects[0], Rect::new(0.0, 0.0, 490.0, 500.0));
    assert_eq!(rects[1], Rect::new(510.0, 0.0, 490.0, 500.0));
}

#[test]
fn test_layout_file_overrides_and_renumbering() {
    let json = r#"{
        "name": "Overrides",
        "zonePadding": 0,
        "outerGap": 4,
        "zones": [
            { "name": "A", "number": 7, "relativeGeometry": { "x": 0, "y": 0, "width": 0.5, "height": 1 } },
            { "name": "B", "number": 3, "relativeGeometry": { "x": 0.5, "y": 0, "width": 0.5, "height": 1 } }
        ]
    }"#;
    let mut layout: Layout = serde_json::from_str(json).unwrap();

    let numbers: Vec<u32> = layout.zones().iter().map(|z| z.number).collect();
    assert_eq!(numbers, vec![1, 2]);

    let gaps = StaticGaps::uniform(16, 16);
    let resolver = GeometryResolver::new(&gaps);
    assert_eq!(resolver.effective_zone_padding(&layout), 0.0);

    let rects = resolver.resolve_layout(&mut layout, &screen(1000.0, 500.0));
    assert_eq!(rects[0], Rect::new(4.0, 4.0, 496.0, 492.0));
    assert_eq!(rects[1], Rect::new(500.0, 4.0, 496.0, 492.0));
}

#[test]
fn test_layout_json_round_trip_skips_cache() {
    let mut layout = templates::priority_grid();
    layout.recalculate_zone_geometries(&Rect::new(0.0, 0.0, 1920.0, 1080.0));

    let value = serde_json::to_value(&layout).unwrap();
    assert!(value.get("lastScreen").is_none());
    assert!(value["zones"][0].get("absoluteGeometry").is_none());

    let loaded: Layout = serde_json::from_value(value).unwrap();
    assert_eq!(loaded.id, layout.id);
    assert_eq!(loaded.len(), layout.len());
    assert!(loaded.last_screen().is_none());
}

// ============================================================================
// Resolution followed by minimum-size enforcement
// ============================================================================

#[test]
fn test_grid_column_grows_together_and_keeps_gap() {
    let gaps = StaticGaps::uniform(10, 0);
    let mut layout = templates::grid(2, 2);
    let mut rects =
        GeometryResolver::new(&gaps).resolve_layout(&mut layout, &screen(1920.0, 1080.0));

    let mut mins = vec![MinSize::none(); 4];
    mins[0] = MinSize::new(1200.0, 0.0);

    let report = ConstraintSolver::new(SolverConfig::default().with_inner_gap(10.0))
        .solve(&mut rects, &mins);

    assert_eq!(report.horizontal, AxisOutcome::Boundary);
    assert_eq!(report.vertical, AxisOutcome::Satisfied);
    assert_eq!(rects[0], Rect::new(0.0, 0.0, 1200.0, 535.0));
    assert_eq!(rects[1], Rect::new(1210.0, 0.0, 710.0, 535.0));
    assert_eq!(rects[2].width, 1200.0, "bottom-left cell shares the column");
    assert_eq!(rects[3].x, 1210.0);
    assert_no_overlaps(&rects);
}

#[test]
fn test_nested_split_borrows_from_neighbour() {
    let mut layout = Layout::with_zones("Nested", vec![
        Zone::relative("Left", Rect::new(0.0, 0.0, 0.5, 1.0)),
        Zone::relative("Top Right", Rect::new(0.5, 0.0, 0.5, 0.5)),
        Zone::relative("Bottom Middle", Rect::new(0.5, 0.5, 0.25, 0.5)),
        Zone::relative("Bottom Right", Rect::new(0.75, 0.5, 0.25, 0.5)),
    ]);
    let gaps = StaticGaps::zero();
    let mut rects =
        GeometryResolver::new(&gaps).resolve_layout(&mut layout, &screen(1000.0, 1000.0));

    let mins = [MinSize::none(), MinSize::none(), MinSize::new(400.0, 0.0), MinSize::none()];
    let report = enforce_minimum_sizes(&mut rects, &mins, &SolverConfig::default());

    assert!(matches!(report.horizontal, AxisOutcome::Pairwise { .. }));
    assert_minimums_met(&rects, &mins);
    assert_no_overlaps(&rects);
    for rect in &rects {
        assert!(rect.x >= 0.0 && rect.right() <= 1000.0, "{rect:?} left the screen");
    }
}

#[test]
fn test_header_over_columns_borrows_along_the_row() {
    let mut layout = Layout::with_zones("Header", vec![
        Zone::fixed("Header", Rect::new(0.0, 0.0, 1920.0, 200.0)),
        Zone::fixed("Left", Rect::new(0.0, 200.0, 469.0, 880.0)),
        Zone::fixed("Middle", Rect::new(469.0, 200.0, 236.0, 880.0)),
        Zone::fixed("Right", Rect::new(705.0, 200.0, 1215.0, 880.0)),
    ]);
    let gaps = StaticGaps::zero();
    let mut rects =
        GeometryResolver::new(&gaps).resolve_layout(&mut layout, &screen(1920.0, 1080.0));

    let mut mins = [MinSize::none(); 4];
    mins[3] = MinSize::new(1458.0, 0.0);
    let report = enforce_minimum_sizes(&mut rects, &mins, &SolverConfig::default());

    assert!(matches!(report.horizontal, AxisOutcome::Pairwise { .. }));
    assert_minimums_met(&rects, &mins);
    assert_no_overlaps(&rects);
    assert_eq!(rects[1].width + rects[2].width + rects[3].width, 1920.0);
    assert!(rects[2].width >= 1.0);
}

#[test]
fn test_free_zones_keep_a_pixel_under_pressure() {
    let mut rects = vec![
        Rect::new(0.0, 0.0, 50.0, 100.0),
        Rect::new(50.0, 0.0, 25.0, 100.0),
        Rect::new(75.0, 0.0, 25.0, 100.0),
    ];
    let mins = [MinSize::new(99.0, 0.0), MinSize::none(), MinSize::none()];

    enforce_minimum_sizes(&mut rects, &mins, &SolverConfig::default());

    let widths: Vec<f64> = rects.iter().map(|r| r.width).collect();
    assert_eq!(widths, vec![98.0, 1.0, 1.0]);
    assert_no_overlaps(&rects);
}

#[test]
fn test_unsatisfiable_minimums_compress_evenly() {
    let mut rects = vec![
        Rect::new(0.0, 0.0, 333.0, 100.0),
        Rect::new(333.0, 0.0, 333.0, 100.0),
        Rect::new(666.0, 0.0, 334.0, 100.0),
    ];
    let mins = [MinSize::new(400.0, 0.0); 3];

    let report = enforce_minimum_sizes(&mut rects, &mins, &SolverConfig::default());

    assert_eq!(report.horizontal, AxisOutcome::BoundaryCompressed);
    let total: f64 = rects.iter().map(|r| r.width).sum();
    assert!(total <= 1000.0 + 1e-6, "total width {total}");
    for rect in &rects {
        assert!(rect.width >= 1.0);
        assert!((rect.width - 1000.0 / 3.0).abs() <= 2.0, "width {} not even", rect.width);
    }
    assert_no_overlaps(&rects);
}

#[test]
fn test_solving_twice_changes_nothing() {
    let gaps = StaticGaps::uniform(8, 8);
    let mut layout = templates::focus();
    let mut rects =
        GeometryResolver::new(&gaps).resolve_layout(&mut layout, &screen(2560.0, 1440.0));
    let mins = [MinSize::new(700.0, 400.0), MinSize::none(), MinSize::new(600.0, 0.0)];
    let config = SolverConfig::default().with_inner_gap(8.0);

    enforce_minimum_sizes(&mut rects, &mins, &config);
    let first = rects.clone();
    let report = enforce_minimum_sizes(&mut rects, &mins, &config);

    assert_eq!(rects, first);
    assert!(!report.changed());
    assert_minimums_met(&rects, &mins);
}

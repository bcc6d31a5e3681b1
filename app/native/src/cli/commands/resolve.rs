//! `zonesnap resolve`: resolve a layout file against a screen.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use json_comments::StripComments;
use serde::Serialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::types::{MinSizeArg, ScreenGeometry};
use crate::cli::output;
use crate::config::{self, ZoneSnapConfig};
use crate::error::ZoneSnapError;
use crate::zones::{ConstraintSolver, GeometryResolver, Layout, MinSize, Rect, Screen, SolveReport};

/// Arguments for `zonesnap resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Layout file to resolve (JSON or JSONC).
    #[arg(long, short, value_name = "FILE")]
    pub layout: PathBuf,

    /// Full screen geometry.
    #[arg(long, short, value_name = "WxH[+X+Y]")]
    pub screen: ScreenGeometry,

    /// Available screen area (excluding menu bar and dock). Defaults to the full screen.
    #[arg(long, short, value_name = "WxH[+X+Y]")]
    pub available: Option<ScreenGeometry>,

    /// Minimum window size, one per zone in order. Zones without one are unconstrained.
    #[arg(long = "min", short, value_name = "WxH")]
    pub min: Vec<MinSizeArg>,

    /// Output in JSON format instead of table format.
    #[arg(long, short)]
    pub json: bool,
}

/// One resolved zone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedZone {
    pub number: u32,
    pub name: String,
    pub rect: Rect,
    pub min_size: MinSize,
    pub meets_minimum: bool,
}

/// Result of resolving a layout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub layout: String,
    /// Rectangle zones were resolved against.
    pub reference: Rect,
    pub zone_padding: f64,
    pub zones: Vec<ResolvedZone>,
    /// Present when minimum sizes were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solve: Option<SolveReport>,
}

/// Reads a layout file, stripping comments.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid layout.
pub fn load_layout(path: &Path) -> Result<Layout, ZoneSnapError> {
    let file = File::open(path).map_err(|err| {
        ZoneSnapError::LayoutError(format!("Cannot open {}: {err}", path.display()))
    })?;
    let reader = StripComments::new(BufReader::new(file));
    let layout: Layout = serde_json::from_reader(reader)
        .map_err(|err| ZoneSnapError::LayoutError(format!("{}: {err}", path.display())))?;

    tracing::debug!(path = %path.display(), zones = layout.len(), "layout: loaded");
    Ok(layout)
}

/// Resolves `layout` on `screen` and, when `min_sizes` is non-empty, enforces them.
///
/// Missing trailing minimums are treated as unconstrained.
///
/// # Errors
///
/// Returns `InvalidArguments` if more minimum sizes than zones are given.
pub fn resolve(
    layout: &mut Layout,
    screen: &Screen,
    min_sizes: &[MinSize],
    config: &ZoneSnapConfig,
) -> Result<Resolution, ZoneSnapError> {
    if min_sizes.len() > layout.len() {
        return Err(ZoneSnapError::InvalidArguments(format!(
            "Got {} minimum sizes but layout '{}' has {} zones",
            min_sizes.len(),
            layout.name,
            layout.len()
        )));
    }

    let resolver = GeometryResolver::new(&config.gaps);
    let reference = resolver.reference_rect(layout, screen);
    let zone_padding = resolver.effective_zone_padding(layout);
    let mut rects = resolver.resolve_layout(layout, screen);

    let mut mins = min_sizes.to_vec();
    mins.resize(rects.len(), MinSize::none());

    let solve = if min_sizes.is_empty() {
        None
    } else {
        let solver = ConstraintSolver::new(config.solver.solver_config(zone_padding));
        Some(solver.solve(&mut rects, &mins))
    };

    let zones = layout
        .zones()
        .iter()
        .zip(rects)
        .zip(&mins)
        .map(|((zone, rect), min)| ResolvedZone {
            number: zone.number,
            name: zone.name.clone(),
            rect,
            min_size: *min,
            meets_minimum: min.is_met_by(&rect),
        })
        .collect();

    Ok(Resolution {
        layout: layout.name.clone(),
        reference,
        zone_padding,
        zones,
        solve,
    })
}

/// Execute the resolve command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded or the arguments are invalid.
pub fn execute(args: &ResolveArgs) -> Result<(), ZoneSnapError> {
    let mut layout = load_layout(&args.layout)?;

    let frame = args.screen.rect();
    let visible = args.available.map_or(frame, ScreenGeometry::rect);
    let screen = Screen::new("cli", frame).with_visible_frame(visible);

    let min_sizes: Vec<MinSize> = args.min.iter().map(|m| m.min_size()).collect();
    let resolution = resolve(&mut layout, &screen, &min_sizes, config::get_config())?;

    if args.json {
        output::print_highlighted_json(&serde_json::to_value(&resolution)?);
    } else {
        print_table(&resolution);
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn print_table(resolution: &Resolution) {
    #[derive(Tabled)]
    struct ZoneRow {
        #[tabled(rename = "#")]
        number: u32,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Position")]
        position: String,
        #[tabled(rename = "Size")]
        size: String,
        #[tabled(rename = "Minimum")]
        minimum: String,
        #[tabled(rename = "OK")]
        ok: String,
    }

    if resolution.zones.is_empty() {
        println!("{}", "Layout has no zones.".dimmed());
        return;
    }

    let rows: Vec<ZoneRow> = resolution
        .zones
        .iter()
        .map(|zone| {
            let min = zone.min_size;
            ZoneRow {
                number: zone.number,
                name: output::truncate(&zone.name, 24),
                position: format!("{}, {}", zone.rect.x as i64, zone.rect.y as i64),
                size: format!("{}x{}", zone.rect.width as i64, zone.rect.height as i64),
                minimum: if min.is_none() {
                    "-".to_string()
                } else {
                    format!("{}x{}", min.width.max(0.0) as i64, min.height.max(0.0) as i64)
                },
                ok: output::format_bool(zone.meets_minimum),
            }
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::right()))
        .with(Modify::new(Columns::new(2..5)).with(Alignment::right()))
        .with(Modify::new(Columns::last()).with(Alignment::center()))
        .to_string();

    let count = resolution.zones.len();
    println!("{}", format!("{} ({count} zones)", resolution.layout).bold());
    println!("{table}");

    if let Some(report) = resolution.solve {
        println!(
            "{} {}  {} {}  {} {}",
            "Widths:".dimmed(),
            report.horizontal,
            "Heights:".dimmed(),
            report.vertical,
            "Overlaps resolved:".dimmed(),
            report.overlaps_resolved
        );
    }
}

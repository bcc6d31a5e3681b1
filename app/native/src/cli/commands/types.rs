//! Shared argument types for CLI commands.

use std::str::FromStr;

use crate::zones::{MinSize, Rect};

/// A screen rectangle given as `WIDTHxHEIGHT[+X+Y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry(Rect);

impl ScreenGeometry {
    /// Returns the parsed rectangle.
    #[must_use]
    pub const fn rect(self) -> Rect { self.0 }
}

impl FromStr for ScreenGeometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid screen geometry '{s}'. Expected WIDTHxHEIGHT[+X+Y].");

        let (size, origin) = match s.split_once('+') {
            Some((size, origin)) => (size, Some(origin)),
            None => (s, None),
        };

        let (width, height) = parse_dimensions(size).ok_or_else(invalid)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid());
        }

        let (x, y) = match origin {
            Some(origin) => {
                let (x, y) = origin.split_once('+').ok_or_else(invalid)?;
                (parse_number(x).ok_or_else(invalid)?, parse_number(y).ok_or_else(invalid)?)
            }
            None => (0.0, 0.0),
        };

        Ok(Self(Rect::new(x, y, width, height)))
    }
}

/// A minimum window size given as `WIDTHxHEIGHT`. Use `0` for no constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSizeArg(MinSize);

impl MinSizeArg {
    #[must_use]
    pub const fn min_size(self) -> MinSize { self.0 }
}

impl FromStr for MinSizeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_dimensions(s)
            .filter(|(w, h)| *w >= 0.0 && *h >= 0.0)
            .ok_or_else(|| format!("Invalid minimum size '{s}'. Expected WIDTHxHEIGHT."))?;
        Ok(Self(MinSize::new(width, height)))
    }
}

/// Built-in layout templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Equal-width columns.
    Columns,
    /// Equal-height rows.
    Rows,
    /// Uniform grid.
    Grid,
    /// Large primary zone with a stacked side column.
    Priority,
    /// Wide centre zone between two narrow ones.
    Focus,
}

/// Which JSON Schema to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaTarget {
    /// Layout files.
    #[default]
    Layout,
    /// The configuration file.
    Config,
}

fn parse_dimensions(s: &str) -> Option<(f64, f64)> {
    let (width, height) = s.trim().split_once(['x', 'X'])?;
    Some((parse_number(width)?, parse_number(height)?))
}

fn parse_number(s: &str) -> Option<f64> { s.trim().parse::<f64>().ok().filter(|v| v.is_finite()) }

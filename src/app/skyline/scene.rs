use serde::Serialize;

use super::palette::{Hsl, Rgb};
use super::style::StyleVariant;

/// City footprint, in rem units shared with the style layout table.
pub const CITY_WIDTH: f64 = 19.0;
pub const CITY_HEIGHT: f64 = 32.0;
pub const ROW_COUNT: usize = 8;

/// Shortest possible building, one full row band tall.
pub const MINIMUM_BUILDING_HEIGHT: f64 = CITY_HEIGHT / ROW_COUNT as f64;

/// A single pane. Every window of one building shares the same tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub style: StyleVariant,
    pub color: Hsl,
    /// Facade height in rem, always above [`MINIMUM_BUILDING_HEIGHT`].
    pub height: f64,
    pub windows: Vec<Window>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub vertical_offset_percent: f64,
    pub buildings: Vec<Building>,
}

/// Complete structured description of one skyline. Write-once output of the
/// builder and read-only input to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub rows: Vec<Row>,
}

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};

use super::{RenderAdapter, RenderError, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::app::skyline::palette::{Hsl, Rgb};
use crate::app::skyline::scene::{Building, Scene, CITY_HEIGHT, CITY_WIDTH};

/// Pixels per rem unit of the scene coordinate space.
const PX_PER_REM: f64 = 10.0;

/// Leftmost building edge sits off-canvas, matching the row inset.
const ROW_INSET: f64 = -2.0;
/// Horizontal margin between neighbouring buildings.
const BUILDING_MARGIN: f64 = 0.2;

const BORDER_LEFT_WIDTH: f64 = 0.5;
const BORDER_TOP_HEIGHT: f64 = 0.2;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const ROW_BACKDROP: Rgba<u8> = Rgba([128, 128, 128, 255]);
const WINDOW_FRAME: Rgba<u8> = Rgba([85, 78, 80, 255]);
const HIGHLIGHT: Rgb = Rgb {
    red: 211,
    green: 211,
    blue: 211,
};

/// CPU rasterizer for skyline scenes.
///
/// The city occupies a square of `CITY_HEIGHT` rem centered in the viewport;
/// rows are stacked top-to-bottom in the order they appear in the scene, and
/// each building is laid out from its style's static grid metadata. Pure
/// function of the scene, so identical scenes produce identical PNG bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterRenderer;

impl RenderAdapter for RasterRenderer {
    fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        let mut canvas = Canvas::new();

        for row in &scene.rows {
            // Row offsets grow bottom-up in scene space; the rendered city is
            // flipped, so the offset maps straight to a top band.
            let band_top = CITY_HEIGHT * row.vertical_offset_percent / 100.0;
            let band_height = CITY_HEIGHT / scene.rows.len() as f64;

            canvas.fill_rect(ROW_INSET, band_top, CITY_HEIGHT - ROW_INSET, band_height, ROW_BACKDROP);

            let mut x = ROW_INSET;
            for building in &row.buildings {
                x += BUILDING_MARGIN;
                x += draw_building(&mut canvas, x, band_top, building);
            }
        }

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(canvas.into_image())
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;

        Ok(bytes)
    }
}

/// Draw one building anchored at `(x, top)` rem; returns its width.
fn draw_building(canvas: &mut Canvas, x: f64, top: f64, building: &Building) -> f64 {
    let layout = building.style.layout();

    let window_width = layout.window_width.unwrap_or(CITY_WIDTH / 80.0);
    let window_height = layout.window_height.unwrap_or(CITY_HEIGHT / 50.0);

    let columns = layout.columns as f64;
    let width = 2.0 * layout.padding_horizontal
        + columns * window_width
        + (columns - 1.0) * layout.gap;

    let facade = hsl_to_rgba(building.color);
    let trim = hsl_to_rgba(darken(building.color));

    canvas.fill_rect(x, top, width, building.height, facade);
    canvas.fill_rect(x, top, BORDER_LEFT_WIDTH, building.height, trim);
    canvas.fill_rect(x, top, width, BORDER_TOP_HEIGHT, trim);
    canvas.fill_rect(x + width - 0.1, top, 0.1, building.height, trim);

    for (index, window) in building.windows.iter().enumerate() {
        let nth = index as u32 + 1;

        if layout.hidden_every.iter().any(|every| nth % every == 0) {
            continue;
        }

        let column = index as u32 % layout.columns;
        let grid_row = index as u32 / layout.columns;

        let wx = x + layout.padding_horizontal + f64::from(column) * (window_width + layout.gap);
        let wy = top + layout.padding_vertical + f64::from(grid_row) * (window_height + layout.gap);

        // the facade clips its own window grid
        if wy + window_height > top + building.height {
            break;
        }

        let mut glass = window.color;
        if let Some(every) = layout.highlight_every {
            if nth % every == 0 {
                glass = HIGHLIGHT;
            }
        }

        let mut opacity = layout.window_opacity;
        for rule in layout.opacity_rules {
            if nth % rule.every == 0 {
                opacity = rule.opacity;
            }
        }

        let fill = blend(glass, facade, opacity);
        canvas.fill_rect(wx, wy, window_width, window_height, fill);
        canvas.stroke_rect(wx, wy, window_width, window_height, WINDOW_FRAME);
    }

    width
}

/// Viewport-sized RGBA canvas that clips all drawing to the city square.
struct Canvas {
    image: RgbaImage,
    origin_x: i64,
    origin_y: i64,
    side: i64,
}

impl Canvas {
    fn new() -> Self {
        let side = (CITY_HEIGHT * PX_PER_REM) as i64;

        Self {
            image: RgbaImage::from_pixel(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, BACKGROUND),
            origin_x: (i64::from(VIEWPORT_WIDTH) - side) / 2,
            origin_y: (i64::from(VIEWPORT_HEIGHT) - side) / 2,
            side,
        }
    }

    fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill a rem-space rectangle, clipped to the city square.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
        let left = (x * PX_PER_REM).round() as i64;
        let top = (y * PX_PER_REM).round() as i64;
        let right = ((x + width) * PX_PER_REM).round() as i64;
        let bottom = ((y + height) * PX_PER_REM).round() as i64;

        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.side);
        let bottom = bottom.min(self.side);

        for py in top..bottom {
            for px in left..right {
                self.image.put_pixel(
                    (self.origin_x + px) as u32,
                    (self.origin_y + py) as u32,
                    color,
                );
            }
        }
    }

    /// One-pixel frame around a rem-space rectangle.
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
        let px = 1.0 / PX_PER_REM;

        self.fill_rect(x, y, width, px, color);
        self.fill_rect(x, y + height - px, width, px, color);
        self.fill_rect(x, y, px, height, color);
        self.fill_rect(x + width - px, y, px, height, color);
    }
}

/// Border trim color: the facade with saturation and lightness pulled down.
fn darken(color: Hsl) -> Hsl {
    Hsl {
        hue: color.hue,
        saturation: color.saturation.saturating_sub(30),
        lightness: color.lightness.saturating_sub(30),
    }
}

fn blend(glass: Rgb, facade: Rgba<u8>, opacity: f64) -> Rgba<u8> {
    let mix = |fg: u8, bg: u8| -> u8 {
        (f64::from(fg) * opacity + f64::from(bg) * (1.0 - opacity)).round() as u8
    };

    Rgba([
        mix(glass.red, facade[0]),
        mix(glass.green, facade[1]),
        mix(glass.blue, facade[2]),
        255,
    ])
}

fn hsl_to_rgba(color: Hsl) -> Rgba<u8> {
    let hue = f64::from(color.hue % 360);
    let saturation = f64::from(color.saturation.min(100)) / 100.0;
    let lightness = f64::from(color.lightness.min(100)) / 100.0;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_sector = hue / 60.0;
    let secondary = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());

    let (red, green, blue) = match hue_sector as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    let offset = lightness - chroma / 2.0;
    let channel = |value: f64| -> u8 { ((value + offset) * 255.0).round() as u8 };

    Rgba([channel(red), channel(green), channel(blue), 255])
}

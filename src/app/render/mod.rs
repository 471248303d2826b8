//! Scene rasterization.
//!
//! The generator hands over a plain [`Scene`]; everything visual beyond that
//! (style layout metadata, color math, pixel output) lives behind the
//! [`RenderAdapter`] seam so the core stays testable without touching pixels.

pub mod raster;

use thiserror::Error;

use super::skyline::Scene;

pub use raster::RasterRenderer;

/// Output viewport, one frame, opaque background.
pub const VIEWPORT_WIDTH: u32 = 400;
pub const VIEWPORT_HEIGHT: u32 = 500;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode the rendered scene")]
    Encode(#[from] image::ImageError),
}

/// Converts a finished scene into image bytes. Implementations must be pure:
/// the same scene always yields the same bytes.
pub trait RenderAdapter: Send + Sync {
    fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError>;
}

//! PNG preview backend.
//!
//! Rasterizes the SVG with resvg on a white background. Meant for quick
//! looks and chat messages, not for cutting: use SVG or PDF for that.

use super::parse_svg;
use crate::error::RenderError;

/// usvg resolves `mm` lengths at 96 dpi.
const PX_PER_MM: f64 = 96.0 / 25.4;

pub fn svg_to_png(svg: &str, pixels_per_mm: f64) -> Result<Vec<u8>, RenderError> {
    let tree = parse_svg(svg)?;
    let scale = (pixels_per_mm / PX_PER_MM) as f32;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| RenderError::Png(e.to_string()))
}

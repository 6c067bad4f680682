//! PDF backend.
//!
//! The page is produced from the very same SVG the SVG backend writes:
//! usvg resolves it, svg2pdf lays it out on one page of the board's
//! physical size. Printing at 100% gives a true-scale template.

use super::parse_svg;
use crate::error::RenderError;

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, RenderError> {
    let tree = parse_svg(svg)?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| RenderError::Pdf(format!("{:?}", e)))
}

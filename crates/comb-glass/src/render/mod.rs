//! Output writers.
//!
//! Every format starts from the same [`Scene`](scene::Scene): SVG spells it
//! out directly, PDF and PNG are produced from that SVG, so all drawings of
//! a variant look the same. The text and JSON listings skip the scene and
//! use the variant's points as they are.

pub mod pdf;
pub mod png;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::variant::Variant;

pub use scene::{Element, HoleGlyph, Paint, Scene};
pub use theme::Theme;

/// Output format for a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Svg,
    Pdf,
    Png,
    Text,
    Json,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Svg,
            OutputFormat::Pdf,
            OutputFormat::Png,
            OutputFormat::Text,
            OutputFormat::Json,
        ]
    }

    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.to_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "pdf" => Some(OutputFormat::Pdf),
            "png" => Some(OutputFormat::Png),
            "txt" | "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Appended to the variant's file stem.
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Svg => ".svg",
            OutputFormat::Pdf => ".pdf",
            OutputFormat::Png => ".png",
            OutputFormat::Text => "_drillpoints.txt",
            OutputFormat::Json => ".json",
        }
    }
}

/// Knobs shared by all backends.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Resolution of PNG previews
    pub png_pixels_per_mm: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::default(), png_pixels_per_mm: 4.0 }
    }
}

/// Render a variant to the bytes of one output file.
pub fn render(variant: &Variant, format: OutputFormat, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let svg = || svg::scene_to_svg(&Scene::from_variant(variant), &options.theme);

    match format {
        OutputFormat::Svg => Ok(svg().into_bytes()),
        OutputFormat::Pdf => pdf::svg_to_pdf(&svg()),
        OutputFormat::Png => png::svg_to_png(&svg(), options.png_pixels_per_mm),
        OutputFormat::Text => Ok(text::variant_to_text(variant).into_bytes()),
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(variant)?),
    }
}

/// Where [`write_variant`] puts a variant: `<dir>/<prefix>_<Name><suffix>`.
pub fn output_path(dir: &Path, prefix: &str, variant: &Variant, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}{}", variant.file_stem(prefix), format.suffix()))
}

/// Render a variant and write it next to its siblings in `dir`.
///
/// Existing files are overwritten. Returns the path written.
pub fn write_variant(
    dir: &Path,
    prefix: &str,
    variant: &Variant,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    let bytes = render(variant, format, options)?;
    let path = output_path(dir, prefix, variant, format);
    fs::write(&path, bytes).map_err(|source| RenderError::Write { path: path.clone(), source })?;
    tracing::debug!(path = %path.display(), "written");
    Ok(path)
}

/// Resolve an SVG document with system fonts loaded, so labels survive.
pub(crate) fn parse_svg(svg: &str) -> Result<usvg::Tree, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Svg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfiguration, GlassConfiguration};
    use crate::variant::{VariantKind, plan_variants};
    use tempfile::tempdir;

    fn zander_variants() -> Vec<Variant> {
        let board = BoardConfiguration::new(435.0, 380.0, 10.0, 10.0);
        plan_variants(&board, &GlassConfiguration::round(30.0, 44.0))
    }

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::all() {
            assert_eq!(OutputFormat::from_name(format.name()), Some(*format));
        }
        assert_eq!(OutputFormat::from_name("TEXT"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("dxf"), None);
    }

    #[test]
    fn output_paths_follow_naming_scheme() {
        let variants = zander_variants();
        let dir = Path::new("/tmp/out");
        assert_eq!(
            output_path(dir, "zander", &variants[0], OutputFormat::Text),
            Path::new("/tmp/out/zander_Square_drillpoints.txt")
        );
        assert_eq!(
            output_path(dir, "", &variants[3], OutputFormat::Svg),
            Path::new("/tmp/out/HexThree.svg")
        );
    }

    #[test]
    fn writes_every_format() {
        let dir = tempdir().unwrap();
        let variants = zander_variants();
        let options = RenderOptions { png_pixels_per_mm: 1.0, ..RenderOptions::default() };

        for format in OutputFormat::all() {
            let path = write_variant(dir.path(), "t", &variants[1], *format, &options).unwrap();
            assert!(path.exists(), "{} missing", path.display());
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn json_holds_points_and_configuration() {
        let variants = zander_variants();
        let bytes = render(&variants[3], OutputFormat::Json, &RenderOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["kind"], "HexThree");
        assert_eq!(value["board"]["width"], 380.0);
        assert_eq!(value["glass"]["outer_radius"], 44.0);
        assert_eq!(value["points"].as_array().unwrap().len(), variants[3].points.len());
        assert_eq!(variants[3].kind, VariantKind::HexThree);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let variants = zander_variants();
        let result = write_variant(
            Path::new("/nonexistent/dir"),
            "",
            &variants[0],
            OutputFormat::Text,
            &RenderOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::Write { .. })));
    }
}

//! Colors and stroke widths of the drawings.
//!
//! The defaults reproduce the classic jig drawing: grey board with a
//! darker wall margin, translucent dashed glass outlines, black holes and
//! hairline crosshairs.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub board_fill: String,
    pub board_stroke: String,
    pub board_stroke_width: f64,
    pub origin_fill: String,
    pub glass_fill: String,
    pub glass_fill_opacity: f64,
    pub glass_stroke: String,
    pub glass_stroke_width: f64,
    /// SVG dash pattern for the glass outline, empty for a solid line
    pub glass_dasharray: String,
    pub hole_stroke: String,
    pub hole_stroke_width: f64,
    pub marker_stroke: String,
    pub marker_stroke_width: f64,
    pub label_color: String,
    /// Label size in millimeters (3.53mm = 10pt)
    pub label_size: f64,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            board_fill: "#dddddd".to_string(),
            board_stroke: "#000000".to_string(),
            board_stroke_width: 0.3,
            origin_fill: "#000000".to_string(),
            glass_fill: "#bdbdbd".to_string(),
            glass_fill_opacity: 0.29,
            glass_stroke: "#8e8e8e".to_string(),
            glass_stroke_width: 0.5,
            glass_dasharray: "1,2".to_string(),
            hole_stroke: "#000000".to_string(),
            hole_stroke_width: 1.0,
            marker_stroke: "#000000".to_string(),
            marker_stroke_width: 0.35277778,
            label_color: "#000000".to_string(),
            label_size: 3.52777777,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl Theme {
    /// Parse a theme from YAML. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_yaml::from_str(yaml)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check that every color is something an SVG renderer understands.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let colors = [
            ("board_fill", &self.board_fill),
            ("board_stroke", &self.board_stroke),
            ("origin_fill", &self.origin_fill),
            ("glass_fill", &self.glass_fill),
            ("glass_stroke", &self.glass_stroke),
            ("hole_stroke", &self.hole_stroke),
            ("marker_stroke", &self.marker_stroke),
            ("label_color", &self.label_color),
        ];

        for (field, value) in colors {
            if svgtypes::Color::from_str(value).is_err() {
                return Err(ThemeError::InvalidColor { field, value: value.clone() });
            }
        }
        Ok(())
    }
}

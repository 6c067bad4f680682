//! Board and glass descriptions.
//!
//! Both are plain values: copy them, compare them, load them from YAML.
//! Nothing is validated here. Negative or absurd sizes go straight through
//! to the generator, which degrades to empty layouts instead of failing.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// The rectangular panel the holes are drilled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfiguration {
    /// Outer width in millimeters
    pub width: f64,
    /// Outer height in millimeters
    pub height: f64,
    /// Minimum clearance between a drilled hole and the board edge
    pub wall_offset: f64,
    /// Minimum gap between the drilled holes of two neighbours
    pub min_hole_distance: f64,
}

impl BoardConfiguration {
    pub fn new(width: f64, height: f64, wall_offset: f64, min_hole_distance: f64) -> Self {
        Self { width, height, wall_offset, min_hole_distance }
    }

    /// Geometric center of the board.
    pub fn center_point(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// The same board rotated by 90 degrees: width and height swapped.
    pub fn turn_90(&self) -> Self {
        Self { width: self.height, height: self.width, ..*self }
    }
}

/// The glass whose lid sits in a drilled hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlassConfiguration {
    /// Radius of the drilled through-hole
    pub inner_radius: f64,
    /// Radius (circumradius for polygonal glasses) of the widest part
    pub outer_radius: f64,
    /// Number of sides; anything below 3 means round
    #[serde(default)]
    pub sides: u32,
}

impl GlassConfiguration {
    pub fn new(inner_radius: f64, outer_radius: f64, sides: u32) -> Self {
        Self { inner_radius, outer_radius, sides }
    }

    pub fn round(inner_radius: f64, outer_radius: f64) -> Self {
        Self::new(inner_radius, outer_radius, 0)
    }

    pub fn is_round(&self) -> bool {
        self.sides < 3
    }
}

//! Named layouts ready for the output writers.

use std::fmt;

use serde::Serialize;

use crate::config::{BoardConfiguration, GlassConfiguration};
use crate::geometry::Point;
use crate::layout::generate_holes;

/// Which tiling a variant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum VariantKind {
    Square,
    HexOne,
    HexTwo,
    /// Hex one on the board turned by 90 degrees
    HexThree,
    /// Hex two on the board turned by 90 degrees
    HexFour,
}

impl VariantKind {
    /// Get the display name used in file names and listings.
    pub fn name(&self) -> &'static str {
        match self {
            VariantKind::Square => "Square",
            VariantKind::HexOne => "HexOne",
            VariantKind::HexTwo => "HexTwo",
            VariantKind::HexThree => "HexThree",
            VariantKind::HexFour => "HexFour",
        }
    }

    /// Parse a variant name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name().eq_ignore_ascii_case(name))
    }

    pub fn all() -> &'static [VariantKind] {
        &[
            VariantKind::Square,
            VariantKind::HexOne,
            VariantKind::HexTwo,
            VariantKind::HexThree,
            VariantKind::HexFour,
        ]
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tiling together with the board and glass that produced it.
///
/// The board is the one the points were generated on, so turned variants
/// carry the turned board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub kind: VariantKind,
    pub points: Vec<Point>,
    pub board: BoardConfiguration,
    pub glass: GlassConfiguration,
}

impl Variant {
    /// File name without extension: `<prefix>_<Name>`, or just `<Name>`.
    pub fn file_stem(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.kind.name().to_string()
        } else {
            format!("{}_{}", prefix, self.kind.name())
        }
    }

    pub fn hole_count(&self) -> usize {
        self.points.len()
    }
}

/// Run the generator and name its results.
///
/// Square boards give Square, HexOne and HexTwo. Other boards additionally
/// get HexThree and HexFour: the hex tilings of the turned board, with rows
/// running the other way.
pub fn plan_variants(board: &BoardConfiguration, glass: &GlassConfiguration) -> Vec<Variant> {
    let layout = generate_holes(board, glass);
    let variant = |kind: VariantKind, points: Vec<Point>, board: BoardConfiguration| Variant {
        kind,
        points,
        board,
        glass: *glass,
    };

    let mut variants = vec![
        variant(VariantKind::Square, layout.square, *board),
        variant(VariantKind::HexOne, layout.hex_one, *board),
        variant(VariantKind::HexTwo, layout.hex_two, *board),
    ];

    if !board.is_square() {
        let turned = board.turn_90();
        let turned_layout = generate_holes(&turned, glass);
        variants.push(variant(VariantKind::HexThree, turned_layout.hex_one, turned));
        variants.push(variant(VariantKind::HexFour, turned_layout.hex_two, turned));
    }

    for v in &variants {
        tracing::debug!(variant = %v.kind, holes = v.hole_count(), "planned");
    }

    variants
}

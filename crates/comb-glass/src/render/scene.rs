//! Format-independent description of a jig drawing.
//!
//! A scene is a flat list of primitives in board millimeters. Backends only
//! decide how to spell each primitive; what is drawn and where lives here.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::config::{BoardConfiguration, GlassConfiguration};
use crate::geometry::{Point, regular_polygon};
use crate::variant::Variant;

/// Side length of the filled triangle marking the board origin.
pub const ORIGIN_MARK_LENGTH: f64 = 8.0;
/// Length of each crosshair stroke.
pub const CENTER_MARKER_LENGTH: f64 = 10.0;
/// Distance of the coordinate label above the hole center.
pub const COORDINATE_LABEL_OFFSET: f64 = CENTER_MARKER_LENGTH / 1.8;

/// Role of a primitive, resolved to concrete colors by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Board,
    Origin,
    GlassOutline,
    Hole,
    Marker,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Closed rings filled with the even-odd rule
    Rings { rings: Vec<Vec<Point>>, paint: Paint },
    Polygon { points: Vec<Point>, paint: Paint },
    Circle { center: Point, radius: f64, paint: Paint },
    Line { from: Point, to: Point, paint: Paint },
    /// Centered text, baseline at `at`
    Label { at: Point, text: String },
}

/// Everything drawn for one hole.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleGlyph {
    pub center: Point,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub board: Vec<Element>,
    pub holes: Vec<HoleGlyph>,
}

impl Scene {
    /// Build the drawing for a variant: board outline, origin mark, holes.
    pub fn from_variant(variant: &Variant) -> Self {
        let board = &variant.board;
        Scene {
            width: board.width,
            height: board.height,
            title: format!(
                "{}: {} holes on {:.1}mm x {:.1}mm",
                variant.kind,
                variant.hole_count(),
                board.width,
                board.height
            ),
            board: board_elements(board, true),
            holes: variant.points.iter().map(|&p| hole_glyph(p, &variant.glass)).collect(),
        }
    }
}

/// Outer edge and wall margin as one even-odd shape, plus the origin mark.
pub fn board_elements(board: &BoardConfiguration, mark_origin: bool) -> Vec<Element> {
    let rect = |x0: f64, y0: f64, x1: f64, y1: f64| {
        vec![Point::new(x0, y0), Point::new(x1, y0), Point::new(x1, y1), Point::new(x0, y1)]
    };
    let w = board.wall_offset;

    let mut elements = vec![Element::Rings {
        rings: vec![
            rect(0.0, 0.0, board.width, board.height),
            rect(w, w, board.width - w, board.height - w),
        ],
        paint: Paint::Board,
    }];

    if mark_origin {
        elements.push(Element::Polygon {
            points: vec![
                Point::ORIGIN,
                Point::new(ORIGIN_MARK_LENGTH, 0.0),
                Point::new(0.0, ORIGIN_MARK_LENGTH),
            ],
            paint: Paint::Origin,
        });
    }

    elements
}

/// Glass footprint, drilled hole, crosshair and the two labels.
pub fn hole_glyph(center: Point, glass: &GlassConfiguration) -> HoleGlyph {
    let mut elements = Vec::with_capacity(6);

    if glass.is_round() {
        elements.push(Element::Circle { center, radius: glass.outer_radius, paint: Paint::GlassOutline });
    } else {
        elements.push(Element::Polygon {
            points: regular_polygon(center, glass.outer_radius, glass.sides),
            paint: Paint::GlassOutline,
        });
    }

    elements.push(Element::Circle { center, radius: glass.inner_radius, paint: Paint::Hole });
    elements.push(Element::Label {
        at: Point::new(center.x, center.y + glass.inner_radius / 2.0),
        text: format!("Ø {:.1}mm", glass.inner_radius * 2.0),
    });

    // crosshair rotated by 45 degrees
    let d = CENTER_MARKER_LENGTH / 2.0 * FRAC_1_SQRT_2;
    elements.push(Element::Line {
        from: Point::new(center.x - d, center.y - d),
        to: Point::new(center.x + d, center.y + d),
        paint: Paint::Marker,
    });
    elements.push(Element::Line {
        from: Point::new(center.x - d, center.y + d),
        to: Point::new(center.x + d, center.y - d),
        paint: Paint::Marker,
    });
    elements.push(Element::Label {
        at: Point::new(center.x, center.y - COORDINATE_LABEL_OFFSET),
        text: format!("→{:.1}mm ↓{:.1}mm", center.x, center.y),
    });

    HoleGlyph { center, elements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::plan_variants;

    #[test]
    fn board_has_margin_ring_and_origin() {
        let board = BoardConfiguration::new(100.0, 50.0, 10.0, 10.0);
        let elements = board_elements(&board, true);
        assert_eq!(elements.len(), 2);
        match &elements[0] {
            Element::Rings { rings, .. } => {
                assert_eq!(rings[0][2], Point::new(100.0, 50.0));
                assert_eq!(rings[1][0], Point::new(10.0, 10.0));
                assert_eq!(rings[1][2], Point::new(90.0, 40.0));
            }
            other => panic!("expected rings, got {:?}", other),
        }
        assert_eq!(board_elements(&board, false).len(), 1);
    }

    #[test]
    fn round_glass_uses_circle_outline() {
        let glyph = hole_glyph(Point::new(50.0, 60.0), &GlassConfiguration::round(41.0, 45.0));
        assert!(matches!(
            glyph.elements[0],
            Element::Circle { radius, paint: Paint::GlassOutline, .. } if radius == 45.0
        ));
    }

    #[test]
    fn polygonal_glass_uses_polygon_outline() {
        let glyph = hole_glyph(Point::new(50.0, 60.0), &GlassConfiguration::new(41.0, 47.5, 6));
        match &glyph.elements[0] {
            Element::Polygon { points, paint } => {
                assert_eq!(*paint, Paint::GlassOutline);
                assert_eq!(points.len(), 6);
                assert!((points[0].x - 97.5).abs() < 1e-9);
            }
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn labels_show_diameter_and_coordinates() {
        let glyph = hole_glyph(Point::new(61.0, 153.0), &GlassConfiguration::round(41.0, 45.0));
        let labels: Vec<&str> = glyph
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Ø 82.0mm", "→61.0mm ↓153.0mm"]);
    }

    #[test]
    fn scene_has_one_glyph_per_hole() {
        let board = BoardConfiguration::new(490.0, 490.0, 10.0, 10.0);
        let variants = plan_variants(&board, &GlassConfiguration::round(41.0, 45.0));
        let scene = Scene::from_variant(&variants[0]);
        assert_eq!(scene.holes.len(), 25);
        for (glyph, point) in scene.holes.iter().zip(&variants[0].points) {
            assert_eq!(glyph.center, *point);
        }
        assert_eq!(scene.title, "Square: 25 holes on 490.0mm x 490.0mm");
    }
}

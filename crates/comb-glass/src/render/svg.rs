//! SVG backend.
//!
//! One user unit is one millimeter; the document declares its physical
//! size in `mm` so the file prints and cuts at true scale.

use quick_xml::escape::escape;

use super::scene::{Element, Paint, Scene};
use super::theme::Theme;
use crate::geometry::Point;

/// Serialize a scene to a standalone SVG document.
pub fn scene_to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">
  <title>{title}</title>
"#,
        w = scene.width,
        h = scene.height,
        title = escape(scene.title.as_str()),
    );

    svg.push_str("  <g id=\"board\">\n");
    for element in &scene.board {
        push_element(&mut svg, element, theme, "    ");
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g id=\"holes\">\n");
    for hole in &scene.holes {
        svg.push_str("    <g class=\"hole\">\n");
        for element in &hole.elements {
            push_element(&mut svg, element, theme, "      ");
        }
        svg.push_str("    </g>\n");
    }
    svg.push_str("  </g>\n");

    svg.push_str("</svg>\n");
    svg
}

fn push_element(svg: &mut String, element: &Element, theme: &Theme, indent: &str) {
    svg.push_str(indent);
    match element {
        Element::Rings { rings, paint } => {
            let d: Vec<String> = rings.iter().filter(|r| !r.is_empty()).map(|r| ring_path(r)).collect();
            svg.push_str(&format!(
                r#"<path d="{}" style="{}"/>"#,
                d.join(" "),
                escape(style(*paint, theme).as_str())
            ));
        }
        Element::Polygon { points, paint } => {
            svg.push_str(&format!(
                r#"<polygon points="{}" style="{}"/>"#,
                points_attr(points),
                escape(style(*paint, theme).as_str())
            ));
        }
        Element::Circle { center, radius, paint } => {
            svg.push_str(&format!(
                r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" style="{}"/>"#,
                center.x,
                center.y,
                radius,
                escape(style(*paint, theme).as_str())
            ));
        }
        Element::Line { from, to, paint } => {
            svg.push_str(&format!(
                r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" style="{}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                escape(style(*paint, theme).as_str())
            ));
        }
        Element::Label { at, text } => {
            svg.push_str(&format!(
                r#"<text x="{:.3}" y="{:.3}" style="{}">{}</text>"#,
                at.x,
                at.y,
                escape(label_style(theme).as_str()),
                escape(text.as_str())
            ));
        }
    }
    svg.push('\n');
}

fn ring_path(ring: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in ring.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        d.push_str(&format!("{} {:.3} {:.3} ", cmd, p.x, p.y));
    }
    d.push('Z');
    d
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline CSS for a primitive. Theme strings are free text, so callers
/// escape the result before placing it in an attribute.
fn style(paint: Paint, theme: &Theme) -> String {
    match paint {
        Paint::Board => format!(
            "fill:{};fill-rule:evenodd;stroke:{};stroke-width:{}",
            theme.board_fill, theme.board_stroke, theme.board_stroke_width
        ),
        Paint::Origin => format!("fill:{};stroke:none", theme.origin_fill),
        Paint::GlassOutline => {
            let mut s = format!(
                "fill:{};fill-opacity:{};stroke:{};stroke-width:{}",
                theme.glass_fill, theme.glass_fill_opacity, theme.glass_stroke, theme.glass_stroke_width
            );
            if !theme.glass_dasharray.is_empty() {
                s.push_str(&format!(";stroke-dasharray:{}", theme.glass_dasharray));
            }
            s
        }
        Paint::Hole => format!("fill:none;stroke:{};stroke-width:{}", theme.hole_stroke, theme.hole_stroke_width),
        Paint::Marker => format!(
            "fill:none;stroke:{};stroke-width:{};stroke-linecap:round",
            theme.marker_stroke, theme.marker_stroke_width
        ),
    }
}

fn label_style(theme: &Theme) -> String {
    format!(
        "font-family:{};font-size:{}px;text-anchor:middle;fill:{}",
        theme.font_family, theme.label_size, theme.label_color
    )
}

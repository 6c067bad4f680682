//! Plain-text drill point listing.
//!
//! Two comment lines with the board and glass dimensions, an empty line,
//! then one `x → y ↓` line per hole in generator order. Cutting machines
//! and people with a tape measure both read this.

use crate::variant::Variant;

pub fn variant_to_text(variant: &Variant) -> String {
    let mut text = format!(
        "// Board dimensions: {:.1}mm x {:.1}mm\n",
        variant.board.width, variant.board.height
    );
    text.push_str(&format!(
        "// Glass dimensions: inner Ø: {:.1}mm ; outer Ø: {:.1}mm\n",
        variant.glass.inner_radius * 2.0,
        variant.glass.outer_radius * 2.0
    ));
    text.push('\n');

    for p in &variant.points {
        text.push_str(&format!("{:6.1} → {:6.1} ↓\n", p.x, p.y));
    }

    text
}

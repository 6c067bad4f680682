//! Hole layout generator.
//!
//! Given a board and a glass, places hole centers on a regular grid so
//! that no two glasses touch and no hole comes too close to the board edge.
//! Three tilings are produced:
//!
//! - **Square**: rows and columns both `glass_offset` apart
//! - **Hex one / hex two**: rows `glass_offset * sin(60°)` apart, every
//!   other row shifted by half a pitch. The two variants differ in which
//!   phase the first row starts with.
//!
//! Every tiling is then moved so its centroid sits on the board center.
//!
//! ## Floating point
//!
//! Grid coordinates are accumulated (`x += pitch`) and compared with `<=`
//! against the far edge of the usable region. The hole count at the
//! boundary depends on the exact rounding of that sum.

use std::f64::consts::PI;

use serde::Serialize;

use crate::config::{BoardConfiguration, GlassConfiguration};
use crate::geometry::{Point, centroid, mid_point, move_points};

/// Distances derived from a board/glass pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spacing {
    /// Minimum distance from the board edge to any hole center
    pub edge_offset: f64,
    /// Minimum center-to-center distance between neighbouring holes
    pub glass_offset: f64,
}

impl Spacing {
    pub fn new(board: &BoardConfiguration, glass: &GlassConfiguration) -> Self {
        // whichever is stricter: drilled hole clearance or the glass body
        let edge_offset = (board.wall_offset + glass.inner_radius).max(glass.outer_radius);
        let glass_offset =
            (2.0 * glass.inner_radius + board.min_hole_distance).max(2.0 * glass.outer_radius);
        Self { edge_offset, glass_offset }
    }

    /// Corners of the box every hole center must stay inside.
    ///
    /// The box may be inverted (lower right above or left of upper left)
    /// when the board is too small for a single hole.
    pub fn usable_region(&self, board: &BoardConfiguration) -> (Point, Point) {
        (
            Point::new(self.edge_offset, self.edge_offset),
            Point::new(board.width - self.edge_offset, board.height - self.edge_offset),
        )
    }

    /// Vertical distance between two rows of the hexagonal tilings.
    pub fn row_pitch(&self) -> f64 {
        self.glass_offset * (PI / 3.0).sin()
    }

    /// Stepped loops only terminate for a positive, finite pitch.
    fn is_steppable(&self) -> bool {
        self.glass_offset.is_finite() && self.glass_offset > 0.0
    }
}

/// The three tilings for one board, already centered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub square: Vec<Point>,
    pub hex_one: Vec<Point>,
    pub hex_two: Vec<Point>,
}

/// Generate all three centered tilings for a board/glass pair.
///
/// Never fails: a board too small for one hole (or a nonsensical glass)
/// gives empty point lists.
pub fn generate_holes(board: &BoardConfiguration, glass: &GlassConfiguration) -> Layout {
    let spacing = Spacing::new(board, glass);
    tracing::debug!(
        edge_offset = spacing.edge_offset,
        glass_offset = spacing.glass_offset,
        "spacing"
    );

    if !spacing.is_steppable() {
        tracing::warn!(glass_offset = spacing.glass_offset, "glass offset is not positive, no holes placed");
        return Layout::default();
    }

    let (upper_left, lower_right) = spacing.usable_region(board);
    if !is_finite(upper_left) || !is_finite(lower_right) {
        tracing::warn!(
            width = board.width,
            height = board.height,
            edge_offset = spacing.edge_offset,
            "board dimensions are not finite, no holes placed"
        );
        return Layout::default();
    }
    if lower_right.x < upper_left.x || lower_right.y < upper_left.y {
        tracing::warn!(
            width = board.width,
            height = board.height,
            edge_offset = spacing.edge_offset,
            "board too small for a single hole"
        );
        return Layout::default();
    }

    let square = square_tiling(upper_left, lower_right, spacing.glass_offset);
    let (hex_one, hex_two) = hex_tilings(upper_left, lower_right, &spacing);

    tracing::debug!(
        square = square.len(),
        hex_one = hex_one.len(),
        hex_two = hex_two.len(),
        "raw hole counts"
    );

    Layout {
        square: center_all_holes(square, board),
        hex_one: center_all_holes(hex_one, board),
        hex_two: center_all_holes(hex_two, board),
    }
}

/// Shift a point set so its centroid lands on the board center.
///
/// Relative spacing and order are untouched. An empty set is returned as is.
pub fn center_all_holes(points: Vec<Point>, board: &BoardConfiguration) -> Vec<Point> {
    let Some(holes_mid) = centroid(&points) else {
        return points;
    };
    let board_mid = mid_point(Point::ORIGIN, Point::new(board.width, board.height));

    move_points(&points, board_mid - holes_mid)
}

/// Row-major grid: outer loop over y, inner loop over x.
fn square_tiling(upper_left: Point, lower_right: Point, pitch: f64) -> Vec<Point> {
    let mut holes = Vec::new();

    let mut y = upper_left.y;
    while y <= lower_right.y {
        push_row(&mut holes, upper_left.x, lower_right.x, y, pitch);
        y += pitch;
    }

    holes
}

/// Both hexagonal tilings in one pass over the rows.
///
/// Each row is walked twice, once per x phase (`0` and `pitch / 2`).
/// Hex one takes the row produced by "offset one", hex two the row from
/// "offset two", and the two offsets trade places on every row.
fn hex_tilings(upper_left: Point, lower_right: Point, spacing: &Spacing) -> (Vec<Point>, Vec<Point>) {
    let pitch = spacing.glass_offset;
    let row_pitch = spacing.row_pitch();
    let mut hex_one = Vec::new();
    let mut hex_two = Vec::new();

    let mut odd = true;
    let mut y = upper_left.y;
    while y <= lower_right.y {
        let (offset_one, offset_two) = if odd { (0.0, pitch / 2.0) } else { (pitch / 2.0, 0.0) };

        push_row(&mut hex_one, upper_left.x + offset_one, lower_right.x, y, pitch);
        push_row(&mut hex_two, upper_left.x + offset_two, lower_right.x, y, pitch);

        odd = !odd;
        y += row_pitch;
    }

    (hex_one, hex_two)
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn push_row(holes: &mut Vec<Point>, x_start: f64, x_end: f64, y: f64, pitch: f64) {
    let mut x = x_start;
    while x <= x_end {
        holes.push(Point::new(x, y));
        x += pitch;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    fn dadant_490() -> BoardConfiguration {
        BoardConfiguration::new(490.0, 490.0, 10.0, 10.0)
    }

    fn round_500() -> GlassConfiguration {
        GlassConfiguration::round(41.0, 45.0)
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn min_pair_distance(points: &[Point]) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let d = a.distance(*b);
                best = Some(best.map_or(d, |m| m.min(d)));
            }
        }
        best
    }

    #[test]
    fn spacing_takes_the_stricter_constraint() {
        let spacing = Spacing::new(&dadant_490(), &round_500());
        assert_eq!(spacing.edge_offset, 51.0);
        assert_eq!(spacing.glass_offset, 92.0);

        // A wide glass on a narrow hole: the outer radius wins both times.
        let wide = GlassConfiguration::round(20.0, 60.0);
        let spacing = Spacing::new(&dadant_490(), &wide);
        assert_eq!(spacing.edge_offset, 60.0);
        assert_eq!(spacing.glass_offset, 120.0);
    }

    #[test]
    fn square_tiling_on_dadant_490() {
        let layout = generate_holes(&dadant_490(), &round_500());
        assert_eq!(layout.square.len(), 25);

        // Raw grid spans 51..419 and is shifted by +10 on both axes.
        assert_close(layout.square[0], Point::new(61.0, 61.0));
        assert_close(layout.square[24], Point::new(429.0, 429.0));
        assert_close(centroid(&layout.square).unwrap(), Point::new(245.0, 245.0));
    }

    #[test]
    fn square_tiling_is_row_major() {
        let layout = generate_holes(&dadant_490(), &round_500());
        assert_close(layout.square[1], Point::new(153.0, 61.0));
        assert_close(layout.square[5], Point::new(61.0, 153.0));
        for pair in layout.square.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.y < b.y - EPS || ((a.y - b.y).abs() < EPS && a.x < b.x));
        }
    }

    #[test]
    fn hex_tilings_on_dadant_490() {
        let layout = generate_holes(&dadant_490(), &round_500());
        // Five rows; hex one starts with a full row of five, hex two with four.
        assert_eq!(layout.hex_one.len(), 23);
        assert_eq!(layout.hex_two.len(), 22);

        let center = Point::new(245.0, 245.0);
        assert_close(centroid(&layout.hex_one).unwrap(), center);
        assert_close(centroid(&layout.hex_two).unwrap(), center);
    }

    #[test]
    fn hex_rows_alternate_phase() {
        let board = dadant_490();
        let layout = generate_holes(&board, &round_500());
        let first_row_y = layout.hex_one[0].y;
        let second_row: Vec<_> =
            layout.hex_one.iter().filter(|p| p.y > first_row_y + EPS).collect();
        // Row two of hex one is shifted by half a pitch against row one.
        assert!((second_row[0].x - layout.hex_one[0].x - 46.0).abs() < EPS);
        assert!((second_row[0].y - first_row_y - Spacing::new(&board, &round_500()).row_pitch()).abs() < EPS);
    }

    #[test]
    fn degenerate_board_gives_empty_layouts() {
        let tiny = BoardConfiguration::new(80.0, 400.0, 10.0, 10.0);
        let layout = generate_holes(&tiny, &round_500());
        assert!(layout.square.is_empty());
        assert!(layout.hex_one.is_empty());
        assert!(layout.hex_two.is_empty());
    }

    #[test]
    fn zero_sized_glass_does_not_hang() {
        let board = BoardConfiguration::new(100.0, 100.0, 0.0, 0.0);
        let layout = generate_holes(&board, &GlassConfiguration::round(0.0, 0.0));
        assert_eq!(layout, Layout::default());

        let negative = GlassConfiguration::round(-10.0, -5.0);
        assert_eq!(generate_holes(&board, &negative), Layout::default());
    }

    #[test]
    fn unbounded_board_does_not_hang() {
        let glass = round_500();
        let wide = BoardConfiguration::new(f64::INFINITY, 500.0, 10.0, 10.0);
        assert_eq!(generate_holes(&wide, &glass), Layout::default());

        let nan_high = BoardConfiguration::new(500.0, f64::NAN, 10.0, 10.0);
        assert_eq!(generate_holes(&nan_high, &glass), Layout::default());
    }

    #[test]
    fn single_hole_sits_in_the_middle() {
        // Usable region collapses to exactly one point.
        let board = BoardConfiguration::new(102.0, 102.0, 10.0, 10.0);
        let layout = generate_holes(&board, &round_500());
        assert_eq!(layout.square.len(), 1);
        assert_close(layout.square[0], Point::new(51.0, 51.0));
    }

    #[test]
    fn centering_empty_set_is_a_no_op() {
        assert!(center_all_holes(Vec::new(), &dadant_490()).is_empty());
    }

    #[test]
    fn centering_keeps_relative_spacing() {
        let raw = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 20.0)];
        let centered = center_all_holes(raw.clone(), &BoardConfiguration::new(100.0, 60.0, 0.0, 0.0));
        for (a, b) in raw.iter().zip(&centered) {
            let shift = *b - *a;
            assert_close(shift, centered[0] - raw[0]);
        }
        assert_close(centroid(&centered).unwrap(), Point::new(50.0, 30.0));
    }

    #[test]
    fn turned_board_square_tiling_is_transposed() {
        let board = BoardConfiguration::new(435.0, 380.0, 10.0, 10.0);
        let glass = GlassConfiguration::round(30.0, 44.0);
        let straight = generate_holes(&board, &glass);
        let turned = generate_holes(&board.turn_90(), &glass);

        assert_eq!(straight.square.len(), turned.square.len());
        for p in &turned.square {
            let t = p.transposed();
            assert!(straight.square.iter().any(|q| q.distance(t) < EPS), "{:?} missing", t);
        }
    }

    fn board_strategy() -> impl Strategy<Value = BoardConfiguration> {
        (0.0..800.0f64, 0.0..800.0f64, 0.0..30.0f64, 0.0..20.0f64)
            .prop_map(|(w, h, wall, dist)| BoardConfiguration::new(w, h, wall, dist))
    }

    fn glass_strategy() -> impl Strategy<Value = GlassConfiguration> {
        (20.0..60.0f64, 0.0..30.0f64, 0u32..10)
            .prop_map(|(inner, extra, sides)| GlassConfiguration::new(inner, inner + extra, sides))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn centered_sets_share_the_board_center(board in board_strategy(), glass in glass_strategy()) {
            let layout = generate_holes(&board, &glass);
            let center = mid_point(Point::ORIGIN, Point::new(board.width, board.height));
            for set in [&layout.square, &layout.hex_one, &layout.hex_two] {
                if let Some(c) = centroid(set) {
                    prop_assert!((c.x - center.x).abs() < EPS && (c.y - center.y).abs() < EPS);
                }
            }
        }

        #[test]
        fn holes_keep_their_distance(board in board_strategy(), glass in glass_strategy()) {
            let layout = generate_holes(&board, &glass);
            let glass_offset = Spacing::new(&board, &glass).glass_offset;
            for set in [&layout.square, &layout.hex_one, &layout.hex_two] {
                if let Some(d) = min_pair_distance(set) {
                    prop_assert!(d >= glass_offset - EPS, "{} < {}", d, glass_offset);
                }
            }
        }

        #[test]
        fn generation_is_idempotent(board in board_strategy(), glass in glass_strategy()) {
            prop_assert_eq!(generate_holes(&board, &glass), generate_holes(&board, &glass));
        }

        #[test]
        fn square_count_matches_region(board in board_strategy(), glass in glass_strategy()) {
            let spacing = Spacing::new(&board, &glass);
            let (ul, lr) = spacing.usable_region(&board);
            let layout = generate_holes(&board, &glass);

            if lr.x < ul.x || lr.y < ul.y {
                prop_assert!(layout.square.is_empty());
                prop_assert!(layout.hex_one.is_empty());
                prop_assert!(layout.hex_two.is_empty());
            } else {
                let cols = ((lr.x - ul.x) / spacing.glass_offset).floor() as i64 + 1;
                let rows = ((lr.y - ul.y) / spacing.glass_offset).floor() as i64 + 1;
                let first_y = layout.square[0].y;
                let got_cols = layout.square.iter().filter(|p| (p.y - first_y).abs() < EPS).count() as i64;
                let got_rows = layout.square.len() as i64 / got_cols;
                prop_assert!((got_cols - cols).abs() <= 1);
                prop_assert!((got_rows - rows).abs() <= 1);
                prop_assert_eq!(got_cols * got_rows, layout.square.len() as i64);
            }
        }
    }
}

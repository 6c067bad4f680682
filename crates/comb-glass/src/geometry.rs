//! Core geometry types for comb-glass.
//!
//! All coordinates are millimeters on the board plane. The origin is the
//! board's upper-left corner, x grows to the right and y grows downwards.
//!
//! ## Rust Lesson #3: Operator Overloading
//!
//! Implementing `std::ops::Add` for a type lets you write `a + b` instead
//! of `a.plus(b)`. The trait is just a method the compiler calls for you,
//! so there is no runtime cost over a hand-written function.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point (or vector) with x,y coordinates in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The board origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Swap x and y. Used to map layouts between a board and its turned twin.
    #[inline]
    pub fn transposed(&self) -> Point {
        Point::new(self.y, self.x)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Arithmetic mean of a set of points.
///
/// ## Rust Lesson #6: Option<T>
///
/// The mean of nothing is undefined. Instead of dividing by zero we
/// return `None` and let the caller decide what an empty set means.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let sum = points.iter().fold(Point::ORIGIN, |acc, &p| acc + p);
    Some(sum * (1.0 / points.len() as f64))
}

/// Smallest axis-aligned box enclosing all points, as `(min, max)` corners.
///
/// An empty slice yields `(0,0)-(0,0)`.
pub fn bounding_box(points: &[Point]) -> (Point, Point) {
    let Some(first) = points.first() else {
        return (Point::ORIGIN, Point::ORIGIN);
    };

    points.iter().fold((*first, *first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    })
}

/// Half of the span between `a` and `b` on each axis.
///
/// This is measured from the origin, not from `a`: only when one corner is
/// `(0,0)` does it coincide with the midpoint of the segment. Board centering
/// always calls it as `mid_point(ORIGIN, (width, height))`.
pub fn mid_point(a: Point, b: Point) -> Point {
    let (x_min, x_max) = if a.x > b.x { (b.x, a.x) } else { (a.x, b.x) };
    let (y_min, y_max) = if a.y > b.y { (b.y, a.y) } else { (a.y, b.y) };

    Point::new((x_max - x_min) / 2.0, (y_max - y_min) / 2.0)
}

/// Translate every point by `offset`, keeping the order.
pub fn move_points(points: &[Point], offset: Point) -> Vec<Point> {
    points.iter().map(|&p| p + offset).collect()
}

/// Vertices of a regular polygon around `center`, first vertex at angle 0.
pub fn regular_polygon(center: Point, radius: f64, sides: u32) -> Vec<Point> {
    let step = std::f64::consts::TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = i as f64 * step;
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

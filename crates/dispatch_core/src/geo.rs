//! Plane geometry: Euclidean distance on 2D points, rounded for dispatch.

use serde::{Deserialize, Serialize};

/// A location on the dispatch plane. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Round a value to exactly two fraction digits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Euclidean distance between two points, rounded to two decimals.
///
/// The rounded value feeds both the matching sort key and the fare distance
/// term, so two candidates at different raw distances can tie after rounding.
pub fn distance(a: Point, b: Point) -> f64 {
    round2(((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt())
}

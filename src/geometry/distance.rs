use geo::{Distance, Euclidean, Point};

use crate::domain::Position;

/// Straight-line distance between two positions, in map units
pub fn distance(start: Position, end: Position) -> f64 {
    Euclidean::distance(Point::from(start), Point::from(end))
}

/// Format a distance with its unit, e.g. "150 yards"
pub fn format_distance(distance: i32, unit: &str) -> String {
    format!("{} {}", distance, unit)
}

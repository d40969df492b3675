use serde::{Deserialize, Serialize};

/// A point on the course plan.
///
/// Coordinates are map-percentage units: `x` runs across the map width and
/// `y` down its height, conventionally both in `[0, 100]`. No bounds are
/// enforced here; callers normalise to their map before building positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Position> for geo::Point<f64> {
    fn from(p: Position) -> Self {
        geo::Point::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_json_shape() {
        let p: Position = serde_json::from_str(r#"{"x":10,"y":85}"#).unwrap();
        assert_eq!(p, Position::new(10.0, 85.0));
    }
}

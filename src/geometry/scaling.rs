use crate::error::{CaddieError, Result};

/// Conversion factor between map units and yards
///
/// A `Scale` of 3.0 means one map unit on the course plan covers three
/// yards on the ground. Zero and non-finite factors are rejected at
/// construction so the conversions below never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    yards_per_unit: f64,
}

impl Scale {
    /// Identity scale: map units are already yards
    pub const UNIT: Scale = Scale { yards_per_unit: 1.0 };

    pub fn new(yards_per_unit: f64) -> Result<Self> {
        if !yards_per_unit.is_finite() || yards_per_unit == 0.0 {
            return Err(CaddieError::InvalidScale(yards_per_unit));
        }
        Ok(Self { yards_per_unit })
    }

    /// Get the scale factor (yards per map unit)
    pub fn yards_per_unit(&self) -> f64 {
        self.yards_per_unit
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Round to the nearest integer, halves towards positive infinity
///
/// `f64::round` sends halves away from zero, which would make -2.5 round to
/// -3. Yardages here round -2.5 to -2 and 2.5 to 3.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert a map distance to whole yards
///
/// # Arguments
/// * `native_distance` - Distance in map units
/// * `scale` - Yards per map unit
pub fn to_yards(native_distance: f64, scale: Scale) -> i32 {
    round_half_up(native_distance * scale.yards_per_unit) as i32
}

/// Convert yards to map units
///
/// Inverse of [`to_yards`] up to rounding.
pub fn to_native(yards: f64, scale: Scale) -> f64 {
    yards / scale.yards_per_unit
}

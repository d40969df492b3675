//! Plays-like distance model
//!
//! Effective distance is the card distance plus linear terms:
//! - elevation: 2 yards per percent of grade, uphill positive
//! - wind: 1 yard per mph, headwind adds and tailwind subtracts
//! - crosswind moves the aim point but not the distance
//!
//! The terms are additive, so the order they are applied in does not
//! matter. Lie is a separate multiplicative step on top.

use clap::ValueEnum;
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::{CaddieError, Result};
use crate::geometry::round_half_up;

/// Yards of effective distance per percent of elevation grade
pub const YARDS_PER_ELEVATION_PERCENT: f64 = 2.0;

/// Wind relative to the line of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum WindDirection {
    #[default]
    Calm,
    Headwind,
    Tailwind,
    /// Blowing from the player's left towards the right
    LeftToRight,
    /// Blowing from the player's right towards the left
    RightToLeft,
}

impl WindDirection {
    /// Classify a free-text wind label.
    ///
    /// Matching is case-insensitive on substrings: anything mentioning
    /// "head" is a headwind, then "tail" a tailwind. Otherwise whichever of
    /// "left"/"right" appears first names the side the wind comes from.
    /// Everything else ("none", "", "gusty") is calm.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();

        if label.contains("head") {
            return WindDirection::Headwind;
        }
        if label.contains("tail") {
            return WindDirection::Tailwind;
        }

        match (label.find("left"), label.find("right")) {
            (Some(left), Some(right)) if right < left => WindDirection::RightToLeft,
            (Some(_), _) => WindDirection::LeftToRight,
            (None, Some(_)) => WindDirection::RightToLeft,
            (None, None) => WindDirection::Calm,
        }
    }

    /// Yards added to the shot per mph of wind
    fn yards_per_mph(&self) -> f64 {
        match self {
            WindDirection::Headwind => 1.0,
            WindDirection::Tailwind => -1.0,
            _ => 0.0,
        }
    }
}

impl FromStr for WindDirection {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for WindDirection {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WindDirection::Calm => "none",
            WindDirection::Headwind => "headwind",
            WindDirection::Tailwind => "tailwind",
            WindDirection::LeftToRight => "left to right",
            WindDirection::RightToLeft => "right to left",
        };
        f.write_str(label)
    }
}

/// Effective ("plays like") distance in whole yards
///
/// # Arguments
/// * `actual_yards` - Measured distance to the target
/// * `elevation_percent` - Grade to the target, uphill positive
/// * `wind_mph` - Wind speed
/// * `wind` - Wind direction relative to the line of play
///
/// The result is not clamped; see [`NegativeDistancePolicy`].
pub fn adjusted_distance(
    actual_yards: f64,
    elevation_percent: f64,
    wind_mph: f64,
    wind: WindDirection,
) -> i32 {
    let adjusted = actual_yards
        + elevation_percent * YARDS_PER_ELEVATION_PERCENT
        + wind_mph * wind.yards_per_mph();
    round_half_up(adjusted) as i32
}

/// Surface the ball is resting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Lie {
    #[default]
    Fairway,
    Rough,
    ThickRough,
    Sand,
    Tee,
    Hardpan,
    PineStraw,
    UphillLie,
    DownhillLie,
}

impl Lie {
    /// Parse a lie label; unknown labels are treated as fairway
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "rough" => Lie::Rough,
            "thick_rough" => Lie::ThickRough,
            "sand" | "bunker" => Lie::Sand,
            "tee" => Lie::Tee,
            "hardpan" => Lie::Hardpan,
            "pine_straw" => Lie::PineStraw,
            "uphill" | "uphill_lie" => Lie::UphillLie,
            "downhill" | "downhill_lie" => Lie::DownhillLie,
            _ => Lie::Fairway,
        }
    }

    /// Fraction of a normal strike's carry this lie allows
    pub fn multiplier(&self) -> f64 {
        match self {
            Lie::Fairway => 1.0,
            Lie::Rough => 0.85,
            Lie::ThickRough => 0.70,
            Lie::Sand => 0.75,
            Lie::Tee => 1.05,
            Lie::Hardpan => 0.95,
            Lie::PineStraw => 0.90,
            Lie::UphillLie => 0.90,
            Lie::DownhillLie => 1.10,
        }
    }
}

impl From<String> for Lie {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl fmt::Display for Lie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Lie::Fairway => "fairway",
            Lie::Rough => "rough",
            Lie::ThickRough => "thick rough",
            Lie::Sand => "sand",
            Lie::Tee => "tee",
            Lie::Hardpan => "hardpan",
            Lie::PineStraw => "pine straw",
            Lie::UphillLie => "uphill lie",
            Lie::DownhillLie => "downhill lie",
        };
        f.write_str(label)
    }
}

/// Scale a yardage for the lie: a lie that costs carry makes the shot
/// play longer
pub fn lie_adjusted_distance(yards: i32, lie: Lie) -> i32 {
    if lie == Lie::Fairway {
        return yards;
    }
    round_half_up(yards as f64 / lie.multiplier()) as i32
}

/// What to do when adjustments push the effective distance below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NegativeDistancePolicy {
    /// Pass the negative value through unchanged
    #[default]
    Allow,
    /// Treat it as zero yards
    Clamp,
    /// Fail with [`CaddieError::NegativeDistance`]
    Reject,
}

impl NegativeDistancePolicy {
    pub fn apply(&self, yards: i32) -> Result<i32> {
        if yards >= 0 {
            return Ok(yards);
        }
        match self {
            NegativeDistancePolicy::Allow => Ok(yards),
            NegativeDistancePolicy::Clamp => Ok(0),
            NegativeDistancePolicy::Reject => Err(CaddieError::NegativeDistance(yards)),
        }
    }
}

/// Playing conditions for one shot
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Conditions {
    #[serde(default, rename = "wind_speed")]
    pub wind_mph: f64,
    #[serde(default, rename = "wind_direction")]
    pub wind: WindDirection,
    #[serde(default, rename = "elevation")]
    pub elevation_percent: f64,
    #[serde(default)]
    pub lie: Lie,
}

impl Conditions {
    pub fn with_wind(mut self, mph: f64, direction: WindDirection) -> Self {
        self.wind_mph = mph;
        self.wind = direction;
        self
    }

    pub fn with_elevation(mut self, percent: f64) -> Self {
        self.elevation_percent = percent;
        self
    }

    pub fn with_lie(mut self, lie: Lie) -> Self {
        self.lie = lie;
        self
    }

    /// Elevation and wind model, then the lie
    pub fn plays_like(&self, actual_yards: f64) -> i32 {
        let adjusted = adjusted_distance(
            actual_yards,
            self.elevation_percent,
            self.wind_mph,
            self.wind,
        );
        lie_adjusted_distance(adjusted, self.lie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_adjustment() {
        assert_eq!(adjusted_distance(100.0, 0.0, 0.0, WindDirection::Calm), 100);
    }

    #[test]
    fn test_uphill_plays_longer() {
        assert_eq!(adjusted_distance(100.0, 10.0, 0.0, WindDirection::Calm), 120);
        assert_eq!(adjusted_distance(100.0, -5.0, 0.0, WindDirection::Calm), 90);
    }

    #[test]
    fn test_head_and_tail_wind() {
        let head = WindDirection::from_label("headwind");
        let tail = WindDirection::from_label("tailwind");
        assert_eq!(adjusted_distance(150.0, 0.0, 10.0, head), 160);
        assert_eq!(adjusted_distance(150.0, 0.0, 10.0, tail), 140);
    }

    #[test]
    fn test_crosswind_does_not_change_distance() {
        for label in ["left to right", "right to left", "none", "gusty"] {
            let wind = WindDirection::from_label(label);
            assert_eq!(adjusted_distance(150.0, 0.0, 20.0, wind), 150, "{label}");
        }
    }

    #[test]
    fn test_terms_are_additive() {
        let head = WindDirection::Headwind;
        assert_eq!(adjusted_distance(150.0, 5.0, 8.0, head), 150 + 10 + 8);
        assert_eq!(adjusted_distance(150.4, 0.0, 0.0, WindDirection::Calm), 150);
        assert_eq!(adjusted_distance(150.5, 0.0, 0.0, WindDirection::Calm), 151);
    }

    #[test]
    fn test_negative_result_is_not_clamped() {
        let tail = WindDirection::Tailwind;
        assert_eq!(adjusted_distance(5.0, -10.0, 10.0, tail), -25);
    }

    #[test]
    fn test_wind_label_parsing() {
        assert_eq!(WindDirection::from_label("HEADWIND"), WindDirection::Headwind);
        assert_eq!(WindDirection::from_label("Into the head"), WindDirection::Headwind);
        assert_eq!(WindDirection::from_label("tail"), WindDirection::Tailwind);
        assert_eq!(
            WindDirection::from_label("left to right"),
            WindDirection::LeftToRight
        );
        assert_eq!(
            WindDirection::from_label("right to left"),
            WindDirection::RightToLeft
        );
        assert_eq!(
            WindDirection::from_label("from the right"),
            WindDirection::RightToLeft
        );
        assert_eq!(WindDirection::from_label("none"), WindDirection::Calm);
        assert_eq!(WindDirection::from_label(""), WindDirection::Calm);
        assert_eq!("tailwind".parse::<WindDirection>(), Ok(WindDirection::Tailwind));
    }

    #[test]
    fn test_wind_display_parses_back() {
        for wind in [
            WindDirection::Calm,
            WindDirection::Headwind,
            WindDirection::Tailwind,
            WindDirection::LeftToRight,
            WindDirection::RightToLeft,
        ] {
            assert_eq!(WindDirection::from_label(&wind.to_string()), wind);
        }
    }

    #[test]
    fn test_lie_parsing() {
        assert_eq!(Lie::from_label("thick rough"), Lie::ThickRough);
        assert_eq!(Lie::from_label("Pine-Straw"), Lie::PineStraw);
        assert_eq!(Lie::from_label("downhill_lie"), Lie::DownhillLie);
        assert_eq!(Lie::from_label("bunker"), Lie::Sand);
        assert_eq!(Lie::from_label("cart path"), Lie::Fairway);
    }

    #[test]
    fn test_lie_adjustment() {
        assert_eq!(lie_adjusted_distance(150, Lie::Fairway), 150);
        // 150 / 0.75
        assert_eq!(lie_adjusted_distance(150, Lie::Sand), 200);
        // 170 / 0.85
        assert_eq!(lie_adjusted_distance(170, Lie::Rough), 200);
        // 210 / 1.05
        assert_eq!(lie_adjusted_distance(210, Lie::Tee), 200);
    }

    #[test]
    fn test_plays_like_combines_model_and_lie() {
        let conditions = Conditions::default()
            .with_wind(10.0, WindDirection::Headwind)
            .with_elevation(5.0)
            .with_lie(Lie::Rough);
        // (150 + 10 + 10) / 0.85 = 200
        assert_eq!(conditions.plays_like(150.0), 200);
        assert_eq!(Conditions::default().plays_like(137.0), 137);
    }

    #[test]
    fn test_negative_distance_policy() {
        assert_eq!(NegativeDistancePolicy::Allow.apply(-12).unwrap(), -12);
        assert_eq!(NegativeDistancePolicy::Clamp.apply(-12).unwrap(), 0);
        assert!(matches!(
            NegativeDistancePolicy::Reject.apply(-12),
            Err(CaddieError::NegativeDistance(-12))
        ));
        for policy in [
            NegativeDistancePolicy::Allow,
            NegativeDistancePolicy::Clamp,
            NegativeDistancePolicy::Reject,
        ] {
            assert_eq!(policy.apply(0).unwrap(), 0);
            assert_eq!(policy.apply(145).unwrap(), 145);
        }
    }

    #[test]
    fn test_conditions_from_toml() {
        let conditions: Conditions = toml::from_str(
            r#"
            wind_speed = 12.0
            wind_direction = "Left to Right"
            lie = "thick rough"
            "#,
        )
        .unwrap();
        assert_eq!(conditions.wind_mph, 12.0);
        assert_eq!(conditions.wind, WindDirection::LeftToRight);
        assert_eq!(conditions.elevation_percent, 0.0);
        assert_eq!(conditions.lie, Lie::ThickRough);
    }
}

use super::WindDirection;

/// Hazards the strategy text knows how to talk about
///
/// Declaration order is the order the clauses appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardCue {
    Water,
    Bunker,
    OutOfBounds,
}

impl HazardCue {
    /// Parse a strategy keyword: "water", "bunker" or "ob"
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "water" => Some(HazardCue::Water),
            "bunker" => Some(HazardCue::Bunker),
            "ob" => Some(HazardCue::OutOfBounds),
            _ => None,
        }
    }

    /// Map a course hazard's descriptive type onto a cue
    pub fn from_hazard_type(kind: &str) -> Option<Self> {
        match kind.to_lowercase().as_str() {
            "water" => Some(HazardCue::Water),
            "sand" | "bunker" => Some(HazardCue::Bunker),
            "ob" | "out_of_bounds" | "out of bounds" => Some(HazardCue::OutOfBounds),
            _ => None,
        }
    }

    fn caution(&self) -> &'static str {
        match self {
            HazardCue::Water => "Avoid the water hazard by aiming away from it.",
            HazardCue::Bunker => "Be cautious of the bunkers protecting the green.",
            HazardCue::OutOfBounds => "Play conservatively to avoid the out of bounds area.",
        }
    }
}

/// Wind speed above which the advice names a specific aim or club change
pub const STRONG_WIND_MPH: f64 = 10.0;
/// Wind speed above which the wind is mentioned at all
pub const MILD_WIND_MPH: f64 = 5.0;

fn distance_clause(distance_yards: f64) -> &'static str {
    if distance_yards > 200.0 {
        "Focus on accuracy rather than distance. Take a smooth swing."
    } else if distance_yards > 150.0 {
        "Aim directly at the pin with a controlled swing."
    } else if distance_yards > 100.0 {
        "Attack the pin. This is a scoring opportunity."
    } else {
        "Focus on distance control for this approach shot."
    }
}

fn wind_clause(wind_mph: f64, wind: WindDirection) -> Option<&'static str> {
    if wind_mph > STRONG_WIND_MPH {
        match wind {
            WindDirection::LeftToRight => {
                Some("Aim slightly right of the pin to account for the left-to-right wind.")
            }
            WindDirection::RightToLeft => {
                Some("Aim slightly left of the pin to account for the right-to-left wind.")
            }
            WindDirection::Headwind => Some("Club up to counter the headwind."),
            WindDirection::Tailwind => Some("Consider clubbing down with the tailwind."),
            WindDirection::Calm => None,
        }
    } else if wind_mph > MILD_WIND_MPH {
        Some("Take the mild wind into consideration.")
    } else {
        None
    }
}

/// Build the shot advice sentence
///
/// Clauses are appended in a fixed order and are not exclusive:
/// 1. a base clause by distance band (>200, >150, >100, otherwise)
/// 2. a wind clause when the wind is above 5 mph, direction specific
///    above 10 mph
/// 3. one caution per hazard present, water then bunker then out of bounds
///
/// Hazards are reported once each regardless of how often or in what
/// order they appear in `hazards`.
pub fn strategy(
    distance_yards: f64,
    wind_mph: f64,
    wind: WindDirection,
    hazards: &[HazardCue],
) -> String {
    let mut clauses = vec![distance_clause(distance_yards)];

    clauses.extend(wind_clause(wind_mph, wind));

    let mut present: Vec<HazardCue> = hazards.to_vec();
    present.sort();
    present.dedup();
    clauses.extend(present.iter().map(HazardCue::caution));

    clauses.join(" ")
}

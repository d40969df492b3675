pub mod scorecard;

pub use scorecard::{NineTotals, RoundScores, RoundStats, Scorecard, ScorecardSummary};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Strokes over (positive) or under (negative) par
pub fn relative_to_par(score: i32, par: i32) -> i32 {
    score - par
}

/// "E" for even, "+3" over, "-2" under
pub fn format_relative_to_par(relative: i32) -> String {
    match relative.cmp(&0) {
        Ordering::Equal => "E".to_string(),
        Ordering::Greater => format!("+{relative}"),
        Ordering::Less => relative.to_string(),
    }
}

/// Scorecard colouring bucket for a hole score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreClass {
    UnderPar,
    Par,
    Bogey,
    DoubleOrWorse,
}

impl ScoreClass {
    #[must_use]
    pub fn from_relative(relative: i32) -> Self {
        match relative {
            i32::MIN..=-1 => Self::UnderPar,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleOrWorse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderPar => "under-par",
            Self::Par => "par",
            Self::Bogey => "bogey",
            Self::DoubleOrWorse => "double-or-worse",
        }
    }
}

impl From<i32> for ScoreClass {
    fn from(relative: i32) -> Self {
        Self::from_relative(relative)
    }
}

pub fn score_class(score: i32, par: i32) -> ScoreClass {
    ScoreClass::from_relative(relative_to_par(score, par))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_par() {
        assert_eq!(relative_to_par(72, 72), 0);
        assert_eq!(relative_to_par(5, 4), 1);
        assert_eq!(relative_to_par(68, 72), -4);
    }

    #[test]
    fn test_format_relative_to_par() {
        assert_eq!(format_relative_to_par(0), "E");
        assert_eq!(format_relative_to_par(3), "+3");
        assert_eq!(format_relative_to_par(-2), "-2");
        assert_eq!(format_relative_to_par(1), "+1");
    }

    #[test]
    fn test_score_class() {
        assert_eq!(score_class(4, 4), ScoreClass::Par);
        assert_eq!(score_class(3, 4), ScoreClass::UnderPar);
        assert_eq!(score_class(2, 5), ScoreClass::UnderPar);
        assert_eq!(score_class(5, 4), ScoreClass::Bogey);
        assert_eq!(score_class(6, 4), ScoreClass::DoubleOrWorse);
        assert_eq!(score_class(7, 4), ScoreClass::DoubleOrWorse);
    }

    #[test]
    fn test_score_class_labels() {
        assert_eq!(ScoreClass::from(-1).as_str(), "under-par");
        assert_eq!(
            serde_json::to_string(&ScoreClass::DoubleOrWorse).unwrap(),
            "\"double-or-worse\""
        );
    }
}

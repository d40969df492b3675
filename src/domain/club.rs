use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CaddieError, Result};

/// Equipment category, as stored in the club's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubCategory {
    Driver,
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Putter,
}

pub const MIN_CONFIDENCE: u8 = 1;
pub const MAX_CONFIDENCE: u8 = 5;

fn default_confidence() -> u8 {
    3
}

/// Missing or null carry distances are treated as unset (0 yards).
fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One club in a player's bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ClubCategory,
    /// Average carry in yards; 0 for the putter or an unset club
    #[serde(default, deserialize_with = "null_as_zero")]
    pub average_distance: f64,
    /// Subjective consistency rating, 1 (shaky) to 5 (trusted)
    #[serde(default = "default_confidence")]
    pub confidence: u8,
}

impl Club {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: ClubCategory,
        average_distance: f64,
        confidence: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            average_distance,
            confidence,
        }
    }

    /// Check the carry and confidence invariants
    pub fn validate(&self) -> Result<()> {
        if !self.average_distance.is_finite() || self.average_distance < 0.0 {
            return Err(self.invalid(format!(
                "average distance {} must be a non-negative number of yards",
                self.average_distance
            )));
        }
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(self.invalid(format!(
                "confidence {} outside {}..={}",
                self.confidence, MIN_CONFIDENCE, MAX_CONFIDENCE
            )));
        }
        Ok(())
    }

    pub fn update_average_distance(&mut self, yards: f64) -> Result<()> {
        let previous = self.average_distance;
        self.average_distance = yards;
        self.validate().inspect_err(|_| self.average_distance = previous)
    }

    pub fn update_confidence(&mut self, confidence: u8) -> Result<()> {
        let previous = self.confidence;
        self.confidence = confidence;
        self.validate().inspect_err(|_| self.confidence = previous)
    }

    fn invalid(&self, reason: String) -> CaddieError {
        CaddieError::InvalidClub {
            name: self.name.clone(),
            reason,
        }
    }

    /// The set every new player is seeded with
    pub fn default_bag() -> Vec<Club> {
        use ClubCategory::*;

        let seed: [(&str, ClubCategory, f64, u8); 16] = [
            ("Driver", Driver, 250.0, 3),
            ("3 Wood", Wood, 230.0, 3),
            ("5 Wood", Wood, 210.0, 2),
            ("3 Hybrid", Hybrid, 215.0, 4),
            ("4 Hybrid", Hybrid, 200.0, 3),
            ("4 Iron", Iron, 190.0, 3),
            ("5 Iron", Iron, 180.0, 3),
            ("6 Iron", Iron, 170.0, 4),
            ("7 Iron", Iron, 160.0, 4),
            ("8 Iron", Iron, 150.0, 5),
            ("9 Iron", Iron, 135.0, 4),
            ("PW", Wedge, 120.0, 4),
            ("GW", Wedge, 100.0, 3),
            ("SW", Wedge, 80.0, 3),
            ("LW", Wedge, 60.0, 2),
            ("Putter", Putter, 0.0, 4),
        ];

        seed.into_iter()
            .zip(1..)
            .map(|((name, category, distance, confidence), id)| {
                Club::new(id, name, category, distance, confidence)
            })
            .collect()
    }
}

/// First club in the bag with exactly this display name
pub fn club_by_name<'a>(clubs: &'a [Club], name: &str) -> Option<&'a Club> {
    clubs.iter().find(|c| c.name == name)
}

/// Standard club labels, longest to shortest
pub fn common_club_names() -> [&'static str; 16] {
    [
        "Driver", "3 Wood", "5 Wood", "3 Hybrid", "4 Hybrid", "4 Iron", "5 Iron", "6 Iron",
        "7 Iron", "8 Iron", "9 Iron", "PW", "GW", "SW", "LW", "Putter",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bag_is_valid() {
        let bag = Club::default_bag();
        assert_eq!(bag.len(), 16);
        for club in &bag {
            club.validate().unwrap();
        }
        assert_eq!(bag[0].id, 1);
        assert_eq!(bag[15].category, ClubCategory::Putter);
        assert_eq!(bag[15].average_distance, 0.0);
    }

    #[test]
    fn test_default_bag_names_match_common_names() {
        let names: Vec<String> = Club::default_bag().into_iter().map(|c| c.name).collect();
        assert_eq!(names, common_club_names());
    }

    #[test]
    fn test_club_by_name() {
        let bag = Club::default_bag();
        assert_eq!(club_by_name(&bag, "7 Iron").unwrap().average_distance, 160.0);
        assert!(club_by_name(&bag, "7 iron").is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = Club::new(1, "Broken", ClubCategory::Iron, -5.0, 3);
        assert!(matches!(
            negative.validate(),
            Err(CaddieError::InvalidClub { .. })
        ));

        let overconfident = Club::new(2, "Lucky", ClubCategory::Wedge, 90.0, 6);
        assert!(overconfident.validate().is_err());

        let zero_confidence = Club::new(3, "Shaky", ClubCategory::Wedge, 90.0, 0);
        assert!(zero_confidence.validate().is_err());
    }

    #[test]
    fn test_updates_keep_invariants() {
        let mut club = Club::new(1, "7 Iron", ClubCategory::Iron, 160.0, 4);

        club.update_average_distance(165.0).unwrap();
        assert_eq!(club.average_distance, 165.0);

        assert!(club.update_average_distance(f64::NAN).is_err());
        assert_eq!(club.average_distance, 165.0);

        assert!(club.update_confidence(9).is_err());
        assert_eq!(club.confidence, 4);
    }

    #[test]
    fn test_club_json_shape() {
        let json = r#"[
            {"id":7,"name":"Putter","type":"putter","averageDistance":null},
            {"name":"PW","type":"wedge","averageDistance":120,"confidence":4}
        ]"#;
        let clubs: Vec<Club> = serde_json::from_str(json).unwrap();

        assert_eq!(clubs[0].id, 7);
        assert_eq!(clubs[0].average_distance, 0.0);
        assert_eq!(clubs[0].confidence, 3);
        assert_eq!(clubs[1].category, ClubCategory::Wedge);
        assert_eq!(clubs[1].average_distance, 120.0);
    }
}

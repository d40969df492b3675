use serde::{Deserialize, Serialize};

use super::Position;

/// Where a stroke finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    Fairway,
    Green,
    Rough,
    Sand,
    Water,
    #[serde(rename = "ob")]
    OutOfBounds,
}

impl ShotResult {
    pub const ALL: [ShotResult; 6] = [
        ShotResult::Fairway,
        ShotResult::Green,
        ShotResult::Rough,
        ShotResult::Sand,
        ShotResult::Water,
        ShotResult::OutOfBounds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotResult::Fairway => "fairway",
            ShotResult::Green => "green",
            ShotResult::Rough => "rough",
            ShotResult::Sand => "sand",
            ShotResult::Water => "water",
            ShotResult::OutOfBounds => "ob",
        }
    }
}

/// How the player rated the stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotQuality {
    Poor,
    Ok,
    Great,
}

impl ShotQuality {
    pub const ALL: [ShotQuality; 3] = [ShotQuality::Poor, ShotQuality::Ok, ShotQuality::Great];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotQuality::Poor => "poor",
            ShotQuality::Ok => "ok",
            ShotQuality::Great => "great",
        }
    }
}

/// One recorded stroke. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub hole_number: u8,
    /// 1-based order within the hole
    pub shot_number: u32,
    /// Display name of the club used
    pub club: String,
    /// Yards travelled, when known
    #[serde(default)]
    pub distance: Option<i32>,
    pub start_position: Position,
    pub end_position: Position,
    pub result: ShotResult,
    pub quality: ShotQuality,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_labels_roundtrip_serde() {
        for result in ShotResult::ALL {
            let json = serde_json::to_string(&result).unwrap();
            assert_eq!(json, format!("\"{}\"", result.as_str()));
        }
        for quality in ShotQuality::ALL {
            let json = serde_json::to_string(&quality).unwrap();
            assert_eq!(json, format!("\"{}\"", quality.as_str()));
        }
    }

    #[test]
    fn test_shot_json_shape() {
        let json = r#"{
            "holeNumber": 3, "shotNumber": 2, "club": "8 Iron", "distance": 148,
            "startPosition": {"x": 40, "y": 50}, "endPosition": {"x": 78, "y": 27},
            "result": "ob", "quality": "poor"
        }"#;
        let shot: Shot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.result, ShotResult::OutOfBounds);
        assert_eq!(shot.distance, Some(148));
        assert!(shot.notes.is_empty());
    }
}

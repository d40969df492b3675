use serde::{Deserialize, Serialize};

use super::Position;
use crate::advisor::HazardCue;
use crate::error::{CaddieError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardShape {
    Circle,
    Rectangle,
    Polygon,
}

/// Extent in map-percentage units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSize {
    pub width: f64,
    pub height: f64,
}

/// Descriptive hazard marker. Used for drawing and for strategy hints,
/// never for collision tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Free-form kind: "water", "sand", "rough", ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Centre of the hazard
    pub position: Position,
    pub size: HazardSize,
    pub shape: HazardShape,
}

impl Hazard {
    pub fn new(
        kind: impl Into<String>,
        position: Position,
        size: HazardSize,
        shape: HazardShape,
    ) -> Self {
        Self {
            kind: kind.into(),
            position,
            size,
            shape,
        }
    }
}

/// Static description of one hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleData {
    pub number: u8,
    pub par: u8,
    /// Card length in yards
    pub distance: u32,
    #[serde(rename = "hcp")]
    pub handicap: u8,
    pub tee_position: Position,
    #[serde(rename = "holePosition")]
    pub pin_position: Position,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
}

impl HoleData {
    /// Strategy vocabulary for this hole's hazards, de-duplicated and in
    /// the order the advisor mentions them
    pub fn hazard_cues(&self) -> Vec<HazardCue> {
        let mut cues: Vec<HazardCue> = self
            .hazards
            .iter()
            .filter_map(|h| HazardCue::from_hazard_type(&h.kind))
            .collect();
        cues.sort();
        cues.dedup();
        cues
    }
}

/// All holes of a course, as stored in the course's `data` column
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseData {
    pub holes: Vec<HoleData>,
}

impl CourseData {
    pub fn hole(&self, number: u8) -> Result<&HoleData> {
        self.holes
            .iter()
            .find(|h| h.number == number)
            .ok_or(CaddieError::HoleNotFound(number))
    }

    /// Pars in hole-number order
    pub fn pars(&self) -> Vec<u8> {
        let mut holes: Vec<&HoleData> = self.holes.iter().collect();
        holes.sort_by_key(|h| h.number);
        holes.into_iter().map(|h| h.par).collect()
    }

    /// The 18-hole layout a fresh install starts with.
    ///
    /// Holes cycle par 5, 4, 3. Every hole shares the same tee, pin, water
    /// carry and greenside bunker.
    pub fn default_layout() -> Self {
        let holes = (0..18u32)
            .map(|i| {
                let (par, distance) = match i % 3 {
                    0 => (5, 520 + i * 5),
                    1 => (4, 410 + i * 3),
                    _ => (3, 180 + i * 2),
                };
                HoleData {
                    number: (i + 1) as u8,
                    par,
                    distance,
                    handicap: ((i + 1) % 18) as u8,
                    tee_position: Position::new(10.0, 85.0),
                    pin_position: Position::new(80.0, 25.0),
                    hazards: vec![
                        Hazard::new(
                            "water",
                            Position::new(30.0, 60.0),
                            HazardSize {
                                width: 30.0,
                                height: 15.0,
                            },
                            HazardShape::Rectangle,
                        ),
                        Hazard::new(
                            "sand",
                            Position::new(65.0, 35.0),
                            HazardSize {
                                width: 10.0,
                                height: 10.0,
                            },
                            HazardShape::Circle,
                        ),
                    ],
                }
            })
            .collect();

        Self { holes }
    }
}

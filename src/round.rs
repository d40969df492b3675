//! Explicit state of a round in progress
//!
//! The caller owns a [`Round`] and threads it through; nothing here is
//! global. Shots are appended and never edited.

use crate::domain::{HoleData, Position, Shot, ShotQuality, ShotResult};
use crate::geometry::{Scale, distance, to_yards};

/// What the player enters after hitting a shot
#[derive(Debug, Clone, PartialEq)]
pub struct ShotEntry {
    pub club: String,
    pub end_position: Position,
    pub result: ShotResult,
    pub quality: ShotQuality,
    pub notes: String,
}

impl ShotEntry {
    pub fn new(
        club: impl Into<String>,
        end_position: Position,
        result: ShotResult,
        quality: ShotQuality,
    ) -> Self {
        Self {
            club: club.into(),
            end_position,
            result,
            quality,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Segment of a drawn shot path
pub type PathSegment = (Position, Position);

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    hole_number: u8,
    position: Position,
    shots: Vec<Shot>,
}

impl Round {
    /// Start on the tee of `hole`
    pub fn start(hole: &HoleData) -> Self {
        Self {
            hole_number: hole.number,
            position: hole.tee_position,
            shots: Vec::new(),
        }
    }

    pub fn hole_number(&self) -> u8 {
        self.hole_number
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Every recorded shot, in the order they were played
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Shots on one hole, ordered by shot number
    pub fn shots_on_hole(&self, hole_number: u8) -> Vec<&Shot> {
        let mut shots: Vec<&Shot> = self
            .shots
            .iter()
            .filter(|s| s.hole_number == hole_number)
            .collect();
        shots.sort_by_key(|s| s.shot_number);
        shots
    }

    /// Move on to another hole, back on its tee
    pub fn advance_to(&mut self, hole: &HoleData) {
        self.hole_number = hole.number;
        self.position = hole.tee_position;
    }

    /// Yards from the current position to the pin
    pub fn distance_to_pin(&self, hole: &HoleData, scale: Scale) -> i32 {
        to_yards(distance(self.position, hole.pin_position), scale)
    }

    /// Record a shot from the current position and move to where it finished
    ///
    /// # Returns
    /// The stored shot, numbered after the shots already on this hole
    pub fn record_shot(&mut self, entry: ShotEntry, scale: Scale) -> &Shot {
        let start = self.position;
        let shot_number = self
            .shots
            .iter()
            .filter(|s| s.hole_number == self.hole_number)
            .count() as u32
            + 1;

        tracing::debug!(
            hole = self.hole_number,
            shot_number,
            club = %entry.club,
            result = entry.result.as_str(),
            "recording shot"
        );

        self.position = entry.end_position;
        self.shots.push(Shot {
            hole_number: self.hole_number,
            shot_number,
            club: entry.club,
            distance: Some(to_yards(distance(start, entry.end_position), scale)),
            start_position: start,
            end_position: entry.end_position,
            result: entry.result,
            quality: entry.quality,
            notes: entry.notes,
        });

        &self.shots[self.shots.len() - 1]
    }

    /// Segments to draw for the current hole: tee to the first shot's end,
    /// then shot to shot, then on to the current position if the player
    /// has moved since the last shot
    pub fn shot_path(&self, tee: Position) -> Vec<PathSegment> {
        let shots = self.shots_on_hole(self.hole_number);

        let mut segments = Vec::with_capacity(shots.len() + 1);
        let mut from = tee;
        for shot in shots {
            segments.push((from, shot.end_position));
            from = shot.end_position;
        }
        if !segments.is_empty() && from != self.position {
            segments.push((from, self.position));
        }
        segments
    }
}

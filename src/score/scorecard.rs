use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ScoreClass, format_relative_to_par, relative_to_par, score_class};
use crate::error::{CaddieError, Result};

/// Running counters kept alongside the hole scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundStats {
    pub fairways_hit: u32,
    pub greens_in_regulation: u32,
    pub putts: u32,
    /// Putts keyed by 0-based hole index
    pub putts_per_hole: BTreeMap<usize, u32>,
}

/// Scores and stats of a round as stored, without course pars
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundScores {
    pub scores: Vec<Option<i32>>,
    #[serde(default)]
    pub stats: RoundStats,
}

/// Par and score totals for nine holes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NineTotals {
    pub par: i32,
    /// Sum of the scores entered so far
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScorecardSummary {
    pub holes_played: u32,
    pub total_score: i32,
    /// Par over the holes that have a score
    pub par_played: i32,
    pub relative_to_par: i32,
    pub front_nine: NineTotals,
    pub back_nine: NineTotals,
    pub fairways_hit_pct: u32,
    pub greens_in_regulation_pct: u32,
    pub average_putts: Option<f64>,
}

impl ScorecardSummary {
    pub fn relative_to_par_text(&self) -> String {
        format_relative_to_par(self.relative_to_par)
    }
}

/// A round's card: one par per hole and a score once the hole is played
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pars: Vec<u8>,
    scores: Vec<Option<i32>>,
    stats: RoundStats,
}

impl Scorecard {
    /// Blank card for a course
    pub fn new(pars: Vec<u8>) -> Self {
        let scores = vec![None; pars.len()];
        Self {
            pars,
            scores,
            stats: RoundStats::default(),
        }
    }

    /// Card from stored scores; extra scores beyond the course are dropped
    /// and missing ones left blank
    pub fn from_round(pars: Vec<u8>, round: RoundScores) -> Self {
        let mut scores = round.scores;
        scores.resize(pars.len(), None);
        Self {
            pars,
            scores,
            stats: round.stats,
        }
    }

    pub fn pars(&self) -> &[u8] {
        &self.pars
    }

    pub fn scores(&self) -> &[Option<i32>] {
        &self.scores
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    fn index(&self, hole_number: u8) -> Result<usize> {
        let index = (hole_number as usize).wrapping_sub(1);
        if index < self.pars.len() {
            Ok(index)
        } else {
            Err(CaddieError::HoleNotFound(hole_number))
        }
    }

    pub fn set_score(&mut self, hole_number: u8, score: i32) -> Result<()> {
        let index = self.index(hole_number)?;
        self.scores[index] = Some(score);
        Ok(())
    }

    /// Record the putts on a hole, replacing any earlier entry for it in
    /// the round total
    pub fn set_putts(&mut self, hole_number: u8, putts: u32) -> Result<()> {
        let index = self.index(hole_number)?;
        let previous = self.stats.putts_per_hole.insert(index, putts).unwrap_or(0);
        self.stats.putts = self.stats.putts - previous.min(self.stats.putts) + putts;
        Ok(())
    }

    pub fn record_fairway_hit(&mut self) {
        self.stats.fairways_hit += 1;
    }

    pub fn record_green_in_regulation(&mut self) {
        self.stats.greens_in_regulation += 1;
    }

    /// Colour bucket for each hole, `None` where no score is entered
    pub fn hole_classes(&self) -> Vec<Option<ScoreClass>> {
        self.scores
            .iter()
            .zip(&self.pars)
            .map(|(score, &par)| score.map(|s| score_class(s, par as i32)))
            .collect()
    }

    fn nine(&self, range: std::ops::Range<usize>) -> NineTotals {
        NineTotals {
            par: self.pars[range.clone()].iter().map(|&p| p as i32).sum(),
            score: self.scores[range].iter().flatten().sum(),
        }
    }

    pub fn summary(&self) -> ScorecardSummary {
        let played: Vec<(i32, i32)> = self
            .scores
            .iter()
            .zip(&self.pars)
            .filter_map(|(score, &par)| score.map(|s| (s, par as i32)))
            .collect();

        let holes_played = played.len() as u32;
        let total_score: i32 = played.iter().map(|(s, _)| s).sum();
        let par_played: i32 = played.iter().map(|(_, p)| p).sum();

        let pct = |count: u32| {
            if count == 0 || holes_played == 0 {
                0
            } else {
                (count as f64 / holes_played as f64 * 100.0).round() as u32
            }
        };

        let average_putts = (self.stats.putts > 0 && holes_played > 0)
            .then(|| self.stats.putts as f64 / holes_played as f64);

        let len = self.pars.len();
        ScorecardSummary {
            holes_played,
            total_score,
            par_played,
            relative_to_par: relative_to_par(total_score, par_played),
            front_nine: self.nine(0..len.min(9)),
            back_nine: self.nine(len.min(9)..len.min(18)),
            fairways_hit_pct: pct(self.stats.fairways_hit),
            greens_in_regulation_pct: pct(self.stats.greens_in_regulation),
            average_putts,
        }
    }
}

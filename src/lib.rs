//! caddie - Distance to the pin, plays-like yardage, club picks and scorecards

pub mod advisor;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod round;
pub mod score;

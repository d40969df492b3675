pub mod adjust;
pub mod caddie;
pub mod clubs;
pub mod strategy;

pub use adjust::{
    Conditions, Lie, NegativeDistancePolicy, WindDirection, adjusted_distance,
    lie_adjusted_distance,
};
pub use caddie::{Advice, Caddie};
pub use clubs::{ClubAdvice, MAX_RECOMMENDATIONS, recommend_clubs};
pub use strategy::{HazardCue, strategy};

pub mod distance;
pub mod scaling;

pub use distance::{distance, format_distance};
pub use scaling::{Scale, round_half_up, to_native, to_yards};

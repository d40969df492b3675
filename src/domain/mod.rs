pub mod club;
pub mod hole;
pub mod position;
pub mod shot;

pub use club::{Club, ClubCategory, club_by_name, common_club_names};
pub use hole::{CourseData, Hazard, HazardShape, HazardSize, HoleData};
pub use position::Position;
pub use shot::{Shot, ShotQuality, ShotResult};

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaddieError>;

#[derive(Error, Debug)]
pub enum CaddieError {
    #[error("invalid map scale {0}: must be finite and non-zero")]
    InvalidScale(f64),
    #[error("effective distance is negative ({0} yards)")]
    NegativeDistance(i32),
    #[error("hole {0} not found in course data")]
    HoleNotFound(u8),
    #[error("invalid club '{name}': {reason}")]
    InvalidClub { name: String, reason: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

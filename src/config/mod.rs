use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::advisor::{Conditions, NegativeDistancePolicy};
use crate::domain::{Club, CourseData};
use crate::error::{CaddieError, Result};
use crate::score::RoundScores;

/// Yards per map unit on the stock course drawings
pub const DEFAULT_YARDS_PER_UNIT: f64 = 3.0;

fn default_yards_per_unit() -> f64 {
    DEFAULT_YARDS_PER_UNIT
}
fn default_negative_distance() -> NegativeDistancePolicy {
    NegativeDistancePolicy::Allow
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Course JSON, `{"holes": [...]}`
    #[serde(default)]
    pub course: Option<PathBuf>,
    /// Club bag JSON, an array of clubs
    #[serde(default)]
    pub bag: Option<PathBuf>,
    #[serde(default)]
    pub hole: Option<u8>,
    #[serde(default = "default_yards_per_unit")]
    pub yards_per_unit: f64,
    #[serde(default = "default_negative_distance")]
    pub negative_distance: NegativeDistancePolicy,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub conditions: Conditions,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            course: None,
            bag: None,
            hole: None,
            yards_per_unit: default_yards_per_unit(),
            negative_distance: default_negative_distance(),
            verbose: default_verbose(),
            conditions: Conditions::default(),
        }
    }
}

impl FileConfig {
    /// First parseable config file on the search path
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Read one config file, failing if it is missing or malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = read(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("caddie.toml"));
    paths.push(PathBuf::from(".caddie.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("caddie").join("config.toml"));
        paths.push(config_dir.join("caddie.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".caddie.toml"));
        paths.push(home.join(".config").join("caddie").join("config.toml"));
    }

    paths
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CaddieError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn load_course(path: &Path) -> Result<CourseData> {
    let course: CourseData = load_json(path)?;
    tracing::debug!(path = %path.display(), holes = course.holes.len(), "loaded course");
    Ok(course)
}

/// Load a bag and check every club's carry and confidence
pub fn load_bag(path: &Path) -> Result<Vec<Club>> {
    let clubs: Vec<Club> = load_json(path)?;
    for club in &clubs {
        club.validate()?;
    }
    tracing::debug!(path = %path.display(), clubs = clubs.len(), "loaded bag");
    Ok(clubs)
}

pub fn load_round_scores(path: &Path) -> Result<RoundScores> {
    load_json(path)
}

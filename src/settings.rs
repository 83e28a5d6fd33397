//! Game configuration
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OBSTACLE_COUNT, MAX_FRAME_DT, MAX_OBSTACLE_COUNT};

/// Default frame length for the headless runner (60 Hz)
pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Obstacles spawned each round
    pub obstacle_count: usize,
    /// Run seed; `None` picks a random one at startup
    pub seed: Option<u64>,
    /// Longest frame the driver will simulate in one tick (seconds)
    pub max_frame_dt: f32,

    // === Headless runner ===
    /// Frame length (seconds)
    pub frame_dt: f32,
    /// Frames simulated after each command
    pub frames_per_step: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            seed: None,
            max_frame_dt: MAX_FRAME_DT,
            frame_dt: DEFAULT_FRAME_DT,
            frames_per_step: 15,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, replacing unusable timings with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp the obstacle count and replace unusable timings with defaults
    pub fn sanitized(mut self) -> Self {
        if self.obstacle_count > MAX_OBSTACLE_COUNT {
            log::warn!(
                "obstacle_count {} too large, using {}",
                self.obstacle_count,
                MAX_OBSTACLE_COUNT
            );
            self.obstacle_count = MAX_OBSTACLE_COUNT;
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            self.max_frame_dt = MAX_FRAME_DT;
        }
        if !self.frame_dt.is_finite() || self.frame_dt <= 0.0 {
            self.frame_dt = DEFAULT_FRAME_DT;
        }
        self
    }
}

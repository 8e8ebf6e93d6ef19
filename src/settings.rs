//! Host settings for the runner binary
//!
//! Loaded from an optional JSON file. Gameplay constants are fixed in
//! [`crate::consts`] and are not part of the settings.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; picked from the clock when absent
    pub seed: Option<u64>,
    /// Longest frame the host will feed to one tick (seconds)
    pub max_frame_dt: f32,
    /// Fixed frame rate of the headless runner
    pub frame_rate: u32,
    /// How long the headless runner plays (seconds)
    pub demo_seconds: f32,
    /// Print a JSON snapshot once per simulated second
    pub log_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_frame_dt: 0.1,
            frame_rate: 60,
            demo_seconds: 30.0,
            log_snapshots: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Replace out-of-range values with their defaults
    fn sanitized(mut self) -> Self {
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            log::warn!(
                "max_frame_dt {} out of range, using default",
                self.max_frame_dt
            );
            self.max_frame_dt = Self::default().max_frame_dt;
        }
        if !self.demo_seconds.is_finite() || self.demo_seconds < 0.0 {
            self.demo_seconds = Self::default().demo_seconds;
        }
        self
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), err);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Bad settings in {}: {}, using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Seconds per frame for the fixed-rate runner
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Clamp a measured frame time so a stall can't launch a huge step
    pub fn clamp_frame_dt(&self, dt: f32) -> f32 {
        dt.max(0.0).min(self.max_frame_dt.max(0.0))
    }

    /// Configured seed, or one derived from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed)
        })
    }
}

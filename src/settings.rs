//! Game settings and preferences
//!
//! Loaded from a JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BUBBLE_CHANCE, MAX_PARTICLES, SIM_HZ};
use crate::sim::{SimConfig, WorldBounds};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("world must have a finite, positive size (got {width} x {height})")]
    InvalidWorld { width: f32, height: f32 },
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; `None` lets the runner pick one
    pub seed: Option<u64>,
    /// Playfield size shared by wrap and clamp logic
    pub world: WorldBounds,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Visual Effects ===
    /// Particle effects (eat bursts, bubbles)
    pub particles: bool,
    /// Live particle cap
    pub max_particles: usize,
    /// Ambient bubbles rising from the sea floor
    pub ambient_bubbles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            world: WorldBounds::default(),
            tick_rate: SIM_HZ,

            particles: true,
            max_particles: MAX_PARTICLES,
            ambient_bubbles: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let WorldBounds { width, height } = self.world;
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(width) || !usable(height) {
            return Err(SettingsError::InvalidWorld { width, height });
        }
        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.max_particles
        }
    }

    /// Fixed timestep in seconds
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Simulation config for a run with the given seed
    pub fn sim_config(&self, seed: u64) -> SimConfig {
        SimConfig {
            seed,
            bounds: self.world,
            max_particles: self.max_particles(),
            bubble_chance: if self.ambient_bubbles {
                BUBBLE_CHANCE
            } else {
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "world": { "width": 800.0, "height": 600.0 } }"#)
                .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.world, WorldBounds::new(800.0, 600.0));
        assert_eq!(settings.tick_rate, 60);
        assert!(settings.particles);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_degenerate_world_is_rejected() {
        for json in [
            r#"{ "world": { "width": -10.0, "height": 768.0 } }"#,
            r#"{ "world": { "width": 1024.0, "height": 0.0 } }"#,
        ] {
            assert!(matches!(
                Settings::from_json(json),
                Err(SettingsError::InvalidWorld { .. })
            ));
        }
    }

    #[test]
    fn test_degenerate_world_file_falls_back_to_playable_defaults() {
        let path = std::env::temp_dir().join(format!(
            "ocean-hunter-bad-world-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "world": { "width": -10.0, "height": 768.0 } }"#).unwrap();
        let settings = Settings::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.world, WorldBounds::default());
        let state = crate::sim::GameState::new(settings.sim_config(1));
        assert!(!state.population.is_empty());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/definitely/not/here/settings.json");
        assert_eq!(settings.tick_rate, SIM_HZ);
        assert!(matches!(
            Settings::load("/definitely/not/here/settings.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_sim_config_projection() {
        let settings = Settings {
            particles: false,
            ambient_bubbles: false,
            ..Settings::default()
        };
        let config = settings.sim_config(3);
        assert_eq!(config.seed, 3);
        assert_eq!(config.max_particles, 0);
        assert_eq!(config.bubble_chance, 0.0);
        assert_eq!(config.bounds, WorldBounds::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            seed: Some(42),
            muted: true,
            ..Settings::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back.seed, Some(42));
        assert!(back.muted);
    }

    #[test]
    fn test_sim_dt() {
        assert!((Settings::default().sim_dt() - 1.0 / 60.0).abs() < 1e-7);
    }
}

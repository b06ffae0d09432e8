//! Game settings
//!
//! Tunables for a run: RNG seed, playfield size and level timing. Loaded
//! from a JSON file; anything missing falls back to the defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICKS_PER_SECOND};
use crate::sim::{LEVEL_PLANS, Playfield};

/// Smallest playfield side that still leaves room to play
const MIN_PLAYFIELD_SIDE: f32 = 100.0;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the simulation's random stream
    pub seed: u64,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Timing ===
    /// Countdown shown before each level
    pub status_seconds: u32,
    /// Play length of each level; the run ends after the last one
    pub level_seconds: Vec<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EE7,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            status_seconds: 5,
            level_seconds: vec![30, 30, 45, 45],
        }
    }
}

impl Settings {
    /// Parse settings from JSON, rejecting values the game cannot run with
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate().map_err(serde_json::Error::custom)?;
        Ok(settings)
    }

    /// Check every value is in range for `World::new`
    pub fn validate(&self) -> Result<(), String> {
        if !(self.playfield_width > MIN_PLAYFIELD_SIDE && self.playfield_height > MIN_PLAYFIELD_SIDE) {
            return Err(format!(
                "playfield {}x{} must be larger than {} on both sides",
                self.playfield_width, self.playfield_height, MIN_PLAYFIELD_SIDE
            ));
        }
        if self.status_seconds == 0 {
            return Err("status_seconds must be positive".into());
        }
        if self.status_seconds.checked_mul(TICKS_PER_SECOND).is_none() {
            return Err(format!("status_seconds {} is too long", self.status_seconds));
        }
        if self.level_seconds.is_empty() {
            return Err("level_seconds must list at least one level".into());
        }
        if self.level_seconds.len() > LEVEL_PLANS.len() {
            return Err(format!(
                "{} levels configured but only {} are playable",
                self.level_seconds.len(),
                LEVEL_PLANS.len()
            ));
        }
        for (i, &seconds) in self.level_seconds.iter().enumerate() {
            if seconds == 0 {
                return Err(format!("level {} has zero length", i + 1));
            }
            if seconds.checked_mul(TICKS_PER_SECOND).is_none() {
                return Err(format!("level {} length {} is too long", i + 1, seconds));
            }
        }
        Ok(())
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Read settings from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Could not load settings from {}: {}", path.display(), e);
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    pub fn status_ticks(&self) -> u32 {
        self.status_seconds * TICKS_PER_SECOND
    }

    pub fn level_ticks(&self) -> Vec<u32> {
        self.level_seconds
            .iter()
            .map(|s| s * TICKS_PER_SECOND)
            .collect()
    }

    /// Same settings with a different seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.status_ticks(), 150);
        assert_eq!(settings.level_ticks(), vec![900, 900, 1350, 1350]);
        assert_eq!(settings.playfield(), Playfield::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "level_seconds": [10, 20] }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.level_seconds, vec![10, 20]);
        assert_eq!(settings.status_seconds, 5);
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
        assert!(Settings::from_json(r#"{ "seed": "many" }"#).is_err());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        for json in [
            r#"{ "status_seconds": 0 }"#,
            r#"{ "status_seconds": 4294967295 }"#,
            r#"{ "level_seconds": [] }"#,
            r#"{ "level_seconds": [30, 0, 45] }"#,
            r#"{ "level_seconds": [1, 1, 1, 1, 1] }"#,
            r#"{ "level_seconds": [30, 4294967295] }"#,
            r#"{ "playfield_width": 50 }"#,
            r#"{ "playfield_height": 100 }"#,
        ] {
            assert!(Settings::from_json(json).is_err(), "accepted {json}");
        }
        assert!(Settings::from_json(r#"{ "level_seconds": [1, 1, 1, 1] }"#).is_ok());
    }

    #[test]
    fn test_invalid_file_falls_back_to_playable_defaults() {
        let path = std::env::temp_dir().join(format!("skeet-invalid-{}.json", std::process::id()));
        fs::write(&path, r#"{ "level_seconds": [] }"#).unwrap();
        let settings = Settings::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(settings, Settings::default());
        let world = crate::sim::World::new(&settings);
        assert!(world.clock.is_status());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/definitely/not/here/skeet.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("skeet-settings-{}.json", std::process::id()));
        let settings = Settings::default().with_seed(99);
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), settings);
        fs::remove_file(&path).unwrap();
    }
}

//! Session configuration
//!
//! Loaded from an optional JSON file; every missing field falls back to the
//! classic game's values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunables for one game session (fixed for the session's lifetime)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Playfield width in logical units
    pub width: f32,
    /// Playfield height in logical units
    pub height: f32,
    /// Round length in seconds
    pub round_duration_secs: f64,
    /// Ticks between fruit spawns
    pub spawn_interval_ticks: u32,
    /// Fingertip positions kept in the trail
    pub max_trail_length: usize,
    /// Downward acceleration (units/tick²)
    pub gravity: f32,
    pub radius_min: u32,
    pub radius_max: u32,
    /// Upward launch speed range (units/tick)
    pub launch_speed_min: f32,
    pub launch_speed_max: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            round_duration_secs: ROUND_DURATION_SECS,
            spawn_interval_ticks: SPAWN_INTERVAL,
            max_trail_length: MAX_TRAIL_LENGTH,
            gravity: GRAVITY,
            radius_min: FRUIT_RADIUS_MIN,
            radius_max: FRUIT_RADIUS_MAX,
            launch_speed_min: LAUNCH_SPEED_MIN,
            launch_speed_max: LAUNCH_SPEED_MAX,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON, filling unspecified fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings a round cannot be played with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let playfield_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !playfield_ok {
            return Err(ConfigError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.round_duration_secs.is_finite() && self.round_duration_secs > 0.0) {
            return Err(ConfigError::InvalidRoundDuration(self.round_duration_secs));
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.max_trail_length == 0 {
            return Err(ConfigError::ZeroTrailLength);
        }
        if self.radius_min == 0 || self.radius_min > self.radius_max {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        let speed_ok = self.launch_speed_min.is_finite()
            && self.launch_speed_max.is_finite()
            && self.launch_speed_min > 0.0
            && self.launch_speed_min < self.launch_speed_max;
        if !speed_ok {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.launch_speed_min,
                max: self.launch_speed_max,
            });
        }
        // Without downward pull a fruit never falls back out
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        // Spawn x is drawn from [radius, width - radius]
        if self.width < 2.0 * self.radius_max as f32 {
            return Err(ConfigError::PlayfieldTooNarrow {
                width: self.width,
                radius: self.radius_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 800.0);
        assert_eq!(config.round_duration_secs, 40.0);
        assert_eq!(config.max_trail_length, 15);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SessionConfig::from_json_str(r#"{ "round_duration_secs": 10.0 }"#).unwrap();
        assert_eq!(config.round_duration_secs, 10.0);
        assert_eq!(config.spawn_interval_ticks, 40);
        assert_eq!(config.height, 600.0);
    }

    #[test]
    fn test_rejects_bad_playfield() {
        let config = SessionConfig {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPlayfield { .. })
        ));

        let config = SessionConfig {
            height: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_round_duration() {
        let config = SessionConfig {
            round_duration_secs: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRoundDuration(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = SessionConfig {
            radius_min: 50,
            radius_max: 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadiusRange { .. })
        ));

        let config = SessionConfig {
            launch_speed_min: 30.0,
            launch_speed_max: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        for gravity in [0.0, -0.5, f32::INFINITY] {
            let config = SessionConfig {
                gravity,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidGravity(_))
            ));
        }
    }

    #[test]
    fn test_rejects_narrow_playfield() {
        let config = SessionConfig {
            width: 60.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlayfieldTooNarrow { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SessionConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

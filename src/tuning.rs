//! Data-driven game balance
//!
//! Every gameplay number the simulation reads comes from here. Defaults match
//! the classic game; a `GameConfig` JSON blob can override any subset.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::*;

/// Gameplay numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player sprite edge length (px)
    pub player_size: f32,
    /// Base player speed (px per tick)
    pub player_speed: f32,
    /// Collectible edge length (px)
    pub collectible_size: f32,
    /// Hazard edge length (px)
    pub hazard_size: f32,
    /// Hazard speed per axis (px per tick)
    pub hazard_speed: f32,
    /// Boost pickup edge length (px)
    pub boost_size: f32,
    /// Player speed multiplier while boosted
    pub boost_multiplier: f32,
    /// Wall-clock boost duration (ms)
    pub boost_duration_ms: f64,
    /// Countdown per level (seconds)
    pub level_duration_secs: f32,
    /// Collectibles per level = level + extra_collectibles
    pub extra_collectibles: u32,
    /// Hazards per level = level + extra_hazards
    pub extra_hazards: u32,
    /// Tap movement release delay (ms)
    pub tap_release_ms: f64,
    /// Free space kept around the player when spawning hazards (px)
    pub spawn_clearance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            collectible_size: COLLECTIBLE_SIZE,
            hazard_size: HAZARD_SIZE,
            hazard_speed: HAZARD_SPEED,
            boost_size: BOOST_SIZE,
            boost_multiplier: BOOST_MULTIPLIER,
            boost_duration_ms: BOOST_DURATION_MS,
            level_duration_secs: LEVEL_DURATION_SECS,
            extra_collectibles: EXTRA_COLLECTIBLES,
            extra_hazards: EXTRA_HAZARDS,
            tap_release_ms: TAP_RELEASE_MS,
            spawn_clearance: SPAWN_CLEARANCE,
        }
    }
}

impl Tuning {
    /// Number of collectibles spawned for a level
    pub fn collectibles_for_level(&self, level: u32) -> usize {
        (level + self.extra_collectibles) as usize
    }

    /// Number of hazards spawned for a level
    pub fn hazards_for_level(&self, level: u32) -> usize {
        (level + self.extra_hazards) as usize
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("player_size", self.player_size),
            ("collectible_size", self.collectible_size),
            ("hazard_size", self.hazard_size),
            ("boost_size", self.boost_size),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("player_speed", self.player_speed),
            ("hazard_speed", self.hazard_speed),
            ("spawn_clearance", self.spawn_clearance),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if !(self.boost_multiplier.is_finite() && self.boost_multiplier >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "boost_multiplier must be at least 1, got {}",
                self.boost_multiplier
            )));
        }
        if !(self.level_duration_secs.is_finite() && self.level_duration_secs > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "level_duration_secs must be positive, got {}",
                self.level_duration_secs
            )));
        }
        if !(self.boost_duration_ms >= 0.0 && self.tap_release_ms >= 0.0) {
            return Err(ConfigError::Invalid(
                "durations must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let tuning = Tuning::default();
        for level in 1..=20 {
            assert_eq!(tuning.collectibles_for_level(level), level as usize + 4);
            assert_eq!(tuning.hazards_for_level(level), level as usize + 1);
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "hazard_speed": 3.5 }"#).unwrap();
        assert_eq!(tuning.hazard_speed, 3.5);
        assert_eq!(tuning.player_size, PLAYER_SIZE);
    }

    #[test]
    fn test_rejects_zero_size() {
        let tuning = Tuning {
            hazard_size: 0.0,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("hazard_size"));
    }

    #[test]
    fn test_rejects_slowing_boost() {
        let tuning = Tuning {
            boost_multiplier: 0.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}

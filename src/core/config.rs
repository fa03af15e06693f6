//! Host tuning loaded from an external RON file.
//!
//! Movement and physics numbers live here so they can be tweaked without
//! recompiling. Gameplay rules (trade radius, power-up length, prices) are
//! constants next to the code that enforces them.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::world::DataLoadError;

/// Where the game configuration lives.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Horizontal run speed in pixels per second
    pub move_speed: f32,
    /// Upward velocity of a normal jump
    pub jump_impulse: f32,
    /// Upward velocity of a jump while the flute is active
    pub boosted_jump_impulse: f32,
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,
    /// Restitution of the player body
    pub player_bounce: f32,
    /// Player spawn point in screen space
    pub player_start: (f32, f32),
    /// Portal spawn point in screen space
    pub portal_position: (f32, f32),
    /// Fixed RNG seed for fruit placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_speed: 160.0,
            jump_impulse: 330.0,
            boosted_jump_impulse: 430.0,
            gravity: 300.0,
            player_bounce: 0.2,
            player_start: (100.0, 450.0),
            portal_position: (750.0, 100.0),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse configuration from RON text. Missing fields take defaults.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })
    }

    /// Load configuration from disk, falling back to defaults.
    pub fn load() -> Self {
        let result = fs::read_to_string(CONFIG_PATH)
            .map_err(|e| DataLoadError::ReadError {
                path: CONFIG_PATH.to_string(),
                details: e.to_string(),
            })
            .and_then(|contents| Self::from_ron(&contents, CONFIG_PATH));

        match result {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ DataLoadError::ReadError { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Jump velocity for the current power-up state.
    pub fn jump_velocity(&self, powered: bool) -> f32 {
        if powered {
            self.boosted_jump_impulse
        } else {
            self.jump_impulse
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_file_matches_defaults() {
        let contents = include_str!("../../assets/data/game_config.ron");
        let config = GameConfig::from_ron(contents, CONFIG_PATH).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = GameConfig::from_ron("(move_speed: 200.0, seed: Some(9))", "inline").unwrap();
        assert_eq!(config.move_speed, 200.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.jump_impulse, 330.0);
    }

    #[test]
    fn flute_boosts_the_jump() {
        let config = GameConfig::default();
        assert_eq!(config.jump_velocity(false), 330.0);
        assert_eq!(config.jump_velocity(true), 430.0);
    }

    #[test]
    fn bad_config_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_ron("(move_speed: \"fast\")", "inline"),
            Err(DataLoadError::ParseError { .. })
        ));
    }
}

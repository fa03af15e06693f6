//! Player plugin - movement and jumping.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles player movement. Spawning is done by the world
/// when a level is built.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}

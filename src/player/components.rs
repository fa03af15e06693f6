//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Tracks whether the player can jump this frame.
#[derive(Component, Default)]
pub struct MovementState {
    pub is_grounded: bool,
}

/// Player sprite size in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);

/// Normal player color.
pub const PLAYER_COLOR: Color = Color::srgb(0.3, 0.5, 0.9);

/// Player color while the flute is active.
pub const POWERED_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

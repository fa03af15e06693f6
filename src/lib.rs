//! The Legend of Kokopelli - a side-on platformer about fruit, merchants,
//! and a magic flute, built on Bevy.
//!
//! # Architecture
//!
//! Gameplay state lives in one [`game::GameSession`] resource. Bevy systems
//! read input and report overlaps as events; pure functions decide what those
//! events mean; the world and HUD then follow the session.
//!
//! - **Core**: Game states, gameplay system sets, events, configuration
//! - **Economy**: Fruit kinds, the inventory, score, and trading
//! - **Game**: The session and level progression
//! - **Interaction**: Overlap detection and resolution
//! - **Player**: Side-on movement and jumping
//! - **Power-up**: The flute and its timed jump boost
//! - **World**: Level layouts, the entity registry, and spawning
//! - **UI**: HUD text and the completion message

pub mod core;
pub mod economy;
pub mod game;
pub mod interaction;
pub mod player;
pub mod powerup;
pub mod ui;
pub mod world;

#[cfg(test)]
mod testing;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct KokopelliPlugin;

impl Plugin for KokopelliPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Overlaps and trading
            .add_plugins(interaction::InteractionPlugin)

            // Flute
            .add_plugins(powerup::PowerUpPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}

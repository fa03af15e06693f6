//! Player module - player entity and movement.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{horizontal_velocity, spawn_player};
pub use plugin::PlayerPlugin;

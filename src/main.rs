//! The Legend of Kokopelli - Entry Point
//!
//! Controls:
//! - Left/Right arrows: Move
//! - Up arrow: Jump
//! - Space: Play the flute (higher jumps for a moment)
//! - E: Trade with the nearby merchant

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "The Legend of Kokopelli".to_string(),
                resolution: (800.0, 600.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))

        // Our game plugin
        .add_plugins(legend_of_kokopelli::KokopelliPlugin)

        .run();
}

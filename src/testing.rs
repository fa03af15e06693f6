//! Headless app setup shared by the plugin tests.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::core::{CorePlugin, GameState};
use crate::interaction::InteractionPlugin;
use crate::player::{Player, PlayerPlugin};
use crate::powerup::PowerUpPlugin;
use crate::world::WorldPlugin;

/// Every gameplay plugin without rendering or physics, already in `Playing`.
pub fn gameplay_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((
            CorePlugin,
            WorldPlugin,
            PlayerPlugin,
            InteractionPlugin,
            PowerUpPlugin,
        ));

    // Loading runs on the first frame, Playing is entered on the next
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::Playing);
    app
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn player(app: &mut App) -> (Entity, Vec3) {
    let mut query = app
        .world_mut()
        .query_filtered::<(Entity, &Transform), With<Player>>();
    let (entity, transform) = query.single(app.world());
    (entity, transform.translation)
}

/// Put every entity carrying `M` where the player stands.
pub fn move_onto_player<M: Component>(app: &mut App) {
    let (_, position) = player(app);
    let mut query = app
        .world_mut()
        .query_filtered::<&mut Transform, With<M>>();
    for mut transform in query.iter_mut(app.world_mut()) {
        transform.translation = position;
    }
}

pub fn count<M: Component>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<(), With<M>>();
    query.iter(app.world()).count()
}

//! World plugin - level construction, rebuilds, and despawning collected fruit.

use bevy::prelude::*;

use super::spawning::{build_level, spawn_world_bounds, FruitBody, LevelEntity};
use crate::core::{GameConfig, GameState, GameplaySet, LevelStartedEvent};
use crate::game::GameSession;
use crate::player::spawn_player;

/// World plugin - keeps Bevy entities in line with the session's level.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), (spawn_bounds, setup_level))
            .add_systems(
                Update,
                (despawn_collected_fruit, rebuild_level)
                    .chain()
                    .in_set(GameplaySet::Apply),
            );
    }
}

fn spawn_bounds(mut commands: Commands) {
    spawn_world_bounds(&mut commands);
}

/// Set up the first level from the session.
fn setup_level(mut commands: Commands, session: Res<GameSession>, config: Res<GameConfig>) {
    spawn_current_level(&mut commands, &session, &config);
}

fn spawn_current_level(commands: &mut Commands, session: &GameSession, config: &GameConfig) {
    let Some(layout) = session.current_layout() else {
        warn!("No layout for level {}, nothing to build", session.current_level());
        return;
    };

    info!("Building level {}", layout.level_number);
    build_level(
        commands,
        layout,
        session.layouts().base_platform,
        session.registry(),
        config.portal_position,
    );
    spawn_player(commands, config);
}

/// Remove bodies whose fruit is no longer in the registry.
fn despawn_collected_fruit(
    mut commands: Commands,
    session: Res<GameSession>,
    fruit_query: Query<(Entity, &FruitBody)>,
) {
    let registry = session.registry();
    for (entity, body) in fruit_query.iter() {
        if registry.fruit(body.0).is_none() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Tear down the old level and build the new one after the portal is taken.
fn rebuild_level(
    mut commands: Commands,
    mut level_started: EventReader<LevelStartedEvent>,
    session: Res<GameSession>,
    config: Res<GameConfig>,
    level_query: Query<Entity, With<LevelEntity>>,
) {
    let Some(event) = level_started.read().last() else {
        return;
    };
    debug!("Rebuilding world for level {}", event.level);

    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    spawn_current_level(&mut commands, &session, &config);
}

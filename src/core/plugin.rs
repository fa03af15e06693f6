//! Core plugin that sets up game states, events, and data loading.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::states::*;
use crate::game::GameSession;
use crate::world::load_level_table;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Playing, Complete)
/// - Global events (OverlapEvent, LevelStartedEvent, etc.)
/// - The gameplay system set ordering
/// - Loading of layouts and configuration into a `GameSession`
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<OverlapEvent>()
            .add_event::<TradeRequestEvent>()
            .add_event::<LevelStartedEvent>()
            .add_event::<GameCompleteEvent>()

            // Gameplay ordering, only while a level is being played
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Detect,
                    GameplaySet::Resolve,
                    GameplaySet::Apply,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )

            // Read data files, then start playing
            .add_systems(
                OnEnter(GameState::Loading),
                (load_game_data, finish_loading).chain(),
            )
            .add_systems(OnEnter(GameState::Playing), configure_physics)
            .add_systems(Update, enter_complete.in_set(GameplaySet::Apply))
            .add_systems(OnEnter(GameState::Complete), freeze_physics);
    }
}

/// Build the session from the data files.
fn load_game_data(mut commands: Commands) {
    let config = GameConfig::load();
    let layouts = load_level_table();

    if let Some(seed) = config.seed {
        info!("Using fixed fruit seed {}", seed);
    }

    commands.insert_resource(GameSession::new(layouts, config.seed));
    commands.insert_resource(config);
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// Apply configured gravity to the physics world.
fn configure_physics(config: Res<GameConfig>, mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.gravity = Vec2::new(0.0, -config.gravity);
    }
}

/// Leave gameplay once the final level has been cleared.
fn enter_complete(
    mut completions: EventReader<GameCompleteEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Some(event) = completions.read().last() {
        info!("Game complete with a final score of {}", event.final_score);
        next_state.set(GameState::Complete);
    }
}

/// Stop all bodies where they are.
fn freeze_physics(mut rapier_config: Query<&mut RapierConfiguration>) {
    for mut cfg in rapier_config.iter_mut() {
        cfg.physics_pipeline_active = false;
    }
}

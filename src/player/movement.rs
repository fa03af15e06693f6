//! Side-on player movement and jumping.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::core::{GameConfig, GameplaySet};
use crate::game::GameSession;
use crate::world::{screen_to_world, terrain_only, Hitbox, LevelEntity, PLAYER_GROUP};

/// How far below the feet the ground probe reaches.
const GROUND_PROBE: f32 = 2.0;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Update,
        (ground_check, player_movement)
            .chain()
            .in_set(GameplaySet::Input),
    );
}

/// Horizontal velocity for the held arrow keys. Left wins if both are down.
pub fn horizontal_velocity(left: bool, right: bool, speed: f32) -> f32 {
    if left {
        -speed
    } else if right {
        speed
    } else {
        0.0
    }
}

/// Probe straight down from the player's feet for terrain.
fn ground_check(
    rapier_context: Query<&RapierContext>,
    mut player_query: Query<(Entity, &Transform, &mut MovementState), With<Player>>,
) {
    let Ok((player_entity, transform, mut movement_state)) = player_query.get_single_mut() else {
        return;
    };
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    // Start just inside the bottom edge so a body resting on a platform hits it
    let ray_origin = transform.translation.truncate() - Vec2::Y * (PLAYER_SIZE.y / 2.0 - 1.0);
    let filter = QueryFilter::default()
        .exclude_collider(player_entity)
        .groups(terrain_only(PLAYER_GROUP));

    movement_state.is_grounded = context
        .cast_ray(ray_origin, Vec2::NEG_Y, GROUND_PROBE + 1.0, true, filter)
        .is_some();
}

/// Arrow keys move, Up jumps from the ground. The flute makes jumps higher.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<GameConfig>,
    session: Res<GameSession>,
    mut player_query: Query<(&MovementState, &mut Velocity), With<Player>>,
) {
    let Ok((movement_state, mut velocity)) = player_query.get_single_mut() else {
        return;
    };

    velocity.linvel.x = horizontal_velocity(
        keyboard.pressed(KeyCode::ArrowLeft),
        keyboard.pressed(KeyCode::ArrowRight),
        config.move_speed,
    );

    if keyboard.pressed(KeyCode::ArrowUp) && movement_state.is_grounded {
        velocity.linvel.y = config.jump_velocity(session.power_up_active(time.elapsed()));
    }
}

/// Spawn the player at its configured start position.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig) -> Entity {
    let position = screen_to_world(config.player_start.into());

    commands
        .spawn((
            Player,
            MovementState::default(),
            Hitbox::from_size(PLAYER_SIZE),
            Sprite::from_color(PLAYER_COLOR, PLAYER_SIZE),
            Transform::from_translation(position.extend(2.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(PLAYER_SIZE.x / 2.0, PLAYER_SIZE.y / 2.0),
            terrain_only(PLAYER_GROUP),
            Velocity::zero(),
            Restitution::coefficient(config.player_bounce),
            LockedAxes::ROTATION_LOCKED,
            LevelEntity,
        ))
        .id()
}

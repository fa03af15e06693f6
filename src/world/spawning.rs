//! Entity spawning functions for level construction.
//!
//! Core records (fruit, merchants, layouts) live in screen space. Everything
//! spawned here is converted into Bevy world space on the way in.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::layout::{LevelConfig, BASE_PLATFORM_SCALE};
use super::registry::{EntityRegistry, Fruit, FruitId, Merchant, MerchantId};
use crate::economy::FruitKind;

/// Size of the play area in pixels.
pub const SCREEN_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Physics membership of the player body.
pub const PLAYER_GROUP: Group = Group::GROUP_1;
/// Platforms and world bounds.
pub const TERRAIN_GROUP: Group = Group::GROUP_2;
/// Fruit, merchants, and the portal.
pub const PICKUP_GROUP: Group = Group::GROUP_3;

const PLATFORM_SIZE: Vec2 = Vec2::new(400.0, 32.0);
const FRUIT_SIZE: Vec2 = Vec2::new(24.0, 24.0);
const MERCHANT_SIZE: Vec2 = Vec2::new(32.0, 32.0);
const PORTAL_SIZE: Vec2 = Vec2::new(48.0, 64.0);
const BOUND_THICKNESS: f32 = 20.0;

/// Marker for everything torn down when a level is rebuilt.
#[derive(Component)]
pub struct LevelEntity;

/// Axis-aligned overlap box, as half extents around the transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    pub half_extents: Vec2,
}

impl Hitbox {
    pub fn from_size(size: Vec2) -> Self {
        Self {
            half_extents: size / 2.0,
        }
    }
}

/// Body of a collectible fruit.
#[derive(Component, Debug, Clone, Copy)]
pub struct FruitBody(pub FruitId);

/// Body of a merchant.
#[derive(Component, Debug, Clone, Copy)]
pub struct MerchantBody(pub MerchantId);

/// Marker for the level exit.
#[derive(Component)]
pub struct Portal;

/// Marker for solid platforms.
#[derive(Component)]
pub struct Platform;

/// Convert a screen point (origin top-left, y down) to world space.
pub fn screen_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x - SCREEN_SIZE.x / 2.0, SCREEN_SIZE.y / 2.0 - point.y)
}

/// Convert a world point back to screen space.
pub fn world_to_screen(point: Vec2) -> Vec2 {
    Vec2::new(point.x + SCREEN_SIZE.x / 2.0, SCREEN_SIZE.y / 2.0 - point.y)
}

/// Collision groups for a body that only ever lands on terrain.
pub fn terrain_only(membership: Group) -> CollisionGroups {
    CollisionGroups::new(membership, TERRAIN_GROUP)
}

fn fruit_color(kind: FruitKind) -> Color {
    match kind {
        FruitKind::Apple => Color::srgb(0.85, 0.15, 0.15),
        FruitKind::Banana => Color::srgb(0.95, 0.85, 0.2),
        FruitKind::Pineapple => Color::srgb(0.9, 0.55, 0.1),
    }
}

/// Spawn every level-scoped entity except the player.
pub fn build_level(
    commands: &mut Commands,
    config: &LevelConfig,
    base_platform: (f32, f32),
    registry: &EntityRegistry,
    portal_position: (f32, f32),
) {
    spawn_platform(commands, base_platform.into(), BASE_PLATFORM_SCALE);
    for &position in &config.platform_positions {
        spawn_platform(commands, position.into(), 1.0);
    }

    for fruit in registry.fruits() {
        spawn_fruit(commands, fruit);
    }
    for merchant in registry.merchants() {
        spawn_merchant(commands, merchant);
    }

    spawn_portal(commands, portal_position.into());

    info!(
        "Built level {}: {} platforms, {} fruit, {} merchants",
        config.level_number,
        config.platform_positions.len() + 1,
        registry.fruit_count(),
        registry.merchants().len()
    );
}

/// Spawn a solid platform centred on a screen position.
pub fn spawn_platform(commands: &mut Commands, position: Vec2, scale: f32) {
    let size = PLATFORM_SIZE * scale;
    commands.spawn((
        Platform,
        Sprite::from_color(Color::srgb(0.35, 0.6, 0.25), size),
        Transform::from_translation(screen_to_world(position).extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        CollisionGroups::new(TERRAIN_GROUP, Group::ALL),
        LevelEntity,
    ));
}

/// Spawn a fruit that falls onto platforms and can be walked through.
pub fn spawn_fruit(commands: &mut Commands, fruit: &Fruit) {
    commands.spawn((
        FruitBody(fruit.id),
        Hitbox::from_size(FRUIT_SIZE),
        Sprite::from_color(fruit_color(fruit.kind), FRUIT_SIZE),
        Transform::from_translation(screen_to_world(fruit.position).extend(1.0)),
        RigidBody::Dynamic,
        Collider::cuboid(FRUIT_SIZE.x / 2.0, FRUIT_SIZE.y / 2.0),
        terrain_only(PICKUP_GROUP),
        LockedAxes::ROTATION_LOCKED,
        LevelEntity,
    ));
}

/// Spawn an immovable merchant.
pub fn spawn_merchant(commands: &mut Commands, merchant: &Merchant) {
    commands.spawn((
        MerchantBody(merchant.id),
        Hitbox::from_size(MERCHANT_SIZE),
        Sprite::from_color(Color::srgb(0.55, 0.35, 0.2), MERCHANT_SIZE),
        Transform::from_translation(screen_to_world(merchant.position).extend(1.0)),
        RigidBody::Fixed,
        Collider::cuboid(MERCHANT_SIZE.x / 2.0, MERCHANT_SIZE.y / 2.0),
        terrain_only(PICKUP_GROUP),
        LevelEntity,
    ));
}

/// Spawn the level exit. It drops onto whatever platform is below it.
pub fn spawn_portal(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        Portal,
        Hitbox::from_size(PORTAL_SIZE),
        Sprite::from_color(Color::srgb(0.5, 0.2, 0.8), PORTAL_SIZE),
        Transform::from_translation(screen_to_world(position).extend(0.5)),
        RigidBody::Dynamic,
        Collider::cuboid(PORTAL_SIZE.x / 2.0, PORTAL_SIZE.y / 2.0),
        terrain_only(PICKUP_GROUP),
        LockedAxes::ROTATION_LOCKED,
        LevelEntity,
    ));
}

/// Invisible walls around the screen so nothing leaves the play area.
pub fn spawn_world_bounds(commands: &mut Commands) {
    let half = SCREEN_SIZE / 2.0;
    let t = BOUND_THICKNESS / 2.0;
    let walls = [
        (Vec2::new(-half.x - t, 0.0), Vec2::new(t, half.y + BOUND_THICKNESS)),
        (Vec2::new(half.x + t, 0.0), Vec2::new(t, half.y + BOUND_THICKNESS)),
        (Vec2::new(0.0, half.y + t), Vec2::new(half.x + BOUND_THICKNESS, t)),
        (Vec2::new(0.0, -half.y - t), Vec2::new(half.x + BOUND_THICKNESS, t)),
    ];

    for (center, half_extents) in walls {
        commands.spawn((
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            CollisionGroups::new(TERRAIN_GROUP, Group::ALL),
        ));
    }
}

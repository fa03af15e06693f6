//! Host-side overlap detection and input for interactions.
//!
//! Pickups never block the player, so their contact is reported as an
//! axis-aligned box test each frame, the same way arcade overlap checks work.

use bevy::prelude::*;

use crate::core::{OverlapEvent, OverlapTarget, TradeRequestEvent};
use crate::player::Player;
use crate::world::{world_to_screen, FruitBody, Hitbox, MerchantBody, Portal};

/// Whether two boxes centred at `a` and `b` intersect.
pub fn boxes_overlap(a: Vec2, a_half: Vec2, b: Vec2, b_half: Vec2) -> bool {
    let gap = (a - b).abs();
    gap.x < a_half.x + b_half.x && gap.y < a_half.y + b_half.y
}

/// Report everything the player is touching this frame.
pub fn detect_overlaps(
    player_query: Query<(Entity, &Transform, &Hitbox), With<Player>>,
    fruit_query: Query<(&Transform, &Hitbox, &FruitBody)>,
    merchant_query: Query<(&Transform, &Hitbox, &MerchantBody)>,
    portal_query: Query<(&Transform, &Hitbox), With<Portal>>,
    mut overlaps: EventWriter<OverlapEvent>,
) {
    let Ok((player, player_transform, player_box)) = player_query.get_single() else {
        return;
    };
    let origin = player_transform.translation.truncate();
    let touching = |transform: &Transform, hitbox: &Hitbox| {
        boxes_overlap(
            origin,
            player_box.half_extents,
            transform.translation.truncate(),
            hitbox.half_extents,
        )
    };

    let fruit = fruit_query
        .iter()
        .filter(|&(transform, hitbox, _)| touching(transform, hitbox))
        .map(|(_, _, body)| OverlapTarget::Fruit(body.0));
    let merchants = merchant_query
        .iter()
        .filter(|&(transform, hitbox, _)| touching(transform, hitbox))
        .map(|(_, _, body)| OverlapTarget::Merchant(body.0));
    let portal = portal_query
        .iter()
        .filter(|&(transform, hitbox)| touching(transform, hitbox))
        .map(|_| OverlapTarget::Portal);

    overlaps.send_batch(
        fruit
            .chain(merchants)
            .chain(portal)
            .map(|target| OverlapEvent { source: player, target }),
    );
}

/// Turn the trade key into a request carrying the player's position.
pub fn trade_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    player_query: Query<&Transform, With<Player>>,
    mut requests: EventWriter<TradeRequestEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Ok(transform) = player_query.get_single() else {
        return;
    };

    requests.send(TradeRequestEvent {
        position: world_to_screen(transform.translation.truncate()),
    });
}

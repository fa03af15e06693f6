//! Power-up plugin - flute input, expiry, and the player tint.

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::game::GameSession;
use crate::player::{Player, PLAYER_COLOR, POWERED_COLOR};

/// Power-up plugin - handles the flute key and its visual indicator.
pub struct PowerUpPlugin;

impl Plugin for PowerUpPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, flute_input.in_set(GameplaySet::Input))
            .add_systems(Update, expire_power_up.in_set(GameplaySet::Resolve))
            .add_systems(Update, tint_player.in_set(GameplaySet::Apply));
    }
}

/// Space plays the flute.
fn flute_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut session: ResMut<GameSession>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    if session.trigger_power_up(time.elapsed()) {
        info!("Flute played, jump boosted");
    }
}

fn expire_power_up(time: Res<Time>, mut session: ResMut<GameSession>) {
    if session.expire_power_up(time.elapsed()) {
        info!("Flute effect wore off");
    }
}

/// Yellow while the flute is active.
fn tint_player(
    time: Res<Time>,
    session: Res<GameSession>,
    mut player_query: Query<&mut Sprite, With<Player>>,
) {
    let Ok(mut sprite) = player_query.get_single_mut() else {
        return;
    };

    let color = if session.power_up_active(time.elapsed()) {
        POWERED_COLOR
    } else {
        PLAYER_COLOR
    };
    if sprite.color != color {
        sprite.color = color;
    }
}

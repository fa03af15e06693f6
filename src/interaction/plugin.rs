//! Interaction plugin - collection, trading, and the portal.

use bevy::prelude::*;

use super::detection::{detect_overlaps, trade_input};
use super::resolver::{refresh_trade_offer, resolve_overlap, resolve_trade, Resolution};
use crate::core::{GameCompleteEvent, GameplaySet, LevelStartedEvent, OverlapEvent, TradeRequestEvent};
use crate::game::{Advance, GameSession};
use crate::player::Player;
use crate::world::world_to_screen;

/// Interaction plugin - turns what the player touches into game effects.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, trade_input.in_set(GameplaySet::Input))
            .add_systems(Update, detect_overlaps.in_set(GameplaySet::Detect))
            .add_systems(
                Update,
                (resolve_overlaps, resolve_trade_requests, hide_distant_offer)
                    .chain()
                    .in_set(GameplaySet::Resolve),
            );
    }
}

/// Apply this frame's overlaps to the session.
///
/// Once the portal moves the session on, the rest of the batch refers to the
/// old level and is dropped.
fn resolve_overlaps(
    mut overlaps: EventReader<OverlapEvent>,
    mut session: ResMut<GameSession>,
    players: Query<(), With<Player>>,
    mut level_started: EventWriter<LevelStartedEvent>,
    mut game_complete: EventWriter<GameCompleteEvent>,
) {
    let mut advanced = false;

    for event in overlaps.read() {
        // Reports from a despawned player body belong to an old level
        if !players.contains(event.source) {
            continue;
        }
        match resolve_overlap(&mut session, event) {
            Resolution::Collected { fruit, kind } => {
                debug!(
                    "Collected {} from slot {} ({} left)",
                    kind,
                    fruit.index,
                    session.registry().fruit_count()
                );
            }
            Resolution::Advanced(Advance::NextLevel(level)) => {
                info!("Portal reached, starting level {}", level);
                level_started.send(LevelStartedEvent { level });
                advanced = true;
                break;
            }
            Resolution::Advanced(Advance::Complete) => {
                game_complete.send(GameCompleteEvent {
                    final_score: session.score().value(),
                });
                advanced = true;
                break;
            }
            _ => {}
        }
    }

    if advanced {
        overlaps.clear();
    }
}

fn resolve_trade_requests(
    mut requests: EventReader<TradeRequestEvent>,
    mut session: ResMut<GameSession>,
) {
    for request in requests.read() {
        match resolve_trade(&mut session, request.position) {
            Resolution::Traded {
                merchant,
                receipt: Some(receipt),
            } => {
                info!(
                    "Traded {} {}(s) with merchant {} for {} points (score {})",
                    receipt.traded,
                    receipt.kind,
                    merchant.0,
                    receipt.payout,
                    session.score().value()
                );
            }
            Resolution::Traded { merchant, receipt: None } => {
                debug!("Nothing to sell to merchant {}", merchant.0);
            }
            _ => {}
        }
    }
}

/// Hide the trade offer once the player has walked away from every merchant.
fn hide_distant_offer(
    player_query: Query<&Transform, With<Player>>,
    mut session: ResMut<GameSession>,
) {
    let Ok(transform) = player_query.get_single() else {
        return;
    };
    if session.trade_offer().is_none() {
        return;
    }
    refresh_trade_offer(&mut session, world_to_screen(transform.translation.truncate()));
}

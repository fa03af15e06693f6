//! Routes overlaps and trade requests to their effect on the session.
//!
//! Every function here is safe to call repeatedly with the same input in the
//! same frame: a fruit can only be removed once, an offer is a level-sensed
//! flag, and a trade empties the stock it pays for.

use bevy::math::Vec2;

use crate::core::{OverlapEvent, OverlapTarget};
use crate::economy::{trade, FruitKind, TradeReceipt, TRADE_RADIUS};
use crate::game::{Advance, GameSession, LevelState};
use crate::world::{FruitId, MerchantId};

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Collected { fruit: FruitId, kind: FruitKind },
    OfferShown(MerchantId),
    /// A trade was attempted at `merchant`. `receipt` is `None` when the
    /// player had nothing the merchant wanted.
    Traded {
        merchant: MerchantId,
        receipt: Option<TradeReceipt>,
    },
    Advanced(Advance),
    /// Nothing changed.
    Ignored,
}

/// Apply one overlap reported by the host.
pub fn resolve_overlap(session: &mut GameSession, event: &OverlapEvent) -> Resolution {
    if let OverlapTarget::Portal = event.target {
        return match session.try_advance(true) {
            Advance::Blocked => Resolution::Ignored,
            advance => Resolution::Advanced(advance),
        };
    }

    let Some((_, level)) = session.active_mut() else {
        return Resolution::Ignored;
    };

    match event.target {
        OverlapTarget::Fruit(id) => collect_fruit(level, id),
        OverlapTarget::Merchant(id) => show_offer(level, id),
        OverlapTarget::Portal => Resolution::Ignored,
    }
}

/// Remove a fruit and count it, as one step.
fn collect_fruit(level: &mut LevelState, id: FruitId) -> Resolution {
    match level.registry.remove_fruit(id) {
        Some(fruit) => {
            level.inventory.collect(fruit.kind);
            Resolution::Collected {
                fruit: id,
                kind: fruit.kind,
            }
        }
        None => Resolution::Ignored,
    }
}

fn show_offer(level: &mut LevelState, id: MerchantId) -> Resolution {
    if level.registry.merchant(id).is_none() {
        return Resolution::Ignored;
    }
    level.trade_offer = Some(id);
    Resolution::OfferShown(id)
}

/// Hide the offer once no merchant is in reach. Returns true when it hides.
pub fn refresh_trade_offer(session: &mut GameSession, player: Vec2) -> bool {
    let Some((_, level)) = session.active_mut() else {
        return false;
    };
    if level.trade_offer.is_none() || level.registry.nearest_merchant(player, TRADE_RADIUS).is_some() {
        return false;
    }
    level.trade_offer = None;
    true
}

/// Trade with the nearest merchant in reach of `player`.
///
/// Distance is checked here, at the moment of the request, rather than
/// trusting whichever merchant last showed an offer.
pub fn resolve_trade(session: &mut GameSession, player: Vec2) -> Resolution {
    let Some((run, level)) = session.active_mut() else {
        return Resolution::Ignored;
    };
    let Some(merchant) = level.registry.nearest_merchant(player, TRADE_RADIUS) else {
        return Resolution::Ignored;
    };
    let (merchant, speciality, multiplier) = (merchant.id, merchant.speciality, merchant.multiplier);

    let receipt = trade(&mut level.inventory, &mut run.score, speciality, multiplier);
    level.trade_offer = None;

    Resolution::Traded { merchant, receipt }
}

//! Score accumulation and the merchant trade rule.

use super::inventory::{FruitKind, Inventory};

/// Maximum distance (exclusive) between player and merchant for a trade.
pub const TRADE_RADIUS: f32 = 100.0;

/// Run-wide score. Only trades add to it and nothing ever subtracts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }

    fn add(&mut self, amount: u64) {
        self.0 = self.0.saturating_add(amount);
    }
}

/// What a completed trade exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeReceipt {
    pub kind: FruitKind,
    /// Number of fruit handed over.
    pub traded: u32,
    /// Score awarded for them.
    pub payout: u64,
}

/// Score for selling `count` fruit of `kind` at `multiplier`, rounded down.
///
/// The product is taken in `f64` so multipliers like 1.8 land on the same
/// integers a double-precision calculator would give.
pub fn payout(count: u32, kind: FruitKind, multiplier: f64) -> u64 {
    let base = u64::from(count) * u64::from(kind.base_value());
    (base as f64 * multiplier).floor() as u64
}

/// Sell every `speciality` fruit in the inventory.
///
/// Returns `None` and changes nothing when the player holds none of them.
pub fn trade(
    inventory: &mut Inventory,
    score: &mut Score,
    speciality: FruitKind,
    multiplier: f64,
) -> Option<TradeReceipt> {
    if inventory.count(speciality) == 0 {
        return None;
    }

    let traded = inventory.take(speciality);
    let payout = payout(traded, speciality, multiplier);
    score.add(payout);

    Some(TradeReceipt {
        kind: speciality,
        traded,
        payout,
    })
}

//! Global events used for cross-system communication.
//!
//! Detection systems describe what the host engine saw; resolver systems
//! turn those records into state changes and announce the results.

use bevy::prelude::*;

use crate::world::{FruitId, MerchantId};

/// What the player body is touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapTarget {
    Fruit(FruitId),
    Merchant(MerchantId),
    Portal,
}

/// Sent every frame the player overlaps a fruit, merchant, or the portal.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapEvent {
    /// The player entity
    pub source: Entity,
    pub target: OverlapTarget,
}

/// Sent when the player presses the trade key.
#[derive(Event, Debug, Clone, Copy)]
pub struct TradeRequestEvent {
    /// Player position in screen space at the moment of the key press
    pub position: Vec2,
}

/// Sent after the session has moved on to a new level.
#[derive(Event, Debug, Clone, Copy)]
pub struct LevelStartedEvent {
    pub level: u32,
}

/// Sent once, when the final level is cleared.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameCompleteEvent {
    pub final_score: u64,
}

//! Run- and level-scoped game state, and the level progression rules.

use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::economy::{Inventory, Score};
use crate::powerup::PowerUp;
use crate::world::{EntityRegistry, Layout, LevelConfig, LevelTable, MerchantId};

/// Where the run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing(u32),
    /// The last level was cleared. Nothing changes from here on.
    Complete,
}

/// Outcome of a portal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Fruit remains, the player is not on the portal, or the run is over.
    Blocked,
    /// The new level's state has been built.
    NextLevel(u32),
    /// The last level was cleared.
    Complete,
}

/// State that survives level transitions.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub score: Score,
}

/// State rebuilt from scratch at every level start.
#[derive(Debug, Clone, Default)]
pub struct LevelState {
    pub inventory: Inventory,
    pub registry: EntityRegistry,
    pub power_up: PowerUp,
    /// Merchant whose offer is on screen, if any.
    pub trade_offer: Option<MerchantId>,
}

/// Fresh level state: empty inventory, new fruit and merchants, no power-up.
pub fn init_level<R: rand::Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> LevelState {
    LevelState {
        inventory: Inventory::default(),
        registry: EntityRegistry::populate(config, rng),
        power_up: PowerUp::default(),
        trade_offer: None,
    }
}

/// The single mutable root of gameplay state.
#[derive(Resource, Debug)]
pub struct GameSession {
    layouts: LevelTable,
    run: RunState,
    level: LevelState,
    current_level: u32,
    complete: bool,
    rng: StdRng,
}

impl GameSession {
    /// Start a run on level 1. A `seed` makes fruit placement reproducible.
    pub fn new(layouts: LevelTable, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let (level, complete) = match layouts.layout_for(1) {
            Layout::Level(config) => (init_level(config, &mut rng), false),
            Layout::Complete => (LevelState::default(), true),
        };

        Self {
            layouts,
            run: RunState::default(),
            level,
            current_level: 1,
            complete,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.complete {
            Phase::Complete
        } else {
            Phase::Playing(self.current_level)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Level being played, or the last one played once complete.
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn score(&self) -> Score {
        self.run.score
    }

    pub fn inventory(&self) -> &Inventory {
        &self.level.inventory
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.level.registry
    }

    pub fn trade_offer(&self) -> Option<MerchantId> {
        self.level.trade_offer
    }

    pub fn layouts(&self) -> &LevelTable {
        &self.layouts
    }

    /// Layout of the level being played. `None` once the run is complete.
    pub fn current_layout(&self) -> Option<&LevelConfig> {
        if self.complete {
            return None;
        }
        match self.layouts.layout_for(self.current_level) {
            Layout::Level(config) => Some(config),
            Layout::Complete => None,
        }
    }

    /// Mutable access to both state tiers, unless gameplay is frozen.
    pub(crate) fn active_mut(&mut self) -> Option<(&mut RunState, &mut LevelState)> {
        if self.complete {
            return None;
        }
        Some((&mut self.run, &mut self.level))
    }

    /// Move to the next level if every fruit is collected and the player is
    /// on the portal.
    pub fn try_advance(&mut self, overlapping_portal: bool) -> Advance {
        if self.complete || !overlapping_portal || !self.level.registry.is_cleared() {
            return Advance::Blocked;
        }

        let next = self.current_level + 1;
        match self.layouts.layout_for(next) {
            Layout::Level(config) => {
                self.level = init_level(config, &mut self.rng);
                self.current_level = next;
                Advance::NextLevel(next)
            }
            Layout::Complete => {
                self.complete = true;
                Advance::Complete
            }
        }
    }

    /// Play the flute. Returns false once gameplay is frozen.
    pub fn trigger_power_up(&mut self, now: Duration) -> bool {
        match self.active_mut() {
            Some((_, level)) => {
                level.power_up.trigger(now);
                true
            }
            None => false,
        }
    }

    /// Clear an elapsed power-up. Returns true on the frame it runs out.
    pub fn expire_power_up(&mut self, now: Duration) -> bool {
        self.level.power_up.expire(now)
    }

    pub fn power_up_active(&self, now: Duration) -> bool {
        self.level.power_up.is_active(now)
    }
}

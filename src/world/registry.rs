//! Live fruit and merchant records for the current level.

use std::ops::RangeInclusive;

use bevy::math::Vec2;
use rand::Rng;

use super::layout::LevelConfig;
use crate::economy::FruitKind;

/// Horizontal spawn range for fruit, inclusive.
pub const FRUIT_SPAWN_X: RangeInclusive<i32> = 50..=750;
/// Vertical spawn range for fruit, inclusive.
pub const FRUIT_SPAWN_Y: RangeInclusive<i32> = 100..=300;

/// Merchant specialities and multipliers, left to right.
pub const MERCHANT_ROSTER: [(FruitKind, f64); 3] = [
    (FruitKind::Apple, 1.5),
    (FruitKind::Banana, 1.8),
    (FruitKind::Pineapple, 2.0),
];

const MERCHANT_FIRST_X: f32 = 200.0;
const MERCHANT_SPACING: f32 = 200.0;
const MERCHANT_Y: f32 = 500.0;

/// Arena slot of a fruit, tagged with the level it was spawned for.
///
/// The level tag keeps a stale overlap from a previous level from ever
/// matching a fresh fruit that reuses the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FruitId {
    pub level: u32,
    pub index: u32,
}

/// Position of a merchant in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MerchantId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: FruitId,
    pub kind: FruitKind,
    /// Spawn position in screen space.
    pub position: Vec2,
    pub base_value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Merchant {
    pub id: MerchantId,
    /// Fixed position in screen space.
    pub position: Vec2,
    pub speciality: FruitKind,
    pub multiplier: f64,
}

/// Create `config.fruit_count` fruit with random kinds and positions.
pub fn spawn_fruits<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Vec<Fruit> {
    (0..config.fruit_count as u32)
        .map(|index| {
            let kind: FruitKind = rng.gen();
            let x = rng.gen_range(FRUIT_SPAWN_X);
            let y = rng.gen_range(FRUIT_SPAWN_Y);
            Fruit {
                id: FruitId {
                    level: config.level_number,
                    index,
                },
                kind,
                position: Vec2::new(x as f32, y as f32),
                base_value: kind.base_value(),
            }
        })
        .collect()
}

/// The fixed merchant line-up: one per fruit kind, evenly spaced.
pub fn spawn_merchants() -> Vec<Merchant> {
    MERCHANT_ROSTER
        .iter()
        .zip(0u32..)
        .map(|(&(speciality, multiplier), index)| Merchant {
            id: MerchantId(index),
            position: Vec2::new(MERCHANT_FIRST_X + index as f32 * MERCHANT_SPACING, MERCHANT_Y),
            speciality,
            multiplier,
        })
        .collect()
}

/// Owns the level's fruit (tombstoned on collection) and merchants.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    fruits: Vec<Option<Fruit>>,
    live: usize,
    merchants: Vec<Merchant>,
}

impl EntityRegistry {
    /// Spawn a full level's worth of entities.
    pub fn populate<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Self {
        Self::new(spawn_fruits(config, rng), spawn_merchants())
    }

    /// Build a registry from existing records. Fruit ids must match their
    /// position in `fruits`.
    pub fn new(fruits: Vec<Fruit>, merchants: Vec<Merchant>) -> Self {
        debug_assert!(fruits
            .iter()
            .zip(0u32..)
            .all(|(fruit, index)| fruit.id.index == index));
        Self {
            live: fruits.len(),
            fruits: fruits.into_iter().map(Some).collect(),
            merchants,
        }
    }

    /// Remove a fruit. Returns `None` if it was already gone or never existed.
    pub fn remove_fruit(&mut self, id: FruitId) -> Option<Fruit> {
        let slot = self.fruits.get_mut(id.index as usize)?;
        if slot.as_ref().is_some_and(|fruit| fruit.id != id) {
            return None;
        }
        let fruit = slot.take()?;
        self.live -= 1;
        Some(fruit)
    }

    pub fn fruit(&self, id: FruitId) -> Option<&Fruit> {
        self.fruits
            .get(id.index as usize)
            .and_then(Option::as_ref)
            .filter(|fruit| fruit.id == id)
    }

    /// Fruit not yet collected.
    pub fn fruits(&self) -> impl Iterator<Item = &Fruit> {
        self.fruits.iter().flatten()
    }

    pub fn fruit_count(&self) -> usize {
        self.live
    }

    /// True once every fruit has been collected.
    pub fn is_cleared(&self) -> bool {
        self.live == 0
    }

    pub fn merchants(&self) -> &[Merchant] {
        &self.merchants
    }

    pub fn merchant(&self, id: MerchantId) -> Option<&Merchant> {
        self.merchants.get(id.0 as usize)
    }

    /// Closest merchant strictly within `radius` of `point`.
    ///
    /// Equal distances resolve to the merchant earliest in the roster.
    pub fn nearest_merchant(&self, point: Vec2, radius: f32) -> Option<&Merchant> {
        self.merchants
            .iter()
            .map(|merchant| (merchant, merchant.position.distance(point)))
            .filter(|&(_, distance)| distance < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(merchant, _)| merchant)
    }
}

//! Fruit kinds and the per-level fruit inventory.

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The fruit a player can pick up and sell to merchants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Apple,
    Banana,
    Pineapple,
}

impl FruitKind {
    /// Every kind, in merchant roster order.
    pub const ALL: [FruitKind; 3] = [FruitKind::Apple, FruitKind::Banana, FruitKind::Pineapple];

    /// Score value of a single fruit before any merchant multiplier.
    pub fn base_value(self) -> u32 {
        match self {
            FruitKind::Apple => 10,
            FruitKind::Banana => 20,
            FruitKind::Pineapple => 30,
        }
    }

    /// Lowercase singular name, as used in trade offers.
    pub fn name(self) -> &'static str {
        match self {
            FruitKind::Apple => "apple",
            FruitKind::Banana => "banana",
            FruitKind::Pineapple => "pineapple",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FruitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform pick over the three kinds.
impl Distribution<FruitKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FruitKind {
        FruitKind::ALL[rng.gen_range(0..FruitKind::ALL.len())]
    }
}

/// Collected-but-unsold fruit, counted per kind.
///
/// Counts are unsigned, so they can never go negative. The only ways down
/// are [`Inventory::take`] (a trade) and [`Inventory::clear`] (a new level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    counts: [u32; 3],
}

impl Inventory {
    /// Add one fruit of `kind`.
    pub fn collect(&mut self, kind: FruitKind) {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_add(1);
    }

    pub fn count(&self, kind: FruitKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Remove every fruit of `kind`, returning how many there were.
    pub fn take(&mut self, kind: FruitKind) -> u32 {
        std::mem::take(&mut self.counts[kind.index()])
    }

    /// Zero all counts.
    pub fn clear(&mut self) {
        self.counts = [0; 3];
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

//! Strings shown on the HUD.

use crate::economy::{FruitKind, Inventory, Score};

pub const COMPLETION_MESSAGE: &str = "Congratulations! Game Complete!";

pub fn score_label(score: Score) -> String {
    format!("Score: {}", score.value())
}

pub fn level_label(level: u32) -> String {
    format!("Level: {level}")
}

/// One line per fruit kind under an "Inventory:" heading.
pub fn inventory_label(inventory: &Inventory) -> String {
    format!(
        "Inventory:\nApples: {}\nBananas: {}\nPineapples: {}",
        inventory.count(FruitKind::Apple),
        inventory.count(FruitKind::Banana),
        inventory.count(FruitKind::Pineapple),
    )
}

/// Offer shown while standing at a merchant. The multiplier prints without a
/// trailing `.0`, so 2.0 reads as "2x".
pub fn trade_offer_label(count: u32, kind: FruitKind, multiplier: f64) -> String {
    format!(
        "Press E to trade {count} {}(s)\nMerchant offers {multiplier}x value!",
        kind.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_hud_format() {
        assert_eq!(score_label(Score::default()), "Score: 0");
        assert_eq!(level_label(3), "Level: 3");
    }

    #[test]
    fn inventory_lists_every_kind() {
        let mut inventory = Inventory::default();
        inventory.collect(FruitKind::Banana);
        inventory.collect(FruitKind::Banana);
        inventory.collect(FruitKind::Pineapple);

        assert_eq!(
            inventory_label(&inventory),
            "Inventory:\nApples: 0\nBananas: 2\nPineapples: 1"
        );
    }

    #[test]
    fn offer_prints_multiplier_compactly() {
        assert_eq!(
            trade_offer_label(2, FruitKind::Pineapple, 2.0),
            "Press E to trade 2 pineapple(s)\nMerchant offers 2x value!"
        );
        assert_eq!(
            trade_offer_label(0, FruitKind::Apple, 1.5),
            "Press E to trade 0 apple(s)\nMerchant offers 1.5x value!"
        );
    }
}

//! UI module - the HUD and its labels.

mod hud;
mod plugin;
mod text;

pub use hud::{InventoryText, LevelText, ScoreText, TradeOfferBox, TradeOfferText};
pub use plugin::UiPlugin;
pub use text::*;

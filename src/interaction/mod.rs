//! Interaction module - overlap detection and resolution.

mod detection;
mod plugin;
mod resolver;

pub use detection::boxes_overlap;
pub use plugin::InteractionPlugin;
pub use resolver::{refresh_trade_offer, resolve_overlap, resolve_trade, Resolution};

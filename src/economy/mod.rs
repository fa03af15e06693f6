//! Economy module - fruit inventory, score, and merchant trades.
//!
//! Nothing here knows about Bevy entities. The interaction layer feeds
//! collections and trades in; the HUD reads the results back out.

mod inventory;
mod trade;

pub use inventory::*;
pub use trade::*;

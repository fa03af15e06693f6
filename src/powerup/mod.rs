//! Power-up module - the flute and its timed jump boost.

mod plugin;
mod timer;

pub use plugin::PowerUpPlugin;
pub use timer::*;

//! World module - level layouts, the entity registry, and spawning.

mod error;
mod layout;
mod plugin;
mod registry;
mod spawning;

pub use error::DataLoadError;
pub use layout::*;
pub use plugin::WorldPlugin;
pub use registry::*;
pub use spawning::*;

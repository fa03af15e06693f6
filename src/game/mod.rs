//! Game module - the session that owns all gameplay state and decides level
//! progression.

mod session;

pub use session::*;

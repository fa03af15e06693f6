//! Game state definitions that control the overall flow of the game.
//!
//! States decide which systems run. Gameplay systems only run while
//! `Playing`; `Complete` leaves the last frame on screen with the
//! congratulations message.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` to read layouts and configuration
/// - `Playing` covers every level; level changes happen inside it
/// - `Complete` once the last level is cleared
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    Playing,
    /// All levels cleared, gameplay frozen
    Complete,
}

/// Ordering for the per-frame gameplay pass.
///
/// Input is read first, the host reports overlaps, the resolver updates the
/// session, and finally the world is brought in line with the session.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Detect,
    Resolve,
    Apply,
}

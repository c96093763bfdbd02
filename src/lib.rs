//! # concentration
//!
//! A memory-matching ("concentration") card game engine.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The crate owns the full game-state machine
//!    (board, selection, turns, scoring) and exposes a [`BoardView`]
//!    snapshot. Rendering, input widgets, and timers live in the driver.
//!
//! 2. **Two modes, one type**: The solo variant (count your moves) and
//!    the versus-computer variant (alternating turns, per-side pair
//!    counts) are parametrized by [`GameMode`] on the same [`Game`].
//!
//! 3. **Deterministic**: All randomness flows through a seedable
//!    [`GameRng`], so a seed plus a selection sequence reproduces the
//!    whole game. Timed delays are modelled as explicit phases the
//!    driver resolves, never as sleeps.
//!
//! ## Modules
//!
//! - `core`: Cards, sides, outcomes, RNG
//! - `game`: Configuration, the `Game` state machine, board views
//! - `opponent`: Pick policies for the computer side

pub mod core;
pub mod game;
pub mod opponent;

// Re-export commonly used types
pub use crate::core::{Card, CardId, GameRng, GameRngState, Outcome, Side, SideMap};

pub use crate::game::{
    BoardView, CardView, Game, GameConfig, GameError, GameMode, MoveRecord, Phase, SelectOutcome,
};

pub use crate::opponent::{LowestFirst, PickPolicy, UniformPicks};

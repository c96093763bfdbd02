//! Core game types: cards, sides, outcomes, RNG.
//!
//! These are the value types the state machine in [`crate::game`] is
//! built from. Nothing here knows about phases or turn order.

pub mod card;
pub mod rng;
pub mod side;

pub use card::{Card, CardId};
pub use rng::{GameRng, GameRngState};
pub use side::{Outcome, Side, SideMap};

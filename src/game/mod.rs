//! The game layer: configuration, the state machine, and board views.

pub mod config;
pub mod moves;
pub mod state;
pub mod view;

pub use config::{GameConfig, GameError, GameMode};
pub use moves::{MoveRecord, SelectOutcome};
pub use state::{Game, Phase};
pub use view::{BoardView, CardView};

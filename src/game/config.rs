//! Game configuration, modes, and errors.
//!
//! `GameConfig` carries everything the state machine needs to deal a
//! board plus the timing hints a presentation layer uses to schedule
//! the reveal window and the computer's staggered picks. The engine
//! itself never sleeps; delays are the driver's business.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Which variant of the game is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One player flips pairs until the board is cleared; the move
    /// counter is the score of interest.
    Solo,
    /// Alternating turns against a computer opponent; per-side pair
    /// counts decide the winner.
    Versus,
}

/// Configuration for a game.
///
/// ## Example
///
/// ```
/// use concentration::game::{GameConfig, GameMode};
///
/// let config = GameConfig::new(GameMode::Versus).num_cards(12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game variant.
    pub mode: GameMode,

    /// Board size. Must be even and nonzero.
    pub num_cards: usize,

    /// How long mismatched cards stay revealed before the driver calls
    /// `finish_reveal` (milliseconds).
    pub mismatch_reveal_ms: u64,

    /// Delay between the computer's first and second pick
    /// (milliseconds). Purely presentational pacing.
    pub computer_pick_delay_ms: u64,
}

impl GameConfig {
    /// Smallest board the card-count input offers.
    pub const MIN_CARDS: usize = 2;

    /// Largest board the card-count input offers.
    pub const MAX_CARDS: usize = 16;

    /// Default board size.
    pub const DEFAULT_CARDS: usize = 8;

    /// Create a configuration with default board size and delays.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            num_cards: Self::DEFAULT_CARDS,
            mismatch_reveal_ms: 1000,
            computer_pick_delay_ms: 1000,
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn num_cards(mut self, num_cards: usize) -> Self {
        self.num_cards = num_cards;
        self
    }

    /// Set the mismatch reveal duration.
    #[must_use]
    pub fn mismatch_reveal_ms(mut self, ms: u64) -> Self {
        self.mismatch_reveal_ms = ms;
        self
    }

    /// Set the computer pick delay.
    #[must_use]
    pub fn computer_pick_delay_ms(mut self, ms: u64) -> Self {
        self.computer_pick_delay_ms = ms;
        self
    }

    /// Validate the board size.
    ///
    /// Rejects zero and odd counts, and boards of more than 256 cards
    /// (ids are `u8` board positions). The `MIN_CARDS..=MAX_CARDS`
    /// range is a UI input bound, not an engine limit; any valid even
    /// count is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        let n = self.num_cards;
        if n == 0 || n % 2 != 0 || n > u8::MAX as usize + 1 {
            return Err(GameError::InvalidCardCount(n));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::Versus)
    }
}

/// Errors produced by game operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Board size was zero, odd, or too large.
    InvalidCardCount(usize),
    /// An explicit layout value does not appear exactly twice.
    UnpairedValue(u8),
    /// No card with this id is on the board.
    UnknownCard(CardId),
    /// The card's pair has already been matched.
    AlreadyMatched(CardId),
    /// A mismatch reveal is pending; selections are locked until the
    /// driver calls `finish_reveal`.
    SelectionLocked,
    /// It is not the computer's move.
    NotComputersTurn,
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidCardCount(n) => {
                write!(f, "invalid card count {}: must be even and nonzero", n)
            }
            GameError::UnpairedValue(value) => {
                write!(f, "value {} does not appear exactly twice", value)
            }
            GameError::UnknownCard(id) => write!(f, "no card with id {}", id),
            GameError::AlreadyMatched(id) => write!(f, "{} is already matched", id),
            GameError::SelectionLocked => {
                write!(f, "selection locked while a mismatch is revealed")
            }
            GameError::NotComputersTurn => write!(f, "it is not the computer's move"),
            GameError::GameOver => write!(f, "the game has ended"),
        }
    }
}

impl std::error::Error for GameError {}

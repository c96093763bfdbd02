//! Cards and board dealing.
//!
//! A board is an ordered sequence of [`Card`]s with even length N,
//! generated as N/2 value pairs and then shuffled. Card ids are board
//! positions: after the shuffle, `board[id.index()].id == id`, so the
//! presentation can address cards by index and the engine can look them
//! up in O(1).

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Identifier of a card on the board.
///
/// Ids are unique and stable for one game instance; they double as the
/// card's board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the board position of this card (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card on the board.
///
/// `value` is shared by exactly two cards; `matched` becomes true once
/// that pair has been resolved, and never reverts within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Board position of this card.
    pub id: CardId,

    /// Face value, in `1..=N/2` for a board of N cards.
    pub value: u8,

    /// Has this card's pair been matched?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, value: u8) -> Self {
        Self {
            id,
            value,
            matched: false,
        }
    }
}

/// Deal a shuffled board of `num_cards` cards.
///
/// Generates `num_cards / 2` value pairs, Fisher-Yates shuffles them,
/// then re-numbers ids so they track board positions.
///
/// Callers must have validated `num_cards` (even, nonzero, positions
/// fit in `u8`); see `GameConfig::validate`.
pub(crate) fn deal(num_cards: usize, rng: &mut GameRng) -> Vec<Card> {
    debug_assert!(num_cards >= 2 && num_cards % 2 == 0);
    debug_assert!(num_cards <= u8::MAX as usize + 1);

    let mut cards = Vec::with_capacity(num_cards);
    for value in 1..=(num_cards / 2) as u8 {
        cards.push(Card::new(CardId::new(0), value));
        cards.push(Card::new(CardId::new(0), value));
    }

    rng.shuffle(&mut cards);

    for (i, card) in cards.iter_mut().enumerate() {
        card.id = CardId::new(i as u8);
    }

    cards
}

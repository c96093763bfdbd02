//! Selection outcomes and the move history record.
//!
//! Every resolved pair is recorded as a [`MoveRecord`], giving drivers
//! and tests a replay-friendly account of the game.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Side};

/// What a `select` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Recorded as the first card of a selection.
    First(CardId),

    /// The already-pending first card was selected again; nothing
    /// changed.
    Ignored,

    /// Second selection completed the pair and the values matched.
    Matched { first: CardId, second: CardId },

    /// Second selection completed the pair and the values differed;
    /// the game is now revealing the mismatch.
    Mismatched { first: CardId, second: CardId },
}

impl SelectOutcome {
    /// Did this selection resolve a matching pair?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. })
    }

    /// Did this selection complete a pair (match or mismatch)?
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. }
        )
    }
}

/// A resolved pair in the move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who flipped this pair.
    pub side: Side,

    /// First card of the pair.
    pub first: CardId,

    /// Second card of the pair.
    pub second: CardId,

    /// Did the values match?
    pub matched: bool,

    /// Move number, starting at 1.
    pub move_number: u32,
}

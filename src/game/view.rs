//! Presentation snapshot of a game.
//!
//! A [`BoardView`] is everything a rendering layer needs for one frame:
//! per-card toggled/matched/disabled flags, the input capability flag,
//! turn and outcome text, scores, and the delay hints for scheduling
//! `finish_reveal` and the computer's staggered picks. The view owns no
//! game logic and holds no references into the game.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Outcome, Side};

use super::config::GameMode;
use super::state::{Game, Phase};

/// One card as the presentation should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Board position.
    pub id: CardId,

    /// Face-up: currently selected or already matched.
    pub face_up: bool,

    /// Pair has been resolved.
    pub matched: bool,

    /// Clicks on this card should be rejected by the UI.
    pub disabled: bool,

    /// Face value, exposed only while the card is face-up.
    pub value: Option<u8>,
}

/// A full frame of presentation state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cards in display order.
    pub cards: Vec<CardView>,

    /// False while a mismatch is revealed, during the computer's turn,
    /// and after game over.
    pub input_enabled: bool,

    /// "Your turn!" / "Computer's turn!" prompt; `None` in solo mode
    /// and after game over.
    pub turn_text: Option<String>,

    /// End-of-game banner, once the outcome is determined.
    pub outcome_text: Option<String>,

    /// Player's pair count.
    pub player_pairs: u32,

    /// Computer's pair count.
    pub computer_pairs: u32,

    /// Moves taken so far.
    pub moves: u32,

    /// How long to hold a mismatched pair face-up before calling
    /// `finish_reveal` (milliseconds).
    pub mismatch_reveal_ms: u64,

    /// Pause between the computer's two picks (milliseconds).
    pub computer_pick_delay_ms: u64,
}

impl Game {
    /// Snapshot the game for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let selection = self.selection();
        let input_enabled = self.input_enabled();

        let cards = self
            .board()
            .iter()
            .map(|card| {
                let face_up = card.matched || selection.contains(&card.id);
                CardView {
                    id: card.id,
                    face_up,
                    matched: card.matched,
                    disabled: face_up || !input_enabled,
                    value: face_up.then_some(card.value),
                }
            })
            .collect();

        BoardView {
            cards,
            input_enabled,
            turn_text: turn_text(self),
            outcome_text: outcome_text(self),
            player_pairs: self.pairs(Side::Player),
            computer_pairs: self.pairs(Side::Computer),
            moves: self.moves(),
            mismatch_reveal_ms: self.config().mismatch_reveal_ms,
            computer_pick_delay_ms: self.config().computer_pick_delay_ms,
        }
    }
}

fn turn_text(game: &Game) -> Option<String> {
    if game.config().mode != GameMode::Versus || game.phase() == Phase::GameOver {
        return None;
    }
    Some(match game.turn() {
        Side::Player => "Your turn!".to_string(),
        Side::Computer => "Computer's turn!".to_string(),
    })
}

fn outcome_text(game: &Game) -> Option<String> {
    let outcome = game.outcome()?;
    Some(match game.config().mode {
        GameMode::Solo => format!("You Won in {} moves!", game.moves()),
        GameMode::Versus => match outcome {
            Outcome::Player => "You Won!".to_string(),
            Outcome::Computer => "Computer Won!".to_string(),
            Outcome::Draw => "It is a draw!".to_string(),
        },
    })
}

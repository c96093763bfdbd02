//! The game state machine.
//!
//! ## Phases
//!
//! ```text
//! Idle -> OneSelected -> (Matched | Revealing) -> Idle
//! ```
//! looping until `GameOver`. `Revealing` is the window where a
//! mismatched pair stays face-up; the driver ends it with
//! [`Game::finish_reveal`] after the configured delay. Matches resolve
//! immediately.
//!
//! ## Turn order
//!
//! In [`GameMode::Versus`] the turn owner flips after every resolved
//! pair, match or mismatch. In [`GameMode::Solo`] the turn owner is
//! permanently [`Side::Player`] and every pair credits the player.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{card, Card, CardId, GameRng, Outcome, Side, SideMap};
use crate::opponent::PickPolicy;

use super::config::{GameConfig, GameError, GameMode};
use super::moves::{MoveRecord, SelectOutcome};

/// Where the selection state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No cards selected.
    Idle,
    /// One card is face-up, awaiting its partner.
    OneSelected,
    /// A mismatched pair is face-up; selections are locked until the
    /// driver calls `finish_reveal`.
    Revealing,
    /// Every card is matched.
    GameOver,
}

/// A game of concentration.
///
/// Cheap to clone: the board is a small `Vec` and the history is a
/// persistent vector.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Vec<Card>,
    first: Option<CardId>,
    second: Option<CardId>,
    phase: Phase,
    turn: Side,
    pairs: SideMap<u32>,
    moves: u32,
    history: Vector<MoveRecord>,
    outcome: Option<Outcome>,
    rng: GameRng,
}

impl Game {
    /// Start a new game with a freshly dealt, shuffled board.
    ///
    /// Rejects invalid card counts (see [`GameConfig::validate`]).
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let board = card::deal(config.num_cards, &mut rng);

        Ok(Self {
            config,
            board,
            first: None,
            second: None,
            phase: Phase::Idle,
            turn: Side::Player,
            pairs: SideMap::default(),
            moves: 0,
            history: Vector::new(),
            outcome: None,
            rng,
        })
    }

    /// Start a game from an explicit board layout.
    ///
    /// `values[i]` becomes the value of the card at position `i`; a
    /// value not appearing exactly twice is rejected with
    /// [`GameError::UnpairedValue`]. Useful for replays and
    /// deterministic setups. `config.num_cards` is overridden by
    /// `values.len()`.
    pub fn with_layout(config: GameConfig, values: &[u8], seed: u64) -> Result<Self, GameError> {
        let config = config.num_cards(values.len());
        config.validate()?;

        for &value in values {
            let count = values.iter().filter(|&&v| v == value).count();
            if count != 2 {
                return Err(GameError::UnpairedValue(value));
            }
        }

        let board = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Card::new(CardId::new(i as u8), value))
            .collect();

        Ok(Self {
            config,
            board,
            first: None,
            second: None,
            phase: Phase::Idle,
            turn: Side::Player,
            pairs: SideMap::default(),
            moves: 0,
            history: Vector::new(),
            outcome: None,
            rng: GameRng::new(seed),
        })
    }

    /// Restart with a fresh shuffle of the same configuration.
    ///
    /// Cancels any pending reveal window; pair counts, the move
    /// counter, the history, and the turn owner all reset. The new
    /// deal comes from a forked RNG stream, so the nth restart of a
    /// seed produces the same board no matter how much randomness the
    /// previous game consumed.
    pub fn restart(&mut self) {
        let mut rng = self.rng.fork();
        self.board = card::deal(self.config.num_cards, &mut rng);
        self.rng = rng;
        self.first = None;
        self.second = None;
        self.phase = Phase::Idle;
        self.turn = Side::Player;
        self.pairs = SideMap::default();
        self.moves = 0;
        self.history = Vector::new();
        self.outcome = None;
    }

    /// Change the board size and restart.
    pub fn restart_with(&mut self, num_cards: usize) -> Result<(), GameError> {
        let config = self.config.num_cards(num_cards);
        config.validate()?;
        self.config = config;
        self.restart();
        Ok(())
    }

    // === Accessors ===

    /// The configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board, in display order.
    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.board.get(id.index())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn owner.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Pair count for a side.
    #[must_use]
    pub fn pairs(&self, side: Side) -> u32 {
        self.pairs[side]
    }

    /// Total matched pairs across both sides.
    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.pairs[Side::Player] + self.pairs[Side::Computer]
    }

    /// Moves taken (each resolved pair, matched or not, is one move).
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Final outcome, or `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Has every card been matched?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The currently flipped, unresolved cards (0-2 of them).
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardId; 2]> {
        let mut cards = SmallVec::new();
        if let Some(first) = self.first {
            cards.push(first);
        }
        if let Some(second) = self.second {
            cards.push(second);
        }
        cards
    }

    /// Can a selection be made right now?
    ///
    /// False while a mismatch is revealed, after game over, and (in
    /// versus mode) during the computer's turn. Presentation layers
    /// surface this as a disabled board rather than the engine silently
    /// dropping clicks.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        if matches!(self.phase, Phase::Revealing | Phase::GameOver) {
            return false;
        }
        !(self.config.mode == GameMode::Versus && self.turn == Side::Computer)
    }

    // === Operations ===

    /// Select a card for the current turn owner.
    ///
    /// The first call of a turn records the card; the second, on a
    /// distinct card, resolves the pair. Re-selecting the pending card
    /// is ignored. Fails while a mismatch is revealed, after game over,
    /// for matched cards, and for unknown ids.
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome, GameError> {
        match self.phase {
            Phase::Revealing => return Err(GameError::SelectionLocked),
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::Idle | Phase::OneSelected => {}
        }

        let card = self.card(id).ok_or(GameError::UnknownCard(id))?;
        if card.matched {
            return Err(GameError::AlreadyMatched(id));
        }

        match self.first {
            None => {
                self.first = Some(id);
                self.phase = Phase::OneSelected;
                Ok(SelectOutcome::First(id))
            }
            Some(first) if first == id => Ok(SelectOutcome::Ignored),
            Some(first) => {
                self.second = Some(id);
                Ok(self.resolve(first, id))
            }
        }
    }

    /// End the mismatch reveal window: hide the pair, flip the turn.
    ///
    /// Returns true if a reveal was pending. Drivers call this after
    /// `config.mismatch_reveal_ms` has elapsed.
    pub fn finish_reveal(&mut self) -> bool {
        if self.phase != Phase::Revealing {
            return false;
        }

        self.clear_selection();
        self.advance_turn();
        self.phase = Phase::Idle;
        true
    }

    /// Play a full computer turn: pick two distinct unmatched cards via
    /// `policy` and feed them through the same `select` path a human
    /// uses.
    ///
    /// Fails unless the game is in versus mode with the computer to
    /// move and no selection in flight. On a mismatch the game is left
    /// in `Revealing`, exactly as after a human mismatch.
    pub fn play_computer_turn(
        &mut self,
        policy: &impl PickPolicy,
    ) -> Result<SelectOutcome, GameError> {
        if self.config.mode != GameMode::Versus {
            return Err(GameError::NotComputersTurn);
        }
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::Revealing => return Err(GameError::SelectionLocked),
            Phase::OneSelected => return Err(GameError::NotComputersTurn),
            Phase::Idle => {}
        }
        if self.turn != Side::Computer {
            return Err(GameError::NotComputersTurn);
        }

        // An unfinished game always has at least one unmatched pair.
        let (first, second) = policy
            .pick_pair(&self.board, &mut self.rng)
            .ok_or(GameError::GameOver)?;

        self.select(first)?;
        self.select(second)
    }

    // === Internals ===

    fn resolve(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        self.moves += 1;
        let matched = self.board[first.index()].value == self.board[second.index()].value;

        self.history.push_back(MoveRecord {
            side: self.turn,
            first,
            second,
            matched,
            move_number: self.moves,
        });

        if matched {
            self.board[first.index()].matched = true;
            self.board[second.index()].matched = true;
            self.pairs[self.turn] += 1;
            self.clear_selection();
            self.check_game_over();
            if self.phase != Phase::GameOver {
                self.advance_turn();
                self.phase = Phase::Idle;
            }
            SelectOutcome::Matched { first, second }
        } else {
            // Cards stay face-up until finish_reveal.
            self.phase = Phase::Revealing;
            SelectOutcome::Mismatched { first, second }
        }
    }

    fn clear_selection(&mut self) {
        self.first = None;
        self.second = None;
    }

    fn advance_turn(&mut self) {
        if self.config.mode == GameMode::Versus {
            self.turn = self.turn.opposite();
        }
    }

    fn check_game_over(&mut self) {
        if self.matched_pairs() * 2 == self.board.len() as u32 {
            self.phase = Phase::GameOver;
            self.outcome = Some(Outcome::from_pairs(&self.pairs));
        }
    }
}

//! Pick policies for the computer side.
//!
//! Policies are trait-based so drivers can swap the stock uniform
//! random opponent for something smarter (or, in tests, something
//! deterministic) without touching the state machine.

use crate::core::{Card, CardId, GameRng};

/// Policy for choosing the computer's two cards.
pub trait PickPolicy {
    /// Pick two distinct unmatched cards from the board.
    ///
    /// Returns `None` when fewer than two unmatched cards remain (the
    /// game is over or about to be). Implementations must never return
    /// matched cards or the same card twice; the state machine rejects
    /// such picks.
    fn pick_pair(&self, board: &[Card], rng: &mut GameRng) -> Option<(CardId, CardId)>;
}

/// Uniform random picks over the unmatched cards.
///
/// This is the stock opponent: both picks are uniform over the
/// remaining unmatched cards, with no memory of previously seen values.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPicks;

impl PickPolicy for UniformPicks {
    fn pick_pair(&self, board: &[Card], rng: &mut GameRng) -> Option<(CardId, CardId)> {
        let unmatched: Vec<CardId> = board
            .iter()
            .filter(|card| !card.matched)
            .map(|card| card.id)
            .collect();

        let (first, second) = rng.pick_two_distinct(unmatched.len())?;
        Some((unmatched[first], unmatched[second]))
    }
}

/// Deterministic picks: the two lowest-positioned unmatched cards.
///
/// Useful for reproducible tests and replays.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestFirst;

impl PickPolicy for LowestFirst {
    fn pick_pair(&self, board: &[Card], _rng: &mut GameRng) -> Option<(CardId, CardId)> {
        let mut unmatched = board.iter().filter(|card| !card.matched);
        let first = unmatched.next()?.id;
        let second = unmatched.next()?.id;
        Some((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: &[u8], matched: &[bool]) -> Vec<Card> {
        values
            .iter()
            .zip(matched)
            .enumerate()
            .map(|(i, (&value, &matched))| {
                let mut card = Card::new(CardId::new(i as u8), value);
                card.matched = matched;
                card
            })
            .collect()
    }

    #[test]
    fn test_uniform_picks_distinct_unmatched() {
        let board = board(&[1, 2, 1, 2], &[true, false, true, false]);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let (first, second) = UniformPicks.pick_pair(&board, &mut rng).unwrap();
            assert_ne!(first, second);
            assert!(!board[first.index()].matched);
            assert!(!board[second.index()].matched);
        }
    }

    #[test]
    fn test_uniform_picks_none_when_fewer_than_two_left() {
        let board = board(&[1, 2, 1, 2], &[true, true, true, true]);
        let mut rng = GameRng::new(42);

        assert!(UniformPicks.pick_pair(&board, &mut rng).is_none());
    }

    #[test]
    fn test_uniform_picks_are_deterministic_per_seed() {
        let board = board(&[1, 2, 3, 1, 2, 3], &[false; 6]);

        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..20 {
            assert_eq!(
                UniformPicks.pick_pair(&board, &mut rng1),
                UniformPicks.pick_pair(&board, &mut rng2)
            );
        }
    }

    #[test]
    fn test_lowest_first_skips_matched() {
        let board = board(&[1, 2, 1, 2], &[true, false, false, false]);
        let mut rng = GameRng::new(0);

        let (first, second) = LowestFirst.pick_pair(&board, &mut rng).unwrap();
        assert_eq!(first, CardId::new(1));
        assert_eq!(second, CardId::new(2));
    }
}

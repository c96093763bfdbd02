//! End-to-end game flow tests: full solo and versus games driven the
//! way a presentation layer would drive them.

use concentration::{
    CardId, Game, GameConfig, GameError, GameMode, LowestFirst, Outcome, Phase, SelectOutcome,
    Side, UniformPicks,
};

/// A perfect-recall player move: flip the first unmatched card, then
/// its partner. Guarantees progress so test games always terminate.
fn play_player_match(game: &mut Game) {
    let first = game
        .board()
        .iter()
        .find(|card| !card.matched)
        .expect("an unfinished game has unmatched cards")
        .id;
    let partner = game
        .board()
        .iter()
        .find(|card| !card.matched && card.id != first && card.value == game.card(first).unwrap().value)
        .expect("unmatched cards come in pairs")
        .id;

    game.select(first).unwrap();
    let outcome = game.select(partner).unwrap();
    assert!(outcome.is_match());
}

/// Drive a versus game to completion, pumping reveals and computer
/// turns like a UI event loop would.
fn play_versus_to_completion(game: &mut Game) {
    let mut steps = 0;
    while !game.is_over() {
        assert!(steps < 10_000, "game did not terminate");
        steps += 1;

        match game.phase() {
            Phase::Revealing => {
                assert!(game.finish_reveal());
            }
            Phase::GameOver => break,
            Phase::Idle | Phase::OneSelected => {
                if game.turn() == Side::Computer {
                    game.play_computer_turn(&UniformPicks).unwrap();
                } else {
                    play_player_match(game);
                }
            }
        }
    }
}

#[test]
fn versus_game_plays_to_completion() {
    let mut game = Game::new(GameConfig::new(GameMode::Versus).num_cards(12), 42).unwrap();

    play_versus_to_completion(&mut game);

    assert!(game.is_over());
    let outcome = game.outcome().unwrap();

    // Final accounting: all pairs accounted for, outcome consistent.
    let total = game.pairs(Side::Player) + game.pairs(Side::Computer);
    assert_eq!(total * 2, game.board().len() as u32);
    assert!(game.board().iter().all(|c| c.matched));

    match outcome {
        Outcome::Player => assert!(game.pairs(Side::Player) > game.pairs(Side::Computer)),
        Outcome::Computer => assert!(game.pairs(Side::Computer) > game.pairs(Side::Player)),
        Outcome::Draw => assert_eq!(game.pairs(Side::Player), game.pairs(Side::Computer)),
    }

    // Every resolution made it into the history, in order.
    assert_eq!(game.history().len() as u32, game.moves());
    for (i, record) in game.history().iter().enumerate() {
        assert_eq!(record.move_number as usize, i + 1);
    }
}

#[test]
fn solo_game_plays_to_completion() {
    let mut game = Game::new(GameConfig::new(GameMode::Solo).num_cards(8), 7).unwrap();

    // One deliberate mismatch, then perfect play.
    let first = game.board()[0];
    let other = game
        .board()
        .iter()
        .find(|c| c.value != first.value)
        .copied()
        .unwrap();
    game.select(first.id).unwrap();
    game.select(other.id).unwrap();
    assert_eq!(game.phase(), Phase::Revealing);
    game.finish_reveal();

    let mut steps = 0;
    while !game.is_over() {
        assert!(steps < 10_000);
        steps += 1;

        play_player_match(&mut game);
        // Solo mode never hands the turn to a computer.
        assert_eq!(game.turn(), Side::Player);
    }

    assert_eq!(game.outcome(), Some(Outcome::Player));
    assert_eq!(game.pairs(Side::Player) * 2, game.board().len() as u32);
    assert_eq!(game.pairs(Side::Computer), 0);
    assert_eq!(game.moves(), game.board().len() as u32 / 2 + 1);
}

#[test]
fn same_seed_reproduces_the_same_game() {
    let config = GameConfig::new(GameMode::Versus).num_cards(10);

    let mut game1 = Game::new(config, 12345).unwrap();
    let mut game2 = Game::new(config, 12345).unwrap();

    assert_eq!(game1.board(), game2.board());

    play_versus_to_completion(&mut game1);
    play_versus_to_completion(&mut game2);

    assert_eq!(game1.history(), game2.history());
    assert_eq!(game1.outcome(), game2.outcome());
    assert_eq!(game1.moves(), game2.moves());
}

#[test]
fn different_seeds_deal_different_boards() {
    let config = GameConfig::new(GameMode::Versus).num_cards(16);

    let game1 = Game::new(config, 1).unwrap();
    let game2 = Game::new(config, 2).unwrap();

    let values1: Vec<u8> = game1.board().iter().map(|c| c.value).collect();
    let values2: Vec<u8> = game2.board().iter().map(|c| c.value).collect();
    assert_ne!(values1, values2);
}

#[test]
fn computer_turn_is_rejected_out_of_turn() {
    let mut game =
        Game::with_layout(GameConfig::new(GameMode::Versus), &[1, 2, 1, 2], 0).unwrap();

    // Player to move.
    assert_eq!(
        game.play_computer_turn(&UniformPicks).unwrap_err(),
        GameError::NotComputersTurn
    );

    // Solo games never have a computer move.
    let mut solo = Game::with_layout(GameConfig::new(GameMode::Solo), &[1, 2, 1, 2], 0).unwrap();
    assert_eq!(
        solo.play_computer_turn(&UniformPicks).unwrap_err(),
        GameError::NotComputersTurn
    );
}

#[test]
fn computer_mismatch_goes_through_the_reveal_window() {
    // Board [1,2,1,2]: LowestFirst picks ids 0 and 1, which mismatch.
    let mut game =
        Game::with_layout(GameConfig::new(GameMode::Versus), &[1, 2, 1, 2], 0).unwrap();

    // Hand the turn to the computer via a player mismatch.
    game.select(CardId::new(1)).unwrap();
    game.select(CardId::new(2)).unwrap();
    game.finish_reveal();
    assert_eq!(game.turn(), Side::Computer);

    let outcome = game.play_computer_turn(&LowestFirst).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Mismatched {
            first: CardId::new(0),
            second: CardId::new(1),
        }
    );
    assert_eq!(game.phase(), Phase::Revealing);

    // The window must be pumped before anyone moves again.
    assert_eq!(
        game.play_computer_turn(&LowestFirst).unwrap_err(),
        GameError::SelectionLocked
    );
    assert!(game.finish_reveal());
    assert_eq!(game.turn(), Side::Player);
}

#[test]
fn computer_match_credits_the_computer() {
    // Board [1,1,2,2]: LowestFirst picks ids 0 and 1, which match.
    let mut game =
        Game::with_layout(GameConfig::new(GameMode::Versus), &[1, 1, 2, 2], 0).unwrap();

    // Player mismatches 1 and 2 (values 1,2) to pass the turn.
    game.select(CardId::new(1)).unwrap();
    game.select(CardId::new(2)).unwrap();
    game.finish_reveal();

    let outcome = game.play_computer_turn(&LowestFirst).unwrap();
    assert!(outcome.is_match());
    assert_eq!(game.pairs(Side::Computer), 1);
    assert_eq!(game.history().last().unwrap().side, Side::Computer);
}

#[test]
fn restart_mid_reveal_starts_clean() {
    let mut game = Game::new(GameConfig::new(GameMode::Versus).num_cards(8), 9).unwrap();

    // Force a mismatch by scanning for two unequal cards.
    let board = game.board().to_vec();
    let first = board[0];
    let second = board
        .iter()
        .find(|c| c.value != first.value)
        .copied()
        .unwrap();
    game.select(first.id).unwrap();
    game.select(second.id).unwrap();
    assert_eq!(game.phase(), Phase::Revealing);

    game.restart();

    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.input_enabled());
    assert!(game.history().is_empty());

    // Restart reshuffles from the game's own RNG stream.
    let values_before: Vec<u8> = board.iter().map(|c| c.value).collect();
    let values_after: Vec<u8> = game.board().iter().map(|c| c.value).collect();
    assert_eq!(values_after.len(), values_before.len());
}

#[test]
fn view_tracks_a_versus_game() {
    let mut game =
        Game::with_layout(GameConfig::new(GameMode::Versus), &[1, 2, 1, 2], 0).unwrap();

    // Match both pairs alternately: player takes the 1s, computer the 2s.
    game.select(CardId::new(0)).unwrap();
    game.select(CardId::new(2)).unwrap();
    assert_eq!(game.turn(), Side::Computer);

    game.select(CardId::new(1)).unwrap();
    game.select(CardId::new(3)).unwrap();

    let view = game.view();
    assert_eq!(view.outcome_text.as_deref(), Some("It is a draw!"));
    assert_eq!(view.player_pairs, 1);
    assert_eq!(view.computer_pairs, 1);
    assert!(!view.input_enabled);
    assert!(view.cards.iter().all(|c| c.matched && c.face_up));
}

use othello_core::board::Board;
use othello_core::game_state::GameState;
use othello_core::player::Player;
use othello_core::rules::{self, GameOutcome, TurnState};
use othello_core::square::Square;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Plays random games and returns every position reached with its side to move.
fn random_positions(seed: u64, games: usize) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();
    for _ in 0..games {
        let mut game = GameState::new();
        while let Some(player) = game.side_to_move() {
            positions.push((*game.board(), player));
            let moves = game.legal_moves();
            let sq = *moves.choose(&mut rng).expect("side to move has a move");
            game.make_move(sq).unwrap();
        }
        positions.push((*game.board(), Player::Black));
    }
    positions
}

#[test]
fn test_first_move_sets() {
    let board = rules::create_initial_board();
    assert_eq!(
        rules::legal_moves(&board, Player::Black),
        vec![Square::D3, Square::C4, Square::F5, Square::E6]
    );
    assert_eq!(
        rules::legal_moves(&board, Player::White),
        vec![Square::E3, Square::F4, Square::C5, Square::D6]
    );

    let black: Vec<(usize, usize)> = rules::legal_moves(&board, Player::Black)
        .iter()
        .map(|sq| (sq.row(), sq.col()))
        .collect();
    assert_eq!(black, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
}

#[test]
fn test_legality_soundness() {
    for (board, _) in random_positions(11, 8) {
        for player in [Player::Black, Player::White] {
            let legal = rules::legal_moves(&board, player);
            for sq in Square::iter() {
                let flips = board.flips(player, sq);
                assert_eq!(
                    legal.contains(&sq),
                    !flips.is_empty(),
                    "{player} at {sq} on\n{board}"
                );
            }
        }
    }
}

#[test]
fn test_conservation() {
    for (board, player) in random_positions(23, 8) {
        let (black, white) = rules::count(&board);
        for sq in rules::legal_moves(&board, player) {
            let (next, flips) = rules::apply(&board, sq, player).unwrap();
            let (next_black, next_white) = rules::count(&next);
            assert_eq!(next_black + next_white, black + white + 1);

            let flipped = flips.len() as u32;
            let (own_before, opp_before, own_after, opp_after) = match player {
                Player::Black => (black, white, next_black, next_white),
                Player::White => (white, black, next_white, next_black),
            };
            assert_eq!(own_after, own_before + 1 + flipped);
            assert_eq!(opp_after, opp_before - flipped);
            for &captured in &flips {
                assert_eq!(next.get(captured), player.to_cell());
            }
            assert_eq!(next.get(sq), player.to_cell());
        }
    }
}

#[test]
fn test_apply_does_not_touch_input() {
    let board = rules::create_initial_board();
    let snapshot = board;
    let _ = rules::apply(&board, Square::D3, Player::Black).unwrap();
    assert!(rules::apply(&board, Square::H8, Player::Black).is_err());
    assert_eq!(board, snapshot);
}

#[test]
fn test_pass_correctness() {
    // Black cannot flank the corner disc; White can capture B1 from C1.
    let board = Board::from_string(&format!("OX{}", "-".repeat(62))).unwrap();
    assert!(rules::legal_moves(&board, Player::Black).is_empty());
    assert!(!rules::legal_moves(&board, Player::White).is_empty());
    assert_eq!(rules::outcome(&board), None);
    assert_eq!(rules::status(&board), GameOutcome::InProgress);
    assert_eq!(
        rules::next_turn(&board, Player::Black),
        TurnState::Passed(Player::Black)
    );

    let game = GameState::from_board(board, Player::Black);
    assert_eq!(game.side_to_move(), Some(Player::White));
    assert_eq!(*game.board(), board);
}

#[test]
fn test_terminal_correctness() {
    let board = Board::from_string(&format!("{}{}", "X".repeat(37), "O".repeat(27))).unwrap();
    assert_eq!(rules::count(&board), (37, 27));
    assert_eq!(rules::outcome(&board), Some(GameOutcome::BlackWins));
    assert_eq!(
        rules::next_turn(&board, Player::White),
        TurnState::Terminal(GameOutcome::BlackWins)
    );

    let board = Board::from_string(&format!("{}{}", "O".repeat(32), "X".repeat(32))).unwrap();
    assert_eq!(rules::outcome(&board), Some(GameOutcome::Draw));

    // Not full, but neither side can move.
    let board = Board::from_string(&format!("OOO{}X", "-".repeat(60))).unwrap();
    assert_eq!(rules::outcome(&board), Some(GameOutcome::WhiteWins));
}

#[test]
fn test_terminal_is_absorbing() {
    let board = Board::from_string(&format!("{}{}", "X".repeat(37), "O".repeat(27))).unwrap();
    let mut game = GameState::from_board(board, Player::Black);
    assert!(game.is_game_over());
    assert_eq!(game.side_to_move(), None);
    for sq in Square::iter() {
        assert!(game.make_move(sq).is_err());
    }
}

#[test]
fn test_random_games_end_consistently() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let mut game = GameState::new();
        while let Some(player) = game.side_to_move() {
            let before = *game.board();
            let moves = game.legal_moves();
            let sq = *moves.choose(&mut rng).unwrap();
            let result = game.make_move(sq).unwrap();
            if let Some(passer) = result.passed {
                assert_eq!(passer, player.opponent());
                assert_eq!(result.turn, TurnState::ToMove(player));
                assert!(rules::legal_moves(game.board(), passer).is_empty());
            }
            assert_ne!(*game.board(), before);
        }
        let (black, white) = game.score();
        assert_eq!(game.outcome(), Some(GameOutcome::from_counts(black, white)));
        assert_eq!(rules::outcome(game.board()), game.outcome());
    }
}

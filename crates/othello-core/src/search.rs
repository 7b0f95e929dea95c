//! Game tree search engine.
//!
//! A fixed-depth minimax with alpha-beta pruning. The root enumerates every
//! legal move and scores each one with a full window, keeping the first move
//! that reaches the best score.

pub mod minimax;
pub mod options;
pub mod search_result;

use tracing::{debug, info};

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::move_list::MoveList;
use crate::player::Player;
use crate::square::Square;
use crate::types::{Depth, Score};

use self::minimax::{SearchContext, alpha_beta};

pub use self::options::SearchOptions;
pub use self::search_result::SearchResult;

/// Main search engine structure.
///
/// Holds only configuration; each [`Search::run`] call is independent.
#[derive(Clone, Debug, Default)]
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            options: options.clone(),
        }
    }

    /// Returns the options this engine was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches `board` for `player` to `depth` plies.
    ///
    /// A depth of zero is treated as one so that a move is still chosen.
    ///
    /// # Returns
    ///
    /// A [`SearchResult`] whose `best_move` is `None` when `player` has no
    /// legal move.
    pub fn run(&self, board: &Board, player: Player, depth: Depth) -> SearchResult {
        let move_list = MoveList::new(board, player);
        if move_list.is_empty() {
            debug!(%player, "no legal move at root");
            return SearchResult::no_move(depth);
        }

        let depth = depth.max(1);
        let ctx = SearchContext {
            root_player: player,
            eval: &self.options.eval,
            terminal_score: self.options.terminal_score,
        };

        let mut best: Option<(Square, Score)> = None;
        let mut root_scores = Vec::with_capacity(move_list.count());
        let mut n_nodes = 1;

        for mv in move_list.iter() {
            let next = board.make_move_with_flipped(mv.sq, player, mv.flips.bitboard());
            let (score, nodes) = alpha_beta(&ctx, &next, depth - 1, -SCORE_INF, SCORE_INF, false);
            debug!(sq = %mv.sq, score, nodes, "root move");

            n_nodes += nodes;
            root_scores.push((mv.sq, score));
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv.sq, score));
            }
        }

        let (best_move, score) = match best {
            Some((sq, score)) => (Some(sq), score),
            None => (None, 0),
        };
        info!(
            %player,
            depth,
            best_move = ?best_move,
            score,
            n_nodes,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            n_nodes,
            root_scores,
        }
    }
}

/// Returns the best move for `player` at `depth` with the default options.
///
/// # Returns
///
/// `None` when `player` has no legal move.
pub fn best_move(board: &Board, player: Player, depth: Depth) -> Option<Square> {
    Search::default().run(board, player, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn test_no_move_returns_none() {
        let board = Board::from_string(&format!("XO{}", "-".repeat(62))).unwrap();
        assert_eq!(best_move(&board, Player::White, 3), None);
        let result = Search::default().run(&board, Player::White, 3);
        assert!(result.root_scores.is_empty());
    }

    #[test]
    fn test_returns_legal_move() {
        let board = Board::new();
        for depth in 0..=4 {
            let sq = best_move(&board, Player::Black, depth).unwrap();
            assert!(rules::legal_moves(&board, Player::Black).contains(&sq));
        }
    }

    #[test]
    fn test_initial_position_ties_pick_first() {
        // The four opening moves are symmetric, so every one scores the same
        // and the first in row-major order wins.
        let result = Search::default().run(&Board::new(), Player::Black, 3);
        let scores: Vec<Score> = result.root_scores.iter().map(|&(_, s)| s).collect();
        assert!(scores.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(result.best_move, Some(Square::D3));
    }

    #[test]
    fn test_takes_corner() {
        // Black can take A1 (capturing B2) or G7 (capturing F6).
        let board = Board::from_string(
            "--------\
             -O------\
             --X-----\
             ---O----\
             ----X---\
             -----O--\
             --------\
             --------",
        )
        .unwrap();
        let result = Search::default().run(&board, Player::Black, 1);
        assert_eq!(result.root_scores, vec![(Square::A1, 55), (Square::G7, 2)]);
        assert_eq!(result.best_move, Some(Square::A1));
    }

    #[test]
    fn test_prefers_winning_move() {
        // C1 wipes out White and ends the game; it must beat any heuristic line.
        let board = Board::from_string(&format!("XO{}", "-".repeat(62))).unwrap();
        let result = Search::default().run(&board, Player::Black, 3);
        assert_eq!(result.best_move, Some(Square::C1));
        assert_eq!(result.score, 10_003);
    }

    #[test]
    fn test_custom_terminal_score() {
        let options = SearchOptions {
            terminal_score: 500,
            ..SearchOptions::default()
        };
        let board = Board::from_string(&format!("XO{}", "-".repeat(62))).unwrap();
        let result = Search::new(&options).run(&board, Player::Black, 2);
        assert_eq!(result.score, 503);
    }
}

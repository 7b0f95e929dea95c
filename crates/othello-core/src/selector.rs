//! Move selection for the automated opponent.
//!
//! Maps a [`Difficulty`] either to a uniformly random legal move or to a
//! fixed-depth search. The random source is always supplied by the caller.

use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::debug;

use crate::board::Board;
use crate::level::Difficulty;
use crate::player::Player;
use crate::search::{Search, SearchOptions};
use crate::square::Square;

/// Picks a move for `player` at the given difficulty.
///
/// # Arguments
///
/// * `board` - Current position
/// * `player` - The side to move
/// * `difficulty` - Strength tier
/// * `rng` - Random source, only consulted by [`Difficulty::Easy`]
///
/// # Returns
///
/// `None` when `player` has no legal move.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Square> {
    select_move_with(&SearchOptions::default(), board, player, difficulty, rng)
}

/// Like [`select_move`], with explicit search options.
pub fn select_move_with<R: Rng + ?Sized>(
    options: &SearchOptions,
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Square> {
    match difficulty.search_depth() {
        None => {
            let sq = board.get_moves(player).iter().choose(rng);
            debug!(%player, ?sq, "random move");
            sq
        }
        Some(depth) => Search::new(options).run(board, player, depth).best_move,
    }
}

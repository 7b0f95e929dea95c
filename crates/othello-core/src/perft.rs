//! Move-generator validation by exhaustive tree counting.

use crate::board::Board;
use crate::move_list::MoveList;
use crate::player::Player;
use crate::rules;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::Black, depth)
}

/// Counts the leaves of the game tree below `board` with `player` to move.
///
/// A pass does not consume depth and a finished game counts as one leaf.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    let move_list = MoveList::new(board, player);

    if move_list.is_empty() {
        return if rules::has_legal_moves(board, player.opponent()) {
            perft(board, player.opponent(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| {
            let next = board.make_move_with_flipped(m.sq, player, m.flips.bitboard());
            perft(&next, player.opponent(), depth - 1)
        })
        .sum()
}

//! Minimax with alpha-beta pruning below the root.
//!
//! Scores are always taken from the root side's point of view: the root
//! side maximizes and its opponent minimizes. Bounds are threaded by value
//! through the recursion, so every call is independent of its siblings.

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::eval::Eval;
use crate::move_list::MoveList;
use crate::player::Player;
use crate::rules;
use crate::types::{Depth, Score};

/// Read-only data shared by every node of one search.
pub struct SearchContext<'a> {
    /// The side the search picks a move for.
    pub root_player: Player,
    /// Leaf evaluator.
    pub eval: &'a Eval,
    /// Base value of a decided game.
    pub terminal_score: Score,
}

impl SearchContext<'_> {
    /// Scores a finished game for the root side.
    ///
    /// A win is worth `terminal_score + margin`, a loss the negation and a
    /// tie zero, so any decided game outranks every heuristic value.
    pub fn terminal_value(&self, board: &Board) -> Score {
        let (black, white) = board.count();
        let (own, opp) = match self.root_player {
            Player::Black => (black as Score, white as Score),
            Player::White => (white as Score, black as Score),
        };
        let diff = own - opp;
        match diff.signum() {
            1 => self.terminal_score + diff,
            -1 => -self.terminal_score + diff,
            _ => 0,
        }
    }
}

/// Searches `board` to `depth` plies.
///
/// # Arguments
///
/// * `ctx` - Search-wide parameters
/// * `board` - Position to search
/// * `depth` - Remaining depth; a pass does not consume any
/// * `alpha` - Lower bound already guaranteed to the maximizing side
/// * `beta` - Upper bound already guaranteed to the minimizing side
/// * `maximizing` - Whether the root side is to move at this node
///
/// # Returns
///
/// The node value and the number of nodes visited in its subtree.
pub fn alpha_beta(
    ctx: &SearchContext,
    board: &Board,
    depth: Depth,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> (Score, u64) {
    let mover = if maximizing {
        ctx.root_player
    } else {
        ctx.root_player.opponent()
    };
    let move_list = MoveList::new(board, mover);

    if move_list.is_empty() {
        if !rules::has_legal_moves(board, mover.opponent()) {
            return (ctx.terminal_value(board), 1);
        }
        // Pass: same board, same depth, other side to move.
        let (score, nodes) = alpha_beta(ctx, board, depth, alpha, beta, !maximizing);
        return (score, nodes + 1);
    }

    if depth == 0 {
        return (ctx.eval.evaluate(board, ctx.root_player), 1);
    }

    let mut alpha = alpha;
    let mut beta = beta;
    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    let mut n_nodes = 1;

    for mv in move_list.iter() {
        let next = board.make_move_with_flipped(mv.sq, mover, mv.flips.bitboard());
        let (score, nodes) = alpha_beta(ctx, &next, depth - 1, alpha, beta, !maximizing);
        n_nodes += nodes;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best, n_nodes)
}

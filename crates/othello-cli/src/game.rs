//! Terminal presentation of a game in progress.
//!
//! Wraps the core [`GameState`](othello_core::game_state::GameState) and
//! remembers the last move so it can be highlighted.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::cell::Cell;
use othello_core::error::RulesResult;
use othello_core::game_state::{self, MoveOutcome};
use othello_core::player::Player;
use othello_core::rules::GameOutcome;
use othello_core::square::Square;

pub struct GameState {
    core: game_state::GameState,
    last_move: Option<Square>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    /// The side to move, or `None` once the game is over.
    pub fn side_to_move(&self) -> Option<Player> {
        self.core.side_to_move()
    }

    pub fn legal_moves(&self) -> Vec<Square> {
        self.core.legal_moves()
    }

    /// Plays `sq` for the side to move.
    pub fn make_move(&mut self, sq: Square) -> RulesResult<MoveOutcome> {
        let outcome = self.core.make_move(sq)?;
        self.last_move = Some(sq);
        Ok(outcome)
    }

    /// Describes a finished game, e.g. `Black wins (40 - 24)`.
    pub fn result_text(&self) -> Option<String> {
        let (black, white) = self.core.score();
        let text = match self.core.outcome()? {
            GameOutcome::BlackWins => format!("Black wins ({black} - {white})"),
            GameOutcome::WhiteWins => format!("White wins ({black} - {white})"),
            GameOutcome::Draw => format!("Draw ({black} - {white})"),
            GameOutcome::InProgress => return None,
        };
        Some(text)
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let (black_count, white_count) = self.core.score();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..8 {
            print!("  {} │", row + 1);

            for sq in Square::iter().skip(row * 8).take(8) {
                let is_legal = side_to_move.is_some_and(|player| board.is_legal_move(player, sq));
                let is_last_move = Some(sq) == self.last_move;

                let symbol = match board.get(sq) {
                    Cell::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Cell::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Cell::Black => " X ".bright_green(),
                    Cell::White => " O ".bright_yellow(),
                    Cell::Empty if is_legal => " · ".bright_cyan(),
                    Cell::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            match row {
                2 => match side_to_move {
                    Some(Player::Black) => println!("   {}", "Black's turn (X)".bright_green()),
                    Some(Player::White) => println!("   {}", "White's turn (O)".bright_yellow()),
                    None => println!("   {}", "*** Game Over ***".bright_red()),
                },
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 => match self.result_text() {
                    Some(text) => println!("   {}", text.bright_cyan()),
                    None => println!(),
                },
                _ => println!(),
            }

            if row < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}

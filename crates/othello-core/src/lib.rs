//! Rules and search core for an 8x8 Othello/Reversi game.
//!
//! The crate exposes pure board values and functions over them: move
//! generation, flip resolution, pass/terminal detection and a bounded
//! minimax search used by the automated opponent. The turn loop itself is
//! driven by the caller, usually through [`game_state::GameState`].

pub mod bitboard;
pub mod board;
pub mod cell;
pub mod constants;
pub mod error;
pub mod eval;
pub mod flip;
pub mod game_state;
pub mod level;
pub mod move_list;
pub mod perft;
pub mod player;
pub mod rules;
pub mod search;
pub mod selector;
pub mod square;
pub mod types;

pub use board::Board;
pub use cell::Cell;
pub use error::RulesError;
pub use flip::FlipSet;
pub use level::Difficulty;
pub use player::Player;
pub use rules::{GameOutcome, TurnState};
pub use square::Square;

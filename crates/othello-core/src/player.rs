use std::fmt;

use crate::cell::Cell;

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other side. The mapping is total and its own inverse.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the cell value a disc of this side occupies.
    #[inline]
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Returns the side owning a cell, if any.
    #[inline]
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

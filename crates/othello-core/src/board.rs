//! Board representation using one bitboard per colour.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::{ParseBoardError, RulesError};
use crate::flip::{self, FlipSet};
use crate::player::Player;
use crate::square::Square;

/// An 8x8 grid of cells.
///
/// `Board` is a plain `Copy` value: every copy is an independent snapshot and
/// no operation in this crate mutates a board a caller still holds. The two
/// colour layers never overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - White discs on D4 (3,3) and E5 (4,4)
    /// - Black discs on E4 (3,4) and D5 (4,3)
    fn default() -> Self {
        Board {
            black: Square::E4.bitboard() | Square::D5.bitboard(),
            white: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs on it.
    pub fn empty() -> Board {
        Board {
            black: Bitboard::default(),
            white: Bitboard::default(),
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the 64 cells from A1 to H8 in row-major order using
    /// `X` for Black, `O` for White and `-` (or `.`) for empty cells.
    /// Whitespace is ignored, so the 8-line [`Display`](fmt::Display) output
    /// parses back to the same board.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] on an unknown character or a cell count
    /// other than 64.
    pub fn from_string(board_string: &str) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut index = 0;
        for ch in board_string.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(ch).ok_or(ParseBoardError::InvalidChar { ch, index })?;
            if let (Some(sq), Some(player)) = (Square::from_index(index), Player::from_cell(cell)) {
                board = board.with_disc(sq, player);
            }
            index += 1;
        }

        if index != BOARD_SQUARES {
            return Err(ParseBoardError::Length(index));
        }
        Ok(board)
    }

    /// Returns the cell at a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        if self.black.contains(sq) {
            Cell::Black
        } else if self.white.contains(sq) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Returns the cell at a (row, column) coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::OutOfBounds`] for a coordinate outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, RulesError> {
        Ok(self.get(Square::from_row_col(row, col)?))
    }

    /// Returns the discs of one side.
    #[inline(always)]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        !(self.black | self.white)
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Returns the disc counts as `(black, white)`.
    #[inline]
    pub fn count(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    /// Returns the discs `player` would capture by playing at `sq`.
    ///
    /// The set is empty when the square is occupied or nothing is flanked.
    #[inline]
    pub fn flips(&self, player: Player, sq: Square) -> FlipSet {
        flip::flips(self, player, sq)
    }

    /// Checks whether `player` may place a disc at `sq`.
    #[inline]
    pub fn is_legal_move(&self, player: Player, sq: Square) -> bool {
        self.get_moves(player).contains(sq)
    }

    /// Returns a bitboard of the legal moves for `player`.
    #[inline(always)]
    pub fn get_moves(&self, player: Player) -> Bitboard {
        self.discs(player).get_moves(self.discs(player.opponent()))
    }

    /// Returns a copy with a disc of `player` at `sq`, replacing whatever was there.
    pub fn with_disc(&self, sq: Square, player: Player) -> Board {
        let mut board = *self;
        match player {
            Player::Black => {
                board.black = board.black.set(sq);
                board.white = board.white.remove(sq);
            }
            Player::White => {
                board.white = board.white.set(sq);
                board.black = board.black.remove(sq);
            }
        }
        board
    }

    /// Places `player` at `sq` and recolours `flipped`, without checking legality.
    #[inline]
    pub(crate) fn make_move_with_flipped(&self, sq: Square, player: Player, flipped: Bitboard) -> Board {
        let placed = flipped | sq.bitboard();
        match player {
            Player::Black => Board {
                black: self.black | placed,
                white: self.white ^ flipped,
            },
            Player::White => Board {
                black: self.black ^ flipped,
                white: self.white | placed,
            },
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let sq = Square::from_index_unchecked(row * BOARD_SIZE + col);
                write!(f, "{}", self.get(sq).to_char())?;
            }
        }
        Ok(())
    }
}

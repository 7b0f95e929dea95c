use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::error::RulesError;

/// A cell of the board, ranging from A1 to H8.
///
/// Files (columns) are labeled a-h and ranks (rows) 1-8. Row `r` and
/// column `c` of the grid map to index `r * 8 + c`:
///
/// ```text
///   A  B  C  D  E  F  G  H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Creates a square from a (row, column) coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::OutOfBounds`] if either coordinate is not in `0..8`.
    pub fn from_row_col(row: usize, col: usize) -> Result<Square, RulesError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(RulesError::OutOfBounds { row, col });
        }
        Ok(Square::from_index_unchecked(row * BOARD_SIZE + col))
    }

    /// Converts an index (0-63) into a square.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the index is in range, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        (index < BOARD_SQUARES).then(|| Square::from_index_unchecked(index))
    }

    /// Converts an index into a square without a release-mode range check.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` >= 64.
    #[inline]
    pub(crate) fn from_index_unchecked(index: usize) -> Square {
        debug_assert!(
            index < BOARD_SQUARES,
            "Index out of bounds for Square enum. index: {index}"
        );
        // Square is repr(u8) with exactly 64 contiguous variants.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Returns the index (0-63) of the square.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the row (0 for rank 1, 7 for rank 8).
    #[inline]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0 for file a, 7 for file h).
    #[inline]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns a bitboard with only this square set.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Returns the square reached by stepping `(dr, dc)` from this one.
    ///
    /// # Returns
    ///
    /// `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row() as isize + dr;
        let col = self.col() as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Square::from_index_unchecked(
                row as usize * BOARD_SIZE + col as usize,
            ))
        } else {
            None
        }
    }

    /// Iterates over all squares in row-major order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_SQUARES).map(Square::from_index_unchecked)
    }
}

/// Errors produced when parsing a square from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    InvalidFormat,
    InvalidFile(char),
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'd3')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(Square::from_index_unchecked(row * BOARD_SIZE + col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.col() as u8 + b'a';
        let rank = self.row() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(Square::from_row_col(0, 0).unwrap(), Square::A1);
        assert_eq!(Square::from_row_col(2, 3).unwrap(), Square::D3);
        assert_eq!(Square::from_row_col(7, 7).unwrap(), Square::H8);
        assert_eq!(Square::E6.row(), 5);
        assert_eq!(Square::E6.col(), 4);
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            Square::from_row_col(8, 0),
            Err(RulesError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::from_row_col(3, 12),
            Err(RulesError::OutOfBounds { row: 3, col: 12 })
        );
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::D4.offset(-1, -1), Some(Square::C3));
        assert_eq!(Square::D4.offset(1, 0), Some(Square::D5));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::H8.offset(1, 1), None);
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[9], Square::B2);
        assert_eq!(squares[63], Square::H8);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!(Square::from_str("a1").unwrap(), Square::A1);
        assert_eq!(Square::from_str("H8").unwrap(), Square::H8);
        assert_eq!(Square::from_str(" d3 ").unwrap(), Square::D3);
        assert_eq!(Square::from_str(""), Err(SquareError::InvalidFormat));
        assert_eq!(Square::from_str("abc"), Err(SquareError::InvalidFormat));
        assert_eq!(Square::from_str("z1"), Err(SquareError::InvalidFile('z')));
        assert_eq!(Square::from_str("a0"), Err(SquareError::InvalidRank('0')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::F5.to_string(), "f5");
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }
}

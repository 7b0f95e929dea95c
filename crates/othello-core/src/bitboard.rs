//! Bitboard operations and types.
//!
//! A [`Bitboard`] holds one bit per square of the board (bit 0 = A1,
//! bit 63 = H8), so a full colour layer fits in a single `u64`.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::square::Square;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq as u8)
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard().0)
    }

    /// Returns a new bitboard with the bit at the given square cleared.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    /// Checks if the bit at the given square is set.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over all set squares in row-major order.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator { bitboard: self }
    }

    /// Gets the legal moves for the owner of this bitboard.
    ///
    /// # Arguments
    ///
    /// * `opponent` - The opponent's bitboard.
    ///
    /// # Returns
    ///
    /// A `Bitboard` with a bit set for each empty square that flanks at least
    /// one opponent disc.
    #[inline(always)]
    pub fn get_moves(self, opponent: Bitboard) -> Bitboard {
        Bitboard(get_moves(self.0, opponent.0))
    }
}

/// Gets the legal moves for the player by flood-filling each direction.
///
/// Reference: <https://github.com/abulmo/edax-reversi/blob/14f048c05ddfa385b6bf954a9c2905bbe677e9d3/src/board.c#L822>
#[inline(always)]
fn get_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 7) & empty)
        | (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 9) & empty)
        | (get_some_moves(player, opponent & 0x7E7E7E7E7E7E7E7E, 1) & empty)
        | (get_some_moves(player, opponent & 0x00FFFFFFFFFFFF00, 8) & empty)
}

/// Propagates runs of masked opponent discs away from `b` in both senses
/// of the direction `dir` and returns the squares just past each run.
#[inline(always)]
fn get_some_moves(b: u64, mask: u64, dir: u32) -> u64 {
    let mut flip = ((b << dir) | (b >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    (flip << dir) | (flip >> dir)
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the set squares of a bitboard, least significant bit first.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            return None;
        }

        let bits = self.bitboard.0;
        self.bitboard = Bitboard(bits & bits.wrapping_sub(1));
        Some(Square::from_index_unchecked(bits.trailing_zeros() as usize))
    }
}

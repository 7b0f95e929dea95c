/// The content of a single board cell.
///
/// * `Empty` - No disc.
/// * `Black` - A black disc.
/// * `White` - A white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'X'` for `Cell::Black`
    /// * `'O'` for `Cell::White`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    /// Parses a cell from its character representation.
    ///
    /// Accepts `X`/`x` and `O`/`o` for discs and `-` or `.` for empty cells.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::Black),
            'O' | 'o' => Some(Cell::White),
            '-' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

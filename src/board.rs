use std::ops::{BitAnd, BitOr, Not};

/// Side length of the board.
pub const SIZE: usize = 8;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// An 8×8 board packed into a 64-bit integer.
///
/// Bit `row * 8 + col` holds cell `(row, col)`, so row 0 is the least
/// significant byte. Inside the search a set bit means the cell is still
/// available; every board handed out of the crate uses set bits for queens.
///
/// Boards compare and hash as their raw `u64`, which is what makes the
/// numeric minimum of a symmetry orbit well defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Board(pub u64);

impl Board {
    pub const EMPTY: Board = Board(0);
    pub const FULL: Board = Board(u64::MAX);

    /// Converts a (row, col) coordinate pair into a single bit index (0–63).
    #[inline]
    pub const fn index(row: usize, col: usize) -> usize {
        row * SIZE + col
    }

    #[inline]
    const fn mask(row: usize, col: usize) -> u64 {
        1u64 << Self::index(row, col)
    }

    /// Checks whether the bit at (row, col) is set.
    #[inline]
    pub const fn get(self, row: usize, col: usize) -> bool {
        self.0 & Self::mask(row, col) != 0
    }

    /// Sets the bit at (row, col).
    pub fn set(&mut self, row: usize, col: usize) {
        self.0 |= Self::mask(row, col);
    }

    /// Clears the bit at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) {
        self.0 &= !Self::mask(row, col);
    }

    /// Number of set cells.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The 8 bits of `row`, column 0 in bit 0.
    #[inline]
    pub const fn row_bits(self, row: usize) -> u8 {
        ((self.0 >> (row * SIZE)) & 0xFF) as u8
    }

    /// Iterates over set cells as `(row, col)` in ascending bit order.
    pub fn queens(self) -> impl Iterator<Item = (usize, usize)> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some((index / SIZE, index % SIZE))
        })
    }

    /// Builds a board with one queen per row, at `(row, columns[row])`.
    pub fn from_columns(columns: [usize; SIZE]) -> Board {
        let mut board = Board::EMPTY;
        for (row, &col) in columns.iter().enumerate() {
            board.set(row, col);
        }
        board
    }

    /// The column of the queen in each row, or `None` unless every row holds
    /// exactly one queen.
    pub fn columns(self) -> Option<[usize; SIZE]> {
        let mut columns = [0; SIZE];
        for (row, slot) in columns.iter_mut().enumerate() {
            let bits = self.row_bits(row);
            if bits.count_ones() != 1 {
                return None;
            }
            *slot = bits.trailing_zeros() as usize;
        }
        Some(columns)
    }

    /// True when the set bits form a complete, non-attacking placement.
    pub fn is_solution(self) -> bool {
        let Some(columns) = self.columns() else {
            return false;
        };
        for r1 in 0..SIZE {
            for r2 in r1 + 1..SIZE {
                let (c1, c2) = (columns[r1], columns[r2]);
                if c1 == c2 || r2 - r1 == c1.abs_diff(c2) {
                    return false;
                }
            }
        }
        true
    }
}

impl BitAnd for Board {
    type Output = Board;

    fn bitand(self, rhs: Board) -> Board {
        Board(self.0 & rhs.0)
    }
}

impl BitOr for Board {
    type Output = Board;

    fn bitor(self, rhs: Board) -> Board {
        Board(self.0 | rhs.0)
    }
}

impl Not for Board {
    type Output = Board;

    fn not(self) -> Board {
        Board(!self.0)
    }
}

impl From<u64> for Board {
    fn from(bits: u64) -> Board {
        Board(bits)
    }
}

impl From<Board> for u64 {
    fn from(board: Board) -> u64 {
        board.0
    }
}

//! Precomputed queen attack masks.
//!
//! The table is a pure function of board geometry, so it is evaluated at
//! compile time and shared read-only by every search.

use std::ops::Index;

use crate::board::{Board, CELLS, SIZE};

/// Cells with `row + col == 7`.
const ANTI_DIAGONAL: u64 = 0x0102_0408_1020_4080;
/// Cells with `row == col`.
const MAIN_DIAGONAL: u64 = 0x8040_2010_0804_0201;

/// All 8 cells of `row`.
pub const fn row_mask(row: usize) -> u64 {
    0xFF << (row * SIZE)
}

/// Column `col` in every row.
pub const fn col_mask(col: usize) -> u64 {
    0x0101_0101_0101_0101 << col
}

/// Both diagonals through `(row, col)`.
///
/// Each full diagonal is moved a whole number of rows towards the cell; bits
/// pushed past either end of the board fall off the `u64`.
pub const fn diag_mask(row: usize, col: usize) -> u64 {
    let anti = if row + col > 7 {
        ANTI_DIAGONAL << ((row + col - 7) * SIZE)
    } else {
        ANTI_DIAGONAL >> ((7 - row - col) * SIZE)
    };
    let main = if row > col {
        MAIN_DIAGONAL << ((row - col) * SIZE)
    } else {
        MAIN_DIAGONAL >> ((col - row) * SIZE)
    };
    anti | main
}

/// For every cell, the cells a queen standing there attacks (itself excluded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackTable([Board; CELLS]);

impl AttackTable {
    pub const fn build() -> Self {
        let mut masks = [Board::EMPTY; CELLS];
        let mut cell = 0;
        while cell < CELLS {
            let (row, col) = (cell / SIZE, cell % SIZE);
            let own = 1u64 << cell;
            masks[cell] = Board((row_mask(row) | col_mask(col) | diag_mask(row, col)) & !own);
            cell += 1;
        }
        Self(masks)
    }

    /// Attack mask for a queen at `(row, col)`.
    #[inline]
    pub const fn at(&self, row: usize, col: usize) -> Board {
        self.0[Board::index(row, col)]
    }

    /// Union of the attack masks of every set cell in `board`.
    pub fn threatened(&self, board: Board) -> Board {
        board
            .queens()
            .fold(Board::EMPTY, |acc, (row, col)| acc | self.at(row, col))
    }
}

impl Index<usize> for AttackTable {
    type Output = Board;

    fn index(&self, cell: usize) -> &Board {
        &self.0[cell]
    }
}

/// The process-wide attack table.
pub static ATTACKS: AttackTable = AttackTable::build();

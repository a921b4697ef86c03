use std::fmt;

use crate::board::{Board, SIZE};

/// Text grid of `board`: `Q` for set cells, `.` otherwise, each followed by a
/// space, one line per row starting at row 0.
pub fn to_text(board: Board) -> String {
    board.to_string()
}

/// Set cells in algebraic form (`a1, e2, ...`): the file is the column letter
/// and the rank is `row + 1`.
pub fn notation(board: Board) -> String {
    board
        .queens()
        .map(|(row, col)| format!("{}{}", (b'a' + col as u8) as char, row + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Queen columns for each row as a compact digit string, e.g. `04752613`.
pub fn column_digits(board: Board) -> Option<String> {
    board
        .columns()
        .map(|columns| columns.iter().map(|col| col.to_string()).collect())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                f.write_str(if self.get(row, col) { "Q " } else { ". " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

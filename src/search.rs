use crate::attacks::{AttackTable, ATTACKS};
use crate::board::{Board, SIZE};

/// Number of solutions on the standard board.
pub const SOLUTION_COUNT: usize = 92;

/// One pending placement: the cells still available and the row to fill next.
#[derive(Clone, Copy, Debug)]
struct Frame {
    available: Board,
    row: usize,
}

/// Counters collected while walking the search tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames pushed onto the stack, including the root.
    pub frames_pushed: usize,
    /// Frames popped below the last row with no available column left.
    pub dead_ends: usize,
    pub solutions: usize,
}

/// Enumerates every solution using the shared attack table.
pub fn solve() -> Vec<Board> {
    solve_with(&ATTACKS)
}

pub fn solve_with(table: &AttackTable) -> Vec<Board> {
    solve_with_stats(table).0
}

/// Iterative depth-first search over rows 0..8.
///
/// A queen placed at `(row, col)` keeps its own bit, because attack masks
/// exclude the attacking cell, while every cell it attacks is cleared. Once
/// all rows are filled the remaining set bits are exactly the queens.
///
/// Columns are pushed in ascending order, so they are explored in descending
/// order; the resulting sequence is the same on every run.
pub fn solve_with_stats(table: &AttackTable) -> (Vec<Board>, SearchStats) {
    let mut solutions = Vec::with_capacity(SOLUTION_COUNT);
    let mut stats = SearchStats::default();
    let mut stack = vec![Frame {
        available: Board::FULL,
        row: 0,
    }];
    stats.frames_pushed += 1;

    while let Some(Frame { available, row }) = stack.pop() {
        if row == SIZE {
            solutions.push(available);
            continue;
        }

        let candidates = available.row_bits(row);
        if candidates == 0 {
            stats.dead_ends += 1;
            continue;
        }
        for col in 0..SIZE {
            if candidates & (1 << col) != 0 {
                stack.push(Frame {
                    available: available & !table.at(row, col),
                    row: row + 1,
                });
                stats.frames_pushed += 1;
            }
        }
    }

    stats.solutions = solutions.len();
    log::debug!(
        "search finished: {} solutions, {} frames, {} dead ends",
        stats.solutions,
        stats.frames_pushed,
        stats.dead_ends
    );
    (solutions, stats)
}

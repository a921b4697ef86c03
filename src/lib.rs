//! Bitboard solver for the 8-Queens puzzle.
//!
//! Boards are 64-bit integers with bit `row * 8 + col` standing for cell
//! `(row, col)`. [`enumerate_all`] walks the search tree with precomputed
//! attack masks and returns all 92 placements; [`enumerate_unique`] folds
//! them into the 12 classes that are distinct under rotation and reflection.

pub mod attacks;
pub mod board;
pub mod catalog;
pub mod export;
pub mod render;
pub mod search;
pub mod symmetry;

use std::collections::HashSet;

pub use attacks::{AttackTable, ATTACKS};
pub use board::Board;
pub use catalog::{Entry, SolutionCatalog};
pub use render::to_text;
pub use search::SearchStats;
pub use symmetry::{canonical, Symmetry};

/// Every solution, in search order.
pub fn enumerate_all() -> Vec<Board> {
    search::solve()
}

/// Canonical forms of all solutions, one per symmetry class.
pub fn enumerate_unique() -> HashSet<Board> {
    symmetry::unique_solutions(&enumerate_all())
}

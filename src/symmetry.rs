//! The eight symmetries of the square acting on [`Board`] bit layouts.
//!
//! Every transform is a bit permutation of the 64-bit encoding, so it works
//! on any board, not only on solutions. [`canonical`] picks the numerically
//! smallest member of a board's orbit, which serves as the deduplication key
//! for symmetric solutions.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Board, SIZE};

/// Mirrors every row left to right.
pub fn flip_horizontal(board: Board) -> Board {
    let mut result = 0u64;
    for row in 0..SIZE {
        result |= u64::from(board.row_bits(row).reverse_bits()) << (row * SIZE);
    }
    Board(result)
}

/// Reverses the order of the rows; each row keeps its bit order.
pub fn flip_vertical(board: Board) -> Board {
    Board(board.0.swap_bytes())
}

/// Reflects across the `row == col` diagonal.
pub fn transpose(board: Board) -> Board {
    board.queens().fold(Board::EMPTY, |mut result, (row, col)| {
        result.set(col, row);
        result
    })
}

/// Quarter turn: `(r, c)` moves to `(7 - c, r)`, clockwise when row 0 is
/// drawn along the bottom edge.
pub fn rotate90(board: Board) -> Board {
    flip_vertical(transpose(board))
}

pub fn rotate180(board: Board) -> Board {
    flip_vertical(flip_horizontal(board))
}

/// Inverse of [`rotate90`]: `(r, c)` moves to `(c, 7 - r)`.
pub fn rotate270(board: Board) -> Board {
    flip_horizontal(transpose(board))
}

/// An element of the dihedral group of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Flip,
    FlipRotate90,
    FlipRotate180,
    FlipRotate270,
}

impl Symmetry {
    /// The whole group; rotations first, then each rotation after a
    /// horizontal flip.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::Flip,
        Symmetry::FlipRotate90,
        Symmetry::FlipRotate180,
        Symmetry::FlipRotate270,
    ];

    pub fn apply(self, board: Board) -> Board {
        match self {
            Symmetry::Identity => board,
            Symmetry::Rotate90 => rotate90(board),
            Symmetry::Rotate180 => rotate180(board),
            Symmetry::Rotate270 => rotate270(board),
            Symmetry::Flip => flip_horizontal(board),
            Symmetry::FlipRotate90 => rotate90(flip_horizontal(board)),
            Symmetry::FlipRotate180 => rotate180(flip_horizontal(board)),
            Symmetry::FlipRotate270 => rotate270(flip_horizontal(board)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Symmetry::Identity => "Identity",
            Symmetry::Rotate90 => "Rotate 90°",
            Symmetry::Rotate180 => "Rotate 180°",
            Symmetry::Rotate270 => "Rotate 270°",
            Symmetry::Flip => "Flip",
            Symmetry::FlipRotate90 => "Flip + Rotate 90°",
            Symmetry::FlipRotate180 => "Flip + Rotate 180°",
            Symmetry::FlipRotate270 => "Flip + Rotate 270°",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All eight images of `board`, in [`Symmetry::ALL`] order.
pub fn orbit(board: Board) -> [Board; 8] {
    Symmetry::ALL.map(|symmetry| symmetry.apply(board))
}

/// The smallest image of `board` under the group, compared as `u64`.
pub fn canonical(board: Board) -> Board {
    orbit(board).into_iter().min().unwrap_or(board)
}

/// Canonical forms of `solutions`, one per symmetry class.
pub fn unique_solutions(solutions: &[Board]) -> HashSet<Board> {
    solutions.iter().map(|&board| canonical(board)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn single(row: usize, col: usize) -> Board {
        let mut board = Board::EMPTY;
        board.set(row, col);
        board
    }

    fn random_boards() -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut boards: Vec<Board> = (0..256).map(|_| Board(rng.gen())).collect();
        boards.extend([Board::EMPTY, Board::FULL, Board(1), Board(1 << 63)]);
        boards
    }

    #[test]
    fn test_single_cell_images() {
        let cell = single(1, 2);
        assert_eq!(flip_horizontal(cell), single(1, 5));
        assert_eq!(flip_vertical(cell), single(6, 2));
        assert_eq!(transpose(cell), single(2, 1));
        assert_eq!(rotate90(cell), single(5, 1));
        assert_eq!(rotate180(cell), single(6, 5));
        assert_eq!(rotate270(cell), single(2, 6));
    }

    #[test]
    fn test_rotation_cycle() {
        for board in random_boards() {
            let mut current = board;
            for _ in 0..4 {
                current = rotate90(current);
            }
            assert_eq!(current, board);
            assert_eq!(rotate180(rotate180(board)), board);
            assert_eq!(rotate90(rotate270(board)), board);
            assert_eq!(rotate90(rotate90(board)), rotate180(board));
        }
    }

    #[test]
    fn test_flips_are_involutions() {
        for board in random_boards() {
            assert_eq!(flip_horizontal(flip_horizontal(board)), board);
            assert_eq!(flip_vertical(flip_vertical(board)), board);
            assert_eq!(transpose(transpose(board)), board);
        }
    }

    #[test]
    fn test_transforms_preserve_population() {
        for board in random_boards() {
            for image in orbit(board) {
                assert_eq!(image.count(), board.count());
            }
        }
    }

    #[test]
    fn test_orbit_of_asymmetric_cell_is_distinct() {
        let images = orbit(single(1, 2));
        let distinct: HashSet<_> = images.iter().collect();
        assert_eq!(distinct.len(), 8);
        assert_eq!(images[0], single(1, 2));
    }

    #[test]
    fn test_canonical_idempotent_and_invariant() {
        for board in random_boards() {
            let key = canonical(board);
            assert_eq!(canonical(key), key);
            for symmetry in Symmetry::ALL {
                assert_eq!(canonical(symmetry.apply(board)), key, "{symmetry}");
            }
            assert!(key <= board);
        }
    }

    #[test]
    fn test_rotate90_walks_the_corners_clockwise() {
        // a1 -> a8 -> h8 -> h1 with rank 1 at the bottom.
        assert_eq!(rotate90(single(0, 0)), single(7, 0));
        assert_eq!(rotate90(single(7, 0)), single(7, 7));
        assert_eq!(rotate90(single(7, 7)), single(0, 7));
        assert_eq!(rotate90(single(0, 7)), single(0, 0));
    }

    #[test]
    fn test_canonical_of_corner_is_bit_zero() {
        assert_eq!(canonical(single(7, 7)), single(0, 0));
        assert_eq!(canonical(single(0, 7)), single(0, 0));
    }

    #[test]
    fn test_unique_solutions_collapses_orbit() {
        let board = Board::from_columns([0, 4, 7, 5, 2, 6, 1, 3]);
        let images = orbit(board);
        let unique = unique_solutions(&images);
        assert_eq!(unique.len(), 1);
        assert!(unique.contains(&canonical(board)));
    }
}

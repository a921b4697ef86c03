use std::collections::HashSet;

use eight_queens::symmetry::{flip_horizontal, orbit, rotate180, rotate90};
use eight_queens::{canonical, enumerate_all, enumerate_unique, to_text, Board, Symmetry, ATTACKS};

#[test]
fn test_cardinality() {
    assert_eq!(enumerate_all().len(), 92);
    assert_eq!(enumerate_unique().len(), 12);
}

#[test]
fn test_repeated_runs_agree() {
    assert_eq!(enumerate_all(), enumerate_all());
    assert_eq!(enumerate_unique(), enumerate_unique());
}

#[test]
fn test_every_solution_is_non_attacking() {
    for board in enumerate_all() {
        let queens: Vec<_> = board.queens().collect();
        assert_eq!(queens.len(), 8);
        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                assert_ne!(r1, r2);
                assert_ne!(c1, c2);
                assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2));
            }
            // No other queen sits on an attacked cell.
            assert_eq!(ATTACKS.at(r1, c1) & board, Board::EMPTY);
        }
    }
}

#[test]
fn test_full_enumeration_has_no_duplicates() {
    let all = enumerate_all();
    let distinct: HashSet<u64> = all.iter().map(|board| board.0).collect();
    assert_eq!(distinct.len(), 92);
}

#[test]
fn test_unique_set_holds_canonical_forms() {
    let all: HashSet<Board> = enumerate_all().into_iter().collect();
    for key in enumerate_unique() {
        assert_eq!(canonical(key), key);
        assert!(all.contains(&key), "canonical form is itself a solution");
    }
}

#[test]
fn test_solution_set_is_closed_under_symmetry() {
    let all: HashSet<Board> = enumerate_all().into_iter().collect();
    for &board in &all {
        for symmetry in Symmetry::ALL {
            assert!(all.contains(&symmetry.apply(board)), "{symmetry} of {board:?}");
        }
    }
}

#[test]
fn test_group_identities_on_solutions() {
    for board in enumerate_all() {
        assert_eq!(rotate180(rotate180(board)), board);
        assert_eq!(flip_horizontal(flip_horizontal(board)), board);
        assert_eq!(rotate90(rotate90(rotate90(rotate90(board)))), board);
    }
}

#[test]
fn test_known_solution_and_its_class() {
    let known = Board::from_columns([0, 4, 7, 5, 2, 6, 1, 3]);
    let all = enumerate_all();
    assert!(all.contains(&known));

    let key = canonical(known);
    let siblings = all
        .iter()
        .filter(|&&board| board != known && canonical(board) == key)
        .count();
    assert!(siblings >= 1);

    let images: HashSet<_> = orbit(known).into_iter().collect();
    assert_eq!(siblings + 1, images.len());
}

#[test]
fn test_rendered_solution_has_one_queen_per_line() {
    for board in enumerate_all() {
        let text = to_text(board);
        assert_eq!(text.lines().count(), 8);
        for line in text.lines() {
            assert_eq!(line.matches('Q').count(), 1, "{text}");
            assert_eq!(line.split_whitespace().count(), 8);
        }
    }
}

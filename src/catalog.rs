use std::collections::HashMap;

use crate::attacks::ATTACKS;
use crate::board::Board;
use crate::search::{solve_with_stats, SearchStats};
use crate::symmetry::canonical;

/// A solution together with its place among the symmetry classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub board: Board,
    pub canonical: Board,
    /// Class id, numbered by first appearance in search order.
    pub class: usize,
    /// First member of its class in search order.
    pub representative: bool,
}

/// Every solution in search order, grouped into symmetry classes.
#[derive(Clone, Debug)]
pub struct SolutionCatalog {
    entries: Vec<Entry>,
    class_sizes: Vec<usize>,
    stats: SearchStats,
}

impl SolutionCatalog {
    /// Runs the search once and classifies the results.
    pub fn build() -> Self {
        let (solutions, stats) = solve_with_stats(&ATTACKS);
        let catalog = Self::from_solutions(&solutions, stats);
        log::info!(
            "catalogued {} solutions in {} symmetry classes",
            catalog.len(),
            catalog.unique_len()
        );
        catalog
    }

    pub fn from_solutions(solutions: &[Board], stats: SearchStats) -> Self {
        let mut classes: HashMap<Board, usize> = HashMap::new();
        let mut class_sizes = Vec::new();
        let mut entries = Vec::with_capacity(solutions.len());

        for &board in solutions {
            let key = canonical(board);
            let next_id = class_sizes.len();
            let class = *classes.entry(key).or_insert(next_id);
            let representative = class == next_id;
            if representative {
                class_sizes.push(0);
            }
            class_sizes[class] += 1;
            entries.push(Entry {
                board,
                canonical: key,
                class,
                representative,
            });
        }

        Self {
            entries,
            class_sizes,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of symmetry classes.
    pub fn unique_len(&self) -> usize {
        self.class_sizes.len()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// One entry per class, in class id order.
    pub fn representatives(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.representative)
    }

    pub fn class_size(&self, class: usize) -> Option<usize> {
        self.class_sizes.get(class).copied()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

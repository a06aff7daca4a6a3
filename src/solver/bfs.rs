use indexmap::map::Entry::Vacant;
use std::collections::VecDeque;

use crate::path::{reverse_path, NO_PARENT};
use crate::solver::{GridSolver, SearchResult};
use crate::{Coord, FxIndexMap, SearchSpace};

/// Breadth-first search. Finds a path with the fewest cells and ignores cost and delay.
///
/// A cell is marked visited when it is enqueued, so each cell enters the queue at most once and
/// [SearchResult::visited] lists cells in enqueue order.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search<G: SearchSpace>(&self, grid: &G, start: Coord, end: Coord) -> SearchResult {
        // Insertion order doubles as the visited order, values link to the discovering entry.
        let mut parents: FxIndexMap<Coord, usize> = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        let mut queue = VecDeque::from([0]);
        while let Some(index) = queue.pop_front() {
            let Some((&current, _)) = parents.get_index(index) else {
                continue;
            };
            if current == end {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchResult {
                    visited: parents.into_keys().collect(),
                    path: Some(path),
                };
            }
            for neighbour in grid.neighbours(&current) {
                if let Vacant(e) = parents.entry(neighbour) {
                    queue.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        SearchResult {
            visited: parents.into_keys().collect(),
            path: None,
        }
    }
}

use indexmap::map::Entry::Vacant;

use crate::path::{reverse_path, NO_PARENT};
use crate::solver::{GridSolver, SearchResult};
use crate::{Coord, FxIndexMap, SearchSpace};

/// Iterative depth-first search. Returns some path if one exists, with no guarantee on its
/// length.
///
/// The stack holds `(cell, predecessor)` entries and a cell is only marked visited when it is
/// popped, so a cell can be pushed several times and later duplicates are skipped. Neighbours are
/// pushed in direction order, which means the last direction is explored first. Keeping the
/// predecessor in the entry instead of the whole path so far bounds memory by the number of
/// pushes while producing the same path.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search<G: SearchSpace>(&self, grid: &G, start: Coord, end: Coord) -> SearchResult {
        let mut parents: FxIndexMap<Coord, usize> = FxIndexMap::default();
        let mut stack = vec![(start, NO_PARENT)];
        while let Some((current, parent)) = stack.pop() {
            let Vacant(e) = parents.entry(current) else {
                continue;
            };
            let index = e.index();
            e.insert(parent);
            if current == end {
                let path = reverse_path(&parents, |&p| p, index);
                return SearchResult {
                    visited: parents.into_keys().collect(),
                    path: Some(path),
                };
            }
            for neighbour in grid.neighbours(&current) {
                if !parents.contains_key(&neighbour) {
                    stack.push((neighbour, index));
                }
            }
        }
        SearchResult {
            visited: parents.into_keys().collect(),
            path: None,
        }
    }
}

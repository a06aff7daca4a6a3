use crate::solver::{weighted_search, GridSolver, SearchResult};
use crate::{Coord, SearchSpace};

/// Dijkstra's algorithm: cost-minimal paths for non-negative cell weights (cost plus delay).
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search<G: SearchSpace>(&self, grid: &G, start: Coord, end: Coord) -> SearchResult {
        weighted_search(grid, start, end, |_| 0)
    }
}

use crate::solver::{weighted_search, GridSolver, SearchResult};
use crate::{Coord, SearchSpace};

/// A* with the Manhattan distance as heuristic. With the default `heuristic_factor` of 1.0 the
/// heuristic is admissible and consistent for cell weights >= 1, so paths are as cheap as
/// Dijkstra's.
///
/// Setting `heuristic_factor` above 1.0 gives Weighted A*, which favours cells closer to the
/// goal and can visit fewer cells, at the price of optimality.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        AstarSolver { heuristic_factor }
    }

    /// Just the Manhattan distance times the heuristic factor.
    pub fn heuristic(&self, p1: &Coord, p2: &Coord) -> u64 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u64
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search<G: SearchSpace>(&self, grid: &G, start: Coord, end: Coord) -> SearchResult {
        weighted_search(grid, start, end, |node| self.heuristic(node, &end))
    }
}

use core::fmt;
use std::str::FromStr;

use log::debug;

use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::grid::SearchSpace;
use crate::search_context::SearchContext;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// The uniform output of every solver: the cells in the order the algorithm visited them and,
/// if the end was reached, the path from start to end inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub visited: Vec<Coord>,
    pub path: Option<Vec<Coord>>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
    /// The path, or an empty slice if no path exists.
    pub fn path(&self) -> &[Coord] {
        self.path.as_deref().unwrap_or_default()
    }
    /// Number of cells on the path including both endpoints, 0 if none was found.
    pub fn path_len(&self) -> usize {
        self.path().len()
    }
}

/// A single-source single-goal search over a [SearchSpace].
///
/// Implementors only provide [search](GridSolver::search); [solve](GridSolver::solve) normalizes
/// the coordinates and fails fast on out-of-bounds endpoints. Start and end are expected to be
/// open: solvers do not clear obstacles themselves.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search on endpoints that are known to be in bounds.
    fn search<G: SearchSpace>(&self, grid: &G, start: Coord, end: Coord) -> SearchResult;

    fn solve<G: SearchSpace>(
        &self,
        grid: &G,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
    ) -> Result<SearchResult> {
        let start = start.into();
        let end = end.into();
        grid.check_bounds(&start)?;
        grid.check_bounds(&end)?;
        debug!("{}: searching from {} to {}", self.name(), start, end);
        let result = self.search(grid, start, end);
        debug!(
            "{}: visited {} cells, path length {}",
            self.name(),
            result.visited.len(),
            result.path_len()
        );
        Ok(result)
    }

    /// Convenience wrapper returning only the path.
    fn get_path<G: SearchSpace>(
        &self,
        grid: &G,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
    ) -> Result<Option<Vec<Coord>>> {
        Ok(self.solve(grid, start, end)?.path)
    }
}

/// Cost-aware best-first search where entering a cell costs its [weight](SearchSpace::weight).
/// Dijkstra passes a zero heuristic, A* the scaled Manhattan distance.
pub(crate) fn weighted_search<G, FH>(
    grid: &G,
    start: Coord,
    end: Coord,
    heuristic: FH,
) -> SearchResult
where
    G: SearchSpace,
    FH: FnMut(&Coord) -> u64,
{
    let outcome = SearchContext::new().best_first_search(
        &start,
        move |node| {
            grid.neighbours(node)
                .into_iter()
                .map(move |n| (n, grid.weight(&n)))
        },
        heuristic,
        |node| *node == end,
    );
    SearchResult {
        visited: outcome.visited,
        path: outcome.path.map(|(path, _cost)| path),
    }
}

/// Name-based selection of the four solvers with their default settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    pub fn solve<G: SearchSpace>(
        self,
        grid: &G,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
    ) -> Result<SearchResult> {
        match self {
            Algorithm::Bfs => BfsSolver.solve(grid, start, end),
            Algorithm::Dfs => DfsSolver.solve(grid, start, end),
            Algorithm::Dijkstra => DijkstraSolver.solve(grid, start, end),
            Algorithm::Astar => AstarSolver::new().solve(grid, start, end),
        }
    }

    /// Whether the returned path is guaranteed minimal (in edges for BFS, in cost otherwise).
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Whether cell cost and delay are taken into account.
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::Astar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Astar => "A*",
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" => Ok(Algorithm::Astar),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

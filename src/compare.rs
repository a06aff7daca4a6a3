//! Runs several algorithms on the same grid and checks that their results agree with what each
//! algorithm guarantees.
use itertools::Itertools;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::solver::{Algorithm, SearchResult};
use crate::{Coord, Grid};

/// The result of one algorithm within a [Comparison].
#[derive(Clone, Debug)]
pub struct Outcome {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// Total weight of the path, `None` if no path was found.
    pub path_cost: Option<u64>,
}

impl Outcome {
    pub fn path_len(&self) -> usize {
        self.result.path_len()
    }
    pub fn visited_len(&self) -> usize {
        self.result.visited.len()
    }
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub start: Coord,
    pub end: Coord,
    /// Whether every open cell had weight 1, which makes BFS cost-optimal too.
    pub uniform_cost: bool,
    pub outcomes: Vec<Outcome>,
}

impl Comparison {
    pub fn get(&self, algorithm: Algorithm) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }

    /// Checks every pair of outcomes:
    /// - all algorithms agree on whether a path exists;
    /// - Dijkstra and A* return paths of equal cost;
    /// - BFS has no more cells than a weighted path and no lower cost, and on uniform-cost grids
    ///   all optimal algorithms return paths of equal length.
    ///
    /// DFS is only held to path existence.
    pub fn check(&self) -> Result<()> {
        for (a, b) in self.outcomes.iter().tuple_combinations() {
            if let Err(e) = self.check_pair(a, b) {
                warn!("{}", e);
                return Err(e);
            }
        }
        Ok(())
    }

    fn check_pair(&self, a: &Outcome, b: &Outcome) -> Result<()> {
        let disagreement = |detail: String| Error::Disagreement {
            first: a.algorithm,
            second: b.algorithm,
            detail,
        };
        if a.result.found() != b.result.found() {
            return Err(disagreement(format!(
                "path found: {} vs {}",
                a.result.found(),
                b.result.found()
            )));
        }
        if !a.result.found() || !a.algorithm.is_optimal() || !b.algorithm.is_optimal() {
            return Ok(());
        }
        if a.algorithm.is_weighted() && b.algorithm.is_weighted() && a.path_cost != b.path_cost {
            return Err(disagreement(format!(
                "path cost {:?} vs {:?}",
                a.path_cost, b.path_cost
            )));
        }
        if self.uniform_cost && a.path_len() != b.path_len() {
            return Err(disagreement(format!(
                "path length {} vs {} on a uniform-cost grid",
                a.path_len(),
                b.path_len()
            )));
        }
        let (bfs, weighted) = match (a.algorithm, b.algorithm) {
            (Algorithm::Bfs, _) => (a, b),
            (_, Algorithm::Bfs) => (b, a),
            _ => return Ok(()),
        };
        if !weighted.algorithm.is_weighted() {
            return Ok(());
        }
        if bfs.path_len() > weighted.path_len() || bfs.path_cost < weighted.path_cost {
            return Err(disagreement(format!(
                "BFS has {} cells at cost {:?}, {} has {} cells at cost {:?}",
                bfs.path_len(),
                bfs.path_cost,
                weighted.algorithm,
                weighted.path_len(),
                weighted.path_cost
            )));
        }
        Ok(())
    }
}

/// Runs each algorithm on `grid` from `start` to `end`.
pub fn compare(
    grid: &Grid,
    start: impl Into<Coord>,
    end: impl Into<Coord>,
    algorithms: &[Algorithm],
) -> Result<Comparison> {
    let start = start.into();
    let end = end.into();
    let outcomes = algorithms
        .iter()
        .map(|&algorithm| -> Result<Outcome> {
            let result = algorithm.solve(grid, start, end)?;
            let path_cost = result.path.as_deref().map(|p| grid.path_cost(p));
            info!(
                "{}: path length {}, explored {} cells",
                algorithm,
                result.path_len(),
                result.visited.len()
            );
            Ok(Outcome {
                algorithm,
                result,
                path_cost,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Comparison {
        start,
        end,
        uniform_cost: grid.is_uniform_cost(),
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_agrees() {
        let grid = Grid::new(20, 30);
        let comparison = compare(&grid, (1, 1), (18, 18), &Algorithm::ALL).unwrap();
        comparison.check().unwrap();
        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::Astar] {
            assert_eq!(comparison.get(algorithm).unwrap().path_len(), 35);
        }
    }

    #[test]
    fn weighted_grid_bfs_is_shorter_but_costlier() {
        let mut grid = Grid::new(2, 3);
        grid.set_delay((0, 1), 5).unwrap();
        let comparison = compare(&grid, (0, 0), (0, 2), &Algorithm::ALL).unwrap();
        assert!(!comparison.uniform_cost);
        comparison.check().unwrap();
        let bfs = comparison.get(Algorithm::Bfs).unwrap();
        let dijkstra = comparison.get(Algorithm::Dijkstra).unwrap();
        assert_eq!((bfs.path_len(), bfs.path_cost), (3, Some(7)));
        assert_eq!((dijkstra.path_len(), dijkstra.path_cost), (5, Some(4)));
    }

    #[test]
    fn cost_mismatch_is_reported() {
        let grid = Grid::new(1, 3);
        let mut comparison =
            compare(&grid, (0, 0), (0, 2), &[Algorithm::Dijkstra, Algorithm::Astar]).unwrap();
        comparison.outcomes[1].path_cost = Some(99);
        assert!(matches!(
            comparison.check(),
            Err(Error::Disagreement {
                first: Algorithm::Dijkstra,
                second: Algorithm::Astar,
                ..
            })
        ));
    }

    #[test]
    fn propagates_bounds_errors() {
        let grid = Grid::new(2, 2);
        assert!(compare(&grid, (0, 0), (2, 2), &Algorithm::ALL).is_err());
    }
}

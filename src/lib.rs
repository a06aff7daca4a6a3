//! # grid_search
//!
//! Shortest- and first-path search on a 4-connected 2D grid. Implements
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) behind one [GridSolver] trait with a
//! uniform [SearchResult]: the visited cells in visiting order and the path, if any.
//!
//! Cells are identified by their [Coord]. Entering a cell costs its cost plus its delay; BFS and
//! DFS ignore weights, Dijkstra and A* minimise them. Weights are unsigned and cost is at least
//! 1, which keeps the Manhattan heuristic of A* admissible.
//!
//! ```
//! use grid_search::{Algorithm, Grid};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.set_obstacle((1, 1), true).unwrap();
//! let result = Algorithm::Astar.solve(&grid, (0, 0), (2, 2)).unwrap();
//! assert_eq!(result.path_len(), 5);
//! ```
mod cell;
pub mod compare;
mod coord;
mod error;
pub mod generate;
mod grid;
pub mod map;
pub mod path;
pub mod search_context;
pub mod solver;

use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

pub use cell::{Cell, Terrain};
pub use compare::{compare, Comparison, Outcome};
pub use coord::{Coord, Direction};
pub use error::{Error, Result};
pub use generate::{generate, GeneratorConfig, Preset};
pub use grid::{Grid, Neighbours, SearchSpace};
pub use map::{parse_map, render, ParsedMap};
pub use solver::{
    astar::AstarSolver, bfs::BfsSolver, dfs::DfsSolver, dijkstra::DijkstraSolver, Algorithm,
    GridSolver, SearchResult,
};

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

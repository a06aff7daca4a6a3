use core::fmt;

use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, Terrain};
use crate::coord::{Coord, Direction};
use crate::error::{Error, Result};

/// Neighbour lists never hold more than the four cardinal moves.
pub type Neighbours = SmallVec<[Coord; 4]>;

/// What a solver needs from a grid. Solvers treat the space as frozen for the duration of a
/// search; mutating it concurrently with a search is the caller's responsibility to prevent.
pub trait SearchSpace {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// In-bounds, non-obstacle neighbours of `coord` in [Direction::ALL](crate::Direction::ALL)
    /// order.
    fn neighbours(&self, coord: &Coord) -> Neighbours;

    /// Weight charged when a search enters `coord` from an adjacent cell. Must be >= 1 for the
    /// Manhattan heuristic to stay admissible.
    fn weight(&self, coord: &Coord) -> u64;

    fn contains(&self, coord: &Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows()
            && (coord.col as usize) < self.cols()
    }

    /// Fails fast with [Error::OutOfBounds] for coordinates outside the space.
    fn check_bounds(&self, coord: &Coord) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                coord: *coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}

/// A fixed-size `rows x cols` grid owning one [Cell] per coordinate, stored row-major.
///
/// In addition to the cells, [Grid] maintains connected components of the open cells using a
/// [UnionFind] structure. Opening a cell joins components directly; blocking one may split a
/// component, which flags the components as dirty until [update](Self::update) or
/// [generate_components](Self::generate_components) is called.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// An open grid where every cell has cost 1.
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid::filled(rows, cols, false)
    }

    /// A grid with every cell set to `blocked`.
    pub fn filled(rows: usize, cols: usize, blocked: bool) -> Grid {
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .map(|(row, col)| {
                let mut cell = Cell::new(Coord::from((row, col)));
                cell.is_obstacle = blocked;
                cell
            })
            .collect();
        let mut grid = Grid {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    fn get_ix(&self, coord: &Coord) -> usize {
        coord.row as usize * self.cols + coord.col as usize
    }

    pub fn cell(&self, coord: impl Into<Coord>) -> Option<&Cell> {
        let coord = coord.into();
        self.contains(&coord).then(|| &self.cells[self.get_ix(&coord)])
    }

    /// Unchecked access for bulk construction. Callers editing obstacles this way must call
    /// [generate_components](Self::generate_components) afterwards.
    pub(crate) fn get_mut(&mut self, coord: &Coord) -> Option<&mut Cell> {
        if self.contains(coord) {
            let ix = self.get_ix(coord);
            Some(&mut self.cells[ix])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, coord: &Coord) -> Result<&mut Cell> {
        self.check_bounds(coord)?;
        let ix = self.get_ix(coord);
        Ok(&mut self.cells[ix])
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Number of cells that are not obstacles.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_obstacle).count()
    }

    /// Out-of-bounds coordinates count as blocked.
    pub fn is_obstacle(&self, coord: impl Into<Coord>) -> bool {
        self.cell(coord).map_or(true, Cell::is_obstacle)
    }

    pub fn can_move_to(&self, coord: &Coord) -> bool {
        !self.is_obstacle(*coord)
    }

    /// Updates the obstacle flag of a cell. Joins newly connected components and flags the
    /// components as dirty if components are (potentially) broken apart into multiple.
    pub fn set_obstacle(&mut self, coord: impl Into<Coord>, blocked: bool) -> Result<()> {
        let coord = coord.into();
        let cell = self.cell_mut(&coord)?;
        let was_blocked = cell.is_obstacle;
        cell.is_obstacle = blocked;
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let ix = self.get_ix(&coord);
            for n in self.neighbours(&coord) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// Forces a cell open, as callers do for start and end cells before a search.
    pub fn open(&mut self, coord: impl Into<Coord>) -> Result<()> {
        self.set_obstacle(coord, false)
    }

    /// Sets the base traversal cost. Zero costs are rejected since they would break the
    /// admissibility of the Manhattan heuristic.
    pub fn set_cost(&mut self, coord: impl Into<Coord>, cost: u32) -> Result<()> {
        let coord = coord.into();
        if cost == 0 {
            return Err(Error::ZeroCost(coord));
        }
        self.cell_mut(&coord)?.cost = cost;
        Ok(())
    }

    pub fn set_delay(&mut self, coord: impl Into<Coord>, delay: u32) -> Result<()> {
        let coord = coord.into();
        self.cell_mut(&coord)?.delay = delay;
        Ok(())
    }

    /// Sets the terrain tag together with the terrain's default cost.
    pub fn set_terrain(&mut self, coord: impl Into<Coord>, terrain: Terrain) -> Result<()> {
        let coord = coord.into();
        let cell = self.cell_mut(&coord)?;
        cell.terrain = terrain;
        cell.cost = terrain.cost();
        Ok(())
    }

    /// True if every open cell has weight 1, in which case BFS is optimal in cost as well.
    pub fn is_uniform_cost(&self) -> bool {
        self.cells
            .iter()
            .filter(|c| !c.is_obstacle)
            .all(|c| c.weight() == 1)
    }

    /// Sum of the entry weights of every cell of the path after the first.
    pub fn path_cost(&self, path: &[Coord]) -> u64 {
        path.iter()
            .skip(1)
            .map(|c| self.weight(c))
            .sum()
    }

    /// Checks that the path runs from `start` to `end` through adjacent, open, in-bounds cells.
    pub fn is_valid_path(&self, path: &[Coord], start: &Coord, end: &Coord) -> bool {
        path.first() == Some(start)
            && path.last() == Some(end)
            && path.iter().all(|c| self.can_move_to(c))
            && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    /// Retrieves the component id a given [Coord] belongs to.
    pub fn get_component(&self, coord: &Coord) -> usize {
        self.components.find(self.get_ix(coord))
    }

    /// Checks if start and goal are open and on the same component. Reads the components as they
    /// are: after blocking cells, call [update](Self::update) first.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coord, goal: &Coord) -> bool {
        if self.can_move_to(start) && self.can_move_to(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// All open cells on the same component as `coord`, in row-major order. Empty if `coord` is
    /// blocked or out of bounds. The components must be up to date, see [update](Self::update).
    pub fn component_of(&self, coord: &Coord) -> Vec<Coord> {
        debug_assert!(
            !self.components_dirty,
            "component_of called on dirty components"
        );
        if !self.can_move_to(coord) {
            return Vec::new();
        }
        self.cells
            .iter()
            .map(Cell::coord)
            .filter(|c| self.reachable(coord, c))
            .collect()
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Only the down and right neighbours need to be linked.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_obstacle {
                continue;
            }
            let coord = self.cells[ix].coord();
            for n in [coord + Direction::Down, coord + Direction::Right] {
                if self.can_move_to(&n) {
                    let n_ix = self.get_ix(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl SearchSpace for Grid {
    fn rows(&self) -> usize {
        self.rows
    }
    fn cols(&self) -> usize {
        self.cols
    }
    fn neighbours(&self, coord: &Coord) -> Neighbours {
        coord
            .neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }
    fn weight(&self, coord: &Coord) -> u64 {
        self.cell(*coord).map_or(1, Cell::weight)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(crate::map::glyph).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

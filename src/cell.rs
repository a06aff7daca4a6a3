use core::fmt;
use std::hash::{Hash, Hasher};

use crate::coord::Coord;

/// Cosmetic ground type of a cell. Each terrain has a matching default traversal cost which
/// [Grid::set_terrain](crate::Grid::set_terrain) applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Normal,
    Road,
    Sand,
    Water,
}

impl Terrain {
    pub fn cost(self) -> u32 {
        match self {
            Terrain::Normal | Terrain::Road => 1,
            Terrain::Sand => 3,
            Terrain::Water => 5,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Terrain::Normal => '.',
            Terrain::Road => '=',
            Terrain::Sand => ':',
            Terrain::Water => '~',
        }
    }
}

/// A single grid position. Equality and hashing only look at the coordinate, so two cells with
/// the same (row, col) are the same cell whatever their other attributes are.
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    pub(crate) is_obstacle: bool,
    pub(crate) cost: u32,
    pub(crate) delay: u32,
    pub(crate) terrain: Terrain,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Cell {
        Cell {
            coord,
            is_obstacle: false,
            cost: 1,
            delay: 0,
            terrain: Terrain::Normal,
        }
    }
    pub fn coord(&self) -> Coord {
        self.coord
    }
    pub fn row(&self) -> i32 {
        self.coord.row
    }
    pub fn col(&self) -> i32 {
        self.coord.col
    }
    pub fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }
    pub fn cost(&self) -> u32 {
        self.cost
    }
    pub fn delay(&self) -> u32 {
        self.delay
    }
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }
    /// Weight charged when a search enters this cell. Widened so that no cost and delay pair
    /// can overflow.
    pub fn weight(&self) -> u64 {
        self.cost as u64 + self.delay as u64
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.coord, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn identity_ignores_attributes() {
        let a = Cell::new(Coord::new(1, 2));
        let mut b = Cell::new(Coord::new(1, 2));
        b.is_obstacle = true;
        b.cost = 4;
        b.delay = 2;
        b.terrain = Terrain::Water;
        assert_eq!(a, b);
        let set: FxHashSet<Cell> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn weight_includes_delay() {
        let mut cell = Cell::new(Coord::new(0, 0));
        cell.cost = 2;
        cell.delay = 5;
        assert_eq!(cell.weight(), 7);
    }
}

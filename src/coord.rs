use core::fmt;
use std::ops::Add;

use grid_util::point::Point;

use crate::cell::Cell;

/// A grid position addressed as (row, col). This is the identity of a cell: every map and set
/// used during search is keyed by [Coord], never by a reference to a [Cell].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }

    /// `|Δrow| + |Δcol|`, the admissible heuristic for 4-directional movement with costs >= 1.
    pub fn manhattan_distance(&self, other: &Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if the two coordinates share an edge.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four candidate neighbours in [Direction::ALL] order, without any bounds check.
    pub fn neumann_neighborhood(&self) -> [Coord; 4] {
        Direction::ALL.map(|dir| *self + dir)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;

    fn add(self, dir: Direction) -> Coord {
        let (d_row, d_col) = dir.offset();
        Coord::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Coord {
        Coord::new(row, col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row as i32, col as i32)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> (i32, i32) {
        (coord.row, coord.col)
    }
}

impl From<&Cell> for Coord {
    fn from(cell: &Cell) -> Coord {
        cell.coord()
    }
}

/// [Point] uses x for the column and y for the row.
impl From<Point> for Coord {
    fn from(point: Point) -> Coord {
        Coord::new(point.y, point.x)
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Point {
        Point::new(coord.col, coord.row)
    }
}

/// The four moves of a 4-connected grid. [Direction::ALL] fixes the order in which neighbours
/// are generated, which decides tie-breaking in every solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// (Δrow, Δcol)
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

use grid_search::{AstarSolver, Grid, GridSolver};
use grid_util::point::Point;

// In this example a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let grid: Grid = "
#####
#...#
#.#.#
#...#
#####
"
    .parse()
    .unwrap();
    // Points are (x, y), coordinates are (row, col)
    let start = Point::new(1, 1);
    let end = Point::new(3, 3);
    if let Some(path) = AstarSolver::new().get_path(&grid, start, end).unwrap() {
        println!("A path has been found:");
        for c in path {
            println!("{}", c);
        }
    }
}

use grid_search::{AstarSolver, Coord, DijkstraSolver, Grid, GridSolver, Terrain};

// A river of water crosses the grid with a single road bridge. Dijkstra and A* take the bridge,
// weighted A* (heuristic_factor above 1) explores fewer cells but may return a costlier path.
fn main() {
    const N: i32 = 20;
    let mut grid = Grid::new(N as usize, N as usize);
    for row in 0..N {
        for col in 8..11 {
            let terrain = if row == 3 { Terrain::Road } else { Terrain::Water };
            grid.set_terrain((row, col), terrain).unwrap();
        }
    }
    for col in 0..N {
        grid.set_delay((N / 2, col), 2).unwrap();
    }
    println!("{}", grid);
    let start = Coord::new(N - 1, 0);
    let end = Coord::new(N - 1, N - 1);
    let dijkstra = DijkstraSolver.solve(&grid, start, end).unwrap();
    println!(
        "Dijkstra: cost {}, visited {}",
        grid.path_cost(dijkstra.path()),
        dijkstra.visited.len()
    );
    for heuristic_factor in [1.0, 1.5, 3.0] {
        let result = AstarSolver::with_heuristic_factor(heuristic_factor)
            .solve(&grid, start, end)
            .unwrap();
        println!(
            "A* ({}): cost {}, visited {}",
            heuristic_factor,
            grid.path_cost(result.path()),
            result.visited.len()
        );
    }
}

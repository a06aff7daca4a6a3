/// Fuzzes the solvers on many random grids: a path is found exactly when the goal shares a
/// connected component with the start, paths are valid, failed searches exhaust the component and
/// the optimal solvers match an exhaustive relaxation of the grid.
use fxhash::FxHashSet;
use grid_search::{Algorithm, AstarSolver, Coord, Grid, GridSolver, SearchSpace};
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, weighted: bool) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let coord = (row, col);
            if rng.gen_bool(0.35) {
                grid.set_obstacle(coord, true).unwrap();
            } else if weighted {
                grid.set_cost(coord, rng.gen_range(1..=9)).unwrap();
                if rng.gen_bool(0.2) {
                    grid.set_delay(coord, rng.gen_range(1..=4)).unwrap();
                }
            }
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, start: &Coord, end: &Coord) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let c = Coord::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_obstacle(c) {
                print!("#");
            } else {
                print!("{}", grid.weight(&c));
            }
        }
        println!();
    }
}

/// Minimum entry weight sum (or cell count with `unit`) from `start` to every cell, found by
/// relaxing all edges until nothing changes.
fn relaxed_distances(grid: &Grid, start: &Coord, unit: bool) -> Vec<Option<u64>> {
    let index = |c: &Coord| c.row as usize * grid.cols() + c.col as usize;
    let mut dist = vec![None; grid.rows() * grid.cols()];
    dist[index(start)] = Some(0u64);
    let mut changed = true;
    while changed {
        changed = false;
        for cell in grid.cells().filter(|c| !c.is_obstacle()) {
            let Some(d) = dist[index(&cell.coord())] else {
                continue;
            };
            for n in grid.neighbours(&cell.coord()) {
                let step = if unit { 1 } else { grid.weight(&n) };
                let candidate = d + step;
                if dist[index(&n)].map_or(true, |old| candidate < old) {
                    dist[index(&n)] = Some(candidate);
                    changed = true;
                }
            }
        }
    }
    dist
}

fn prepared_grids(n: usize, count: usize, weighted: bool) -> Vec<Grid> {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Coord::new(0, 0);
    let end = Coord::new(n as i32 - 1, n as i32 - 1);
    (0..count)
        .map(|_| {
            let mut grid = random_grid(n, n, &mut rng, weighted);
            grid.open(start).unwrap();
            grid.open(end).unwrap();
            grid.generate_components();
            grid
        })
        .collect()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let start = Coord::new(0, 0);
    let end = Coord::new(N as i32 - 1, N as i32 - 1);
    for weighted in [false, true] {
        for grid in prepared_grids(N, N_GRIDS, weighted) {
            let reachable = grid.reachable(&start, &end);
            let component: FxHashSet<Coord> = grid.component_of(&start).into_iter().collect();
            let mut optimal_lengths = Vec::new();
            for algorithm in Algorithm::ALL {
                let result = algorithm.solve(&grid, start, end).unwrap();
                // Show the grid if a path is not found
                if result.found() != reachable {
                    visualize_grid(&grid, &start, &end);
                }
                assert_eq!(result.found(), reachable, "{}", algorithm);
                let visited: FxHashSet<Coord> = result.visited.iter().copied().collect();
                assert_eq!(visited.len(), result.visited.len(), "{}", algorithm);
                if reachable {
                    assert!(grid.is_valid_path(result.path(), &start, &end));
                    let on_path: FxHashSet<&Coord> = result.path().iter().collect();
                    assert_eq!(on_path.len(), result.path_len(), "{}", algorithm);
                    assert!(visited.is_subset(&component));
                    assert!(visited.contains(&end));
                } else {
                    assert_eq!(visited, component, "{}", algorithm);
                }
                if algorithm.is_optimal() {
                    optimal_lengths.push(result.path_len());
                }
            }
            // BFS, Dijkstra and A* agree on path length when every cell costs 1
            if !weighted {
                if optimal_lengths.windows(2).any(|w| w[0] != w[1]) {
                    visualize_grid(&grid, &start, &end);
                }
                assert!(optimal_lengths.windows(2).all(|w| w[0] == w[1]));
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 5;
    const N_GRIDS: usize = 2000;
    let start = Coord::new(0, 0);
    let end = Coord::new(N as i32 - 1, N as i32 - 1);
    let end_ix = (N - 1) * N + N - 1;
    for grid in prepared_grids(N, N_GRIDS, true) {
        let cheapest = relaxed_distances(&grid, &start, false)[end_ix];
        let fewest = relaxed_distances(&grid, &start, true)[end_ix];
        for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
            let result = algorithm.solve(&grid, start, end).unwrap();
            let cost = result.path.as_deref().map(|p| grid.path_cost(p));
            if cost != cheapest {
                println!("{} cost: {:?}; exhaustive cost: {:?}", algorithm, cost, cheapest);
                println!("{} path: {:?}", algorithm, result.path);
                visualize_grid(&grid, &start, &end);
            }
            assert_eq!(cost, cheapest);
        }
        let bfs = Algorithm::Bfs.solve(&grid, start, end).unwrap();
        assert_eq!(bfs.path.as_ref().map(|p| p.len() as u64 - 1), fewest);
    }
}

#[test]
fn fuzz_weighted_astar_stays_valid() {
    const N: usize = 8;
    let start = Coord::new(0, 0);
    let end = Coord::new(N as i32 - 1, N as i32 - 1);
    let greedy = AstarSolver::with_heuristic_factor(3.0);
    for grid in prepared_grids(N, 500, true) {
        let optimal = Algorithm::Dijkstra.solve(&grid, start, end).unwrap();
        let result = greedy.solve(&grid, start, end).unwrap();
        assert_eq!(result.found(), optimal.found());
        if let Some(path) = &result.path {
            assert!(grid.is_valid_path(path, &start, &end));
            assert!(grid.path_cost(path) >= grid.path_cost(optimal.path()));
        }
    }
}

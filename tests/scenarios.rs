use grid_search::{
    compare, generate, Algorithm, AstarSolver, Coord, DfsSolver, GeneratorConfig, Grid, GridSolver,
    Preset, SearchResult,
};

// A partial wall in the middle column
// |S . . . .|
// |. . # . .|
// |. . # . .|
// |. . # . .|
// |. . . . E|
fn walled_grid() -> Grid {
    let mut grid = Grid::new(5, 5);
    for row in 1..=3 {
        grid.set_obstacle((row, 2), true).unwrap();
    }
    grid.update();
    grid
}

#[test]
fn partial_wall_is_bypassed() {
    let grid = walled_grid();
    let dfs = DfsSolver.solve(&grid, (0, 0), (4, 4)).unwrap();
    let astar = AstarSolver::new().solve(&grid, (0, 0), (4, 4)).unwrap();
    for result in [&dfs, &astar] {
        assert!(grid.is_valid_path(result.path(), &Coord::new(0, 0), &Coord::new(4, 4)));
    }
    assert_eq!(astar.path_len(), 9);
    assert!(astar.path_len() <= dfs.path_len());
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let grid = Grid::new(20, 30);
    for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::Astar] {
        let result = algorithm.solve(&grid, (1, 1), (18, 18)).unwrap();
        assert_eq!(result.path_len(), 1 + 17 + 17, "{}", algorithm);
    }
}

#[test]
fn enclosed_end_yields_no_path() {
    let mut grid = Grid::new(5, 5);
    grid.set_obstacle((3, 4), true).unwrap();
    grid.set_obstacle((4, 3), true).unwrap();
    grid.update();
    let reachable = grid.component_of(&Coord::new(0, 0));
    assert_eq!(reachable.len(), grid.open_count() - 1);
    for algorithm in Algorithm::ALL {
        let result = algorithm.solve(&grid, (0, 0), (4, 4)).unwrap();
        assert!(!result.found(), "{}", algorithm);
        assert!(result.path().is_empty());
        let mut visited = result.visited.clone();
        visited.sort();
        assert_eq!(visited, reachable, "{}", algorithm);
    }
}

#[test]
fn repeated_searches_are_identical() {
    let config = GeneratorConfig::default().with_seed(7);
    for preset in Preset::ALL {
        let mut grid = generate(preset, &config);
        grid.open(config.default_start()).unwrap();
        grid.open(config.default_end()).unwrap();
        grid.update();
        for algorithm in Algorithm::ALL {
            let run = || {
                algorithm
                    .solve(&grid, config.default_start(), config.default_end())
                    .unwrap()
            };
            let first: SearchResult = run();
            assert_eq!(first, run(), "{} on {}", algorithm, preset);
        }
    }
}

#[test]
fn presets_pass_the_comparison_checks() {
    let config = GeneratorConfig::default().with_seed(3);
    for preset in Preset::ALL {
        let mut grid = generate(preset, &config);
        grid.open(config.default_start()).unwrap();
        grid.open(config.default_end()).unwrap();
        grid.update();
        let comparison = compare(
            &grid,
            config.default_start(),
            config.default_end(),
            &Algorithm::ALL,
        )
        .unwrap();
        comparison.check().unwrap();
        let reachable = grid.reachable(&config.default_start(), &config.default_end());
        assert!(comparison
            .outcomes
            .iter()
            .all(|o| o.result.found() == reachable));
    }
}

#[test]
fn parsed_map_round_trip_through_the_solvers() {
    let map = grid_search::parse_map(
        "
S..#....
.#.#.##.
.#...#..
.####.#.
......#E
",
    )
    .unwrap();
    let (start, end) = (map.start.unwrap(), map.end.unwrap());
    let result = Algorithm::Bfs.solve(&map.grid, start, end).unwrap();
    assert!(map.grid.is_valid_path(result.path(), &start, &end));
    let drawing = grid_search::render(&map.grid, &start, &end, &result);
    assert_eq!(drawing.lines().count(), 5);
    assert_eq!(drawing.matches('*').count(), result.path_len() - 2);
}

#[cfg(feature = "serde")]
#[test]
fn search_results_serialize() {
    let grid = Grid::new(1, 2);
    let result = Algorithm::Bfs.solve(&grid, (0, 0), (0, 1)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{
    generate, AstarSolver, BfsSolver, Coord, DfsSolver, DijkstraSolver, GeneratorConfig, Grid,
    GridSolver, Preset, SearchSpace,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 32;
const SIZE: usize = 64;

/// Random reachable start and end pairs on the grid.
fn generate_scenarios(grid: &Grid, number: usize) -> Vec<(Coord, Coord)> {
    let mut scenarios = Vec::new();
    let mut rng = StdRng::seed_from_u64(0);
    let random_open = |rng: &mut StdRng| loop {
        let c = Coord::new(
            rng.gen_range(0..grid.rows() as i32),
            rng.gen_range(0..grid.cols() as i32),
        );
        if grid.can_move_to(&c) {
            return c;
        }
    };
    while scenarios.len() < number {
        let start = random_open(&mut rng);
        let end = random_open(&mut rng);
        if grid.reachable(&start, &end) {
            scenarios.push((start, end));
        }
    }
    scenarios
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver: S) {
    let config = GeneratorConfig::new(SIZE, SIZE).with_seed(0);
    for preset in [Preset::Empty, Preset::RandomObstacles, Preset::Maze, Preset::Weighted] {
        let grid = generate(preset, &config);
        let scenarios = generate_scenarios(&grid, N_SCENARIOS);
        c.bench_function(
            format!("{preset} {SIZE}x{SIZE}, {}", solver.name()).as_str(),
            |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(solver.search(&grid, *start, *end));
                    }
                })
            },
        );
    }
}

fn bench_bfs(c: &mut Criterion) {
    bench_solver(c, BfsSolver);
}

fn bench_dfs(c: &mut Criterion) {
    bench_solver(c, DfsSolver);
}

fn bench_dijkstra(c: &mut Criterion) {
    bench_solver(c, DijkstraSolver);
}

fn bench_astar(c: &mut Criterion) {
    bench_solver(c, AstarSolver::new());
}

criterion_group!(benches, bench_bfs, bench_dfs, bench_dijkstra, bench_astar);
criterion_main!(benches);

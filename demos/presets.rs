use grid_search::{compare, generate, render, Algorithm, GeneratorConfig, Preset};

// Generates every preset with a fixed seed and solves it with A*.
fn main() {
    let config = GeneratorConfig::fixed();
    let (start, end) = (config.default_start(), config.default_end());
    for preset in Preset::ALL {
        let mut grid = generate(preset, &config);
        grid.open(start).unwrap();
        grid.open(end).unwrap();
        grid.update();
        let comparison = compare(&grid, start, end, &Algorithm::ALL).unwrap();
        println!("{}:", preset);
        for outcome in &comparison.outcomes {
            println!(
                "  {:<8} path {:>3}  visited {:>4}",
                outcome.algorithm,
                outcome.path_len(),
                outcome.visited_len()
            );
        }
        if let Some(astar) = comparison.get(Algorithm::Astar) {
            println!("{}\n", render(&grid, &start, &end, &astar.result));
        }
    }
}

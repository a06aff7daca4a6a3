use grid_search::{compare, parse_map, render, Algorithm};

// Runs every algorithm on the same map and prints what each one explored.
// * marks the path, v the visited cells
fn main() {
    let map = parse_map(
        "
S...#.......
.##.#.####..
..#...#..#..
#.####.#.#.#
.......#...E
",
    )
    .unwrap();
    let (start, end) = (map.start.unwrap(), map.end.unwrap());
    let comparison = compare(&map.grid, start, end, &Algorithm::ALL).unwrap();
    for outcome in &comparison.outcomes {
        println!(
            "{}: path length {}, cost {:?}, visited {}",
            outcome.algorithm,
            outcome.path_len(),
            outcome.path_cost,
            outcome.visited_len()
        );
        println!("{}\n", render(&map.grid, &start, &end, &outcome.result));
    }
    match comparison.check() {
        Ok(()) => println!("All algorithms agree"),
        Err(e) => println!("{}", e),
    }
}

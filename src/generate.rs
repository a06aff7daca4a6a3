//! Grid generation presets. Generators only produce a [Grid]; the search engine itself uses no
//! randomness. A seeded [GeneratorConfig] always produces the same grid.
use core::fmt;
use std::str::FromStr;

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cell::Terrain;
use crate::coord::{Coord, Direction};
use crate::error::{Error, Result};
use crate::Grid;

/// Seed of [GeneratorConfig::fixed], the conventional seed for reproducible grids.
pub const DEFAULT_FIXED_SEED: u64 = 42;
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Preset {
    /// Every cell open with cost 1.
    Empty,
    /// Each cell independently blocked with probability `obstacle_density`.
    RandomObstacles,
    /// Corridors carved by recursive backtracking from (0, 0).
    Maze,
    /// Sparse obstacles plus random costs in `2..=max_weighted_cost`.
    Weighted,
    /// A fixed wall layout with delays rising along the diagonals, none on the default start and
    /// end. Ignores the seed.
    Fixed,
    /// Deterministic bands of sand, water and road. Ignores the seed.
    Terrain,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Empty,
        Preset::RandomObstacles,
        Preset::Maze,
        Preset::Weighted,
        Preset::Fixed,
        Preset::Terrain,
    ];
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Preset::Empty => "Empty Grid",
            Preset::RandomObstacles => "Random Obstacles",
            Preset::Maze => "Maze Grid",
            Preset::Weighted => "Weighted Grid",
            Preset::Fixed => "Fixed Grid",
            Preset::Terrain => "Terrain Grid",
        })
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Accepts the display names as well as their first word, case-insensitively.
    fn from_str(s: &str) -> Result<Preset> {
        let lower = s.trim().to_ascii_lowercase();
        let key = lower.strip_suffix(" grid").unwrap_or(&lower);
        match key {
            "empty" => Ok(Preset::Empty),
            "random" | "random obstacles" => Ok(Preset::RandomObstacles),
            "maze" => Ok(Preset::Maze),
            "weighted" => Ok(Preset::Weighted),
            "fixed" => Ok(Preset::Fixed),
            "terrain" => Ok(Preset::Terrain),
            _ => Err(Error::UnknownPreset(s.to_owned())),
        }
    }
}

/// Parameters shared by all presets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// `None` draws a fresh seed from the operating system.
    pub seed: Option<u64>,
    pub obstacle_density: f64,
    pub weighted_obstacle_density: f64,
    pub weighted_cost_chance: f64,
    pub max_weighted_cost: u32,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            obstacle_density: 0.3,
            weighted_obstacle_density: 0.15,
            weighted_cost_chance: 0.3,
            max_weighted_cost: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn new(rows: usize, cols: usize) -> GeneratorConfig {
        GeneratorConfig {
            rows,
            cols,
            ..GeneratorConfig::default()
        }
    }

    /// Default parameters with [DEFAULT_FIXED_SEED], so every call generates the same grids.
    pub fn fixed() -> GeneratorConfig {
        GeneratorConfig::default().with_seed(DEFAULT_FIXED_SEED)
    }

    pub fn with_seed(mut self, seed: u64) -> GeneratorConfig {
        self.seed = Some(seed);
        self
    }

    /// Conventional start cell, one step in from the top-left corner.
    pub fn default_start(&self) -> Coord {
        Coord::new(1, 1)
    }

    /// Conventional end cell, one step in from the bottom-right corner.
    pub fn default_end(&self) -> Coord {
        Coord::new(self.rows as i32 - 2, self.cols as i32 - 2)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Builds a grid for the given preset. Start and end cells are not treated specially; callers
/// open them with [Grid::open] before searching.
pub fn generate(preset: Preset, config: &GeneratorConfig) -> Grid {
    info!(
        "Generating {} of {}x{} (seed {:?})",
        preset, config.rows, config.cols, config.seed
    );
    let mut rng = config.rng();
    let mut grid = match preset {
        Preset::Empty => Grid::new(config.rows, config.cols),
        Preset::RandomObstacles => random_obstacles(config, &mut rng),
        Preset::Maze => maze(config, &mut rng),
        Preset::Weighted => weighted(config, &mut rng),
        Preset::Fixed => fixed(config),
        Preset::Terrain => terrain(config),
    };
    grid.generate_components();
    grid
}

fn coords(config: &GeneratorConfig) -> impl Iterator<Item = Coord> {
    let cols = config.cols;
    (0..config.rows).flat_map(move |row| (0..cols).map(move |col| Coord::from((row, col))))
}

fn random_obstacles(config: &GeneratorConfig, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(config.rows, config.cols);
    let density = config.obstacle_density.clamp(0.0, 1.0);
    for coord in coords(config) {
        if rng.gen_bool(density) {
            if let Some(cell) = grid.get_mut(&coord) {
                cell.is_obstacle = true;
            }
        }
    }
    grid
}

fn weighted(config: &GeneratorConfig, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(config.rows, config.cols);
    let obstacle_density = config.weighted_obstacle_density.clamp(0.0, 1.0);
    let cost_chance = config.weighted_cost_chance.clamp(0.0, 1.0);
    let max_cost = config.max_weighted_cost.max(2);
    for coord in coords(config) {
        let Some(cell) = grid.get_mut(&coord) else {
            continue;
        };
        if rng.gen_bool(obstacle_density) {
            cell.is_obstacle = true;
        } else if rng.gen_bool(cost_chance) {
            cell.cost = rng.gen_range(2..=max_cost);
        }
    }
    grid
}

/// Recursive backtracking with an explicit stack: from each cell, try the four directions in a
/// shuffled order and carve through to any still-blocked cell two steps away.
fn maze(config: &GeneratorConfig, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::filled(config.rows, config.cols, true);
    let origin = Coord::new(0, 0);
    let Some(cell) = grid.get_mut(&origin) else {
        return grid;
    };
    cell.is_obstacle = false;

    fn shuffled(rng: &mut StdRng) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs
    }
    let mut stack = vec![(origin, shuffled(rng), 0usize)];
    while let Some((coord, dirs, next)) = stack.last_mut() {
        let Some(&dir) = dirs.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;
        let wall = *coord + dir;
        let target = wall + dir;
        if grid.get_mut(&target).is_some_and(|c| c.is_obstacle) {
            for carved in [wall, target] {
                if let Some(cell) = grid.get_mut(&carved) {
                    cell.is_obstacle = false;
                }
            }
            stack.push((target, shuffled(rng), 0));
        }
    }
    grid
}

/// Walls of the reference 40x40 layout, clipped to the configured size, with delay
/// `(row + col) % 8` on every cell except the default start and end.
fn fixed(config: &GeneratorConfig) -> Grid {
    let mut grid = Grid::new(config.rows, config.cols);
    let vertical = [(5..30, 5), (0..25, 10), (10..35, 20)];
    let horizontal = [(3..30, 8), (12..35, 15), (5..20, 25)];
    let boxes = [(30..35, 30..35), (18..22, 2..7)];

    let mut walls: Vec<Coord> = Vec::new();
    for (rows, col) in vertical {
        walls.extend(rows.map(|row| Coord::new(row, col)));
    }
    for (cols, row) in horizontal {
        walls.extend(cols.map(|col| Coord::new(row, col)));
    }
    for (rows, cols) in boxes {
        for row in rows {
            walls.extend(cols.clone().map(|col| Coord::new(row, col)));
        }
    }
    walls.extend((8..20).map(|i| Coord::new(i, i)));
    walls.extend((22..35).map(|i| Coord::new(i, 39 - i)));

    for wall in walls {
        if let Some(cell) = grid.get_mut(&wall) {
            cell.is_obstacle = true;
        }
    }
    let endpoints = [config.default_start(), config.default_end()];
    for coord in coords(config).filter(|c| !endpoints.contains(c)) {
        if let Some(cell) = grid.get_mut(&coord) {
            cell.delay = ((coord.row + coord.col) % 8) as u32;
        }
    }
    grid
}

/// Stippled sand, a two-column river at a third of the width crossed by a bridge every sixth
/// row, and a road along the middle row.
fn terrain(config: &GeneratorConfig) -> Grid {
    let mut grid = Grid::new(config.rows, config.cols);
    let river = (config.cols / 3) as i32;
    let road = (config.rows / 2) as i32;
    for coord in coords(config) {
        let in_river = coord.col == river || coord.col == river + 1;
        let kind = if coord.row == road || (in_river && coord.row % 6 == 0) {
            Terrain::Road
        } else if in_river {
            Terrain::Water
        } else if (coord.row * 7 + coord.col * 3) % 10 < 2 {
            Terrain::Sand
        } else {
            Terrain::Normal
        };
        if let Some(cell) = grid.get_mut(&coord) {
            cell.terrain = kind;
            cell.cost = kind.cost();
        }
    }
    grid
}

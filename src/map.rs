//! Text maps: parsing grids from ASCII art and drawing search results over them.
//!
//! | glyph | meaning |
//! |---|---|
//! | `.` | open cell, cost 1 |
//! | `#` `@` `T` `O` `W` | obstacle |
//! | `1`-`9` | open cell with that cost |
//! | `=` `:` `~` | road, sand, water terrain |
//! | `S` | start (open) |
//! | `E` `G` | end (open) |
use std::str::FromStr;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::cell::{Cell, Terrain};
use crate::error::{Error, Result};
use crate::solver::SearchResult;
use crate::{Coord, Grid, SearchSpace};

/// A parsed map together with its optional start and end markers.
#[derive(Clone, Debug)]
pub struct ParsedMap {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

/// Character used for a cell when printing a grid without search overlay.
pub fn glyph(cell: &Cell) -> char {
    if cell.is_obstacle() {
        '#'
    } else if cell.delay() > 0 {
        'D'
    } else if cell.terrain() != Terrain::Normal {
        cell.terrain().glyph()
    } else {
        match cell.cost() {
            cost @ 2..=9 => char::from_digit(cost, 10).unwrap_or('+'),
            1 => '.',
            _ => '+',
        }
    }
}

enum Tile {
    Open,
    Blocked,
    Cost(u32),
    Terrain(Terrain),
    Start,
    End,
}

fn parse_tile(c: char) -> Option<Tile> {
    match c {
        '.' => Some(Tile::Open),
        '#' | '@' | 'T' | 'O' | 'W' => Some(Tile::Blocked),
        '1'..='9' => c.to_digit(10).map(Tile::Cost),
        '=' => Some(Tile::Terrain(Terrain::Road)),
        ':' => Some(Tile::Terrain(Terrain::Sand)),
        '~' => Some(Tile::Terrain(Terrain::Water)),
        'S' => Some(Tile::Start),
        'E' | 'G' => Some(Tile::End),
        _ => None,
    }
}

/// Parses a rectangular map. Blank lines and trailing whitespace are ignored.
pub fn parse_map(s: &str) -> Result<ParsedMap> {
    let lines: Vec<(usize, &str)> = s
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    let Some(&(_, first)) = lines.first() else {
        return Err(Error::Parse {
            line: 0,
            reason: "map is empty".to_owned(),
        });
    };
    let cols = first.chars().count();
    let mut map = ParsedMap {
        grid: Grid::new(lines.len(), cols),
        start: None,
        end: None,
    };
    for (row, &(line_no, line)) in lines.iter().enumerate() {
        let parse_error = |reason: String| Error::Parse {
            line: line_no,
            reason,
        };
        if line.chars().count() != cols {
            return Err(parse_error(format!(
                "expected {} columns, found {}",
                cols,
                line.chars().count()
            )));
        }
        for (col, c) in line.chars().enumerate() {
            let coord = Coord::from((row, col));
            let tile = parse_tile(c)
                .ok_or_else(|| parse_error(format!("unexpected '{}' at column {}", c, col + 1)))?;
            let marker = match tile {
                Tile::Start => &mut map.start,
                Tile::End => &mut map.end,
                _ => {
                    if let Some(cell) = map.grid.get_mut(&coord) {
                        match tile {
                            Tile::Blocked => cell.is_obstacle = true,
                            Tile::Cost(cost) => cell.cost = cost,
                            Tile::Terrain(terrain) => {
                                cell.terrain = terrain;
                                cell.cost = terrain.cost();
                            }
                            _ => {}
                        }
                    }
                    continue;
                }
            };
            if marker.replace(coord).is_some() {
                return Err(parse_error(format!("duplicate '{}' marker", c)));
            }
        }
    }
    map.grid.generate_components();
    Ok(map)
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid> {
        parse_map(s).map(|map| map.grid)
    }
}

/// Draws a search result over the grid: `S` and `E` for the endpoints, `*` for the path, `v` for
/// visited cells and [glyph] for everything else.
pub fn render(grid: &Grid, start: &Coord, end: &Coord, result: &SearchResult) -> String {
    let path: FxHashSet<Coord> = result.path().iter().copied().collect();
    let visited: FxHashSet<Coord> = result.visited.iter().copied().collect();
    let cells: Vec<&Cell> = grid.cells().collect();
    cells
        .chunks(grid.cols().max(1))
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let coord = cell.coord();
                    if coord == *start {
                        'S'
                    } else if coord == *end {
                        'E'
                    } else if path.contains(&coord) {
                        '*'
                    } else if visited.contains(&coord) {
                        'v'
                    } else {
                        glyph(cell)
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

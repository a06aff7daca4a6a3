use thiserror::Error;

use crate::coord::Coord;
use crate::solver::Algorithm;

/// Errors reported by the grid model and the search engine.
///
/// An unreachable goal is not an error: solvers report it as an absent path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{coord} is outside of the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("cell {0} cannot have a cost of zero")]
    ZeroCost(Coord),

    #[error("map parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown grid preset '{0}'")]
    UnknownPreset(String),

    #[error("{first} and {second} disagree: {detail}")]
    Disagreement {
        first: Algorithm,
        second: Algorithm,
        detail: String,
    },
}

/// Result type for grid and search operations
pub type Result<T> = std::result::Result<T, Error>;

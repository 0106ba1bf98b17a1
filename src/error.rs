use thiserror::Error;

use crate::core::Dims;

/// Rejected construction input. Surfaced before any grid is allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size {0:?}; both dimensions must be positive")]
    InvalidSize(Dims),
}

/// Solver failure. A generated maze spans every cell, so `NoPath` never
/// occurs in correct operation; it means the grid topology is broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("no open path from {from:?} to {to:?}; the maze is not a spanning tree")]
    NoPath { from: Dims, to: Dims },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

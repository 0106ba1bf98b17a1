//! Perfect maze generation and solving.
//!
//! A perfect maze has exactly one simple path between any two cells: the
//! generator carves a random spanning tree into a fully walled grid, and
//! the solver walks it deterministically from entrance to exit. Rendering
//! is an optional observer of both passes, never a participant.

pub mod core;
pub mod error;
pub mod maze;
pub mod renderer;

pub use crate::core::Dims;
pub use crate::error::{Error, GenerationError, SolveError};
pub use crate::maze::algorithms::{solve, DepthFirstSearch, Path, Random};
pub use crate::maze::{Cell, CellWall, Maze};
pub use crate::renderer::{NullRenderer, Renderer};

mod depth_first_search;
mod solver;

pub use depth_first_search::DepthFirstSearch;
pub use solver::{solve, Path};

/// Random number generator used wherever determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

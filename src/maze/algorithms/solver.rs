use hashbrown::HashSet;
use log::error;

use crate::core::Dims;
use crate::error::SolveError;
use crate::maze::cell::CellWall;
use crate::maze::maze::Maze;
use crate::renderer::Renderer;

/// Cell coordinates from the entrance to the exit, in walking order.
pub type Path = Vec<Dims>;

/// Finds the path from the entrance `(0,0)` to the exit at the far corner,
/// moving only through open passages.
///
/// Depth-first search with backtracking. Directions are tried in the fixed
/// order top, right, bottom, left, so the result is deterministic for a
/// given maze; no randomness is consumed. The stack of
/// `(cell, next direction)` frames is the working path itself, and the
/// renderer sees one forward move per advance and one undo move per retreat
/// from a dead end.
///
/// A generated maze spans every cell, so the search cannot fail on one; an
/// empty search means the wall flags are inconsistent and is surfaced as
/// [`SolveError::NoPath`].
pub fn solve(maze: &Maze, renderer: &mut dyn Renderer) -> Result<Path, SolveError> {
    let start = Dims::ZERO;
    let target = maze.size() - Dims(1, 1);

    let mut visited: HashSet<Dims> = HashSet::with_capacity(maze.cell_count());
    let mut stack: Vec<(Dims, usize)> = Vec::with_capacity(maze.cell_count());

    visited.insert(start);
    stack.push((start, 0));

    while let Some(&(current, cursor)) = stack.last() {
        if current == target {
            return Ok(stack.iter().map(|&(cell, _)| cell).collect());
        }

        let walls = CellWall::get_in_order();
        if cursor >= walls.len() {
            // dead end, retreat
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                renderer.on_move(current, parent, true);
            }
            continue;
        }
        stack.last_mut().unwrap().1 += 1;

        let wall = walls[cursor];
        let next = current + wall.to_coord();
        if maze.is_open(current, wall) && maze.is_in_bounds(next) && !visited.contains(&next) {
            visited.insert(next);
            renderer.on_move(current, next, false);
            stack.push((next, 0));
        }
    }

    error!(
        "exhausted every reachable cell without finding {:?} from {:?}",
        target, start
    );
    Err(SolveError::NoPath {
        from: start,
        to: target,
    })
}

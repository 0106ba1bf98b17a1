use hashbrown::HashSet;
use log::debug;
use rand::{seq::SliceRandom, thread_rng, Rng, SeedableRng};

use super::Random;
use crate::core::Dims;
use crate::error::GenerationError;
use crate::maze::cell::CellWall;
use crate::maze::maze::Maze;
use crate::renderer::Renderer;

/// Randomized depth-first maze carver.
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Carves a spanning tree into an all-walls-closed grid, then opens the
    /// entrance (top of `(0,0)`) and the exit (bottom of the far corner).
    ///
    /// A wall is only ever broken toward a cell that has not been visited,
    /// so the open-passage graph cannot form a cycle; when the stack drains,
    /// every cell has been reached and exactly `width * height - 1` internal
    /// walls are open. The same `size` and `seed` always produce the same
    /// layout. The explicit stack keeps memory bounded by the cell count
    /// even for grids that degenerate into one long corridor.
    pub fn generate(
        size: Dims,
        seed: Option<u64>,
        renderer: &mut dyn Renderer,
    ) -> Result<Maze, GenerationError> {
        let mut maze = Maze::new(size)?;

        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);
        debug!("carving {}x{} maze, seed {}", size.0, size.1, seed);

        let cell_count = maze.cell_count();

        let mut visited: HashSet<Dims> = HashSet::with_capacity(cell_count);
        let mut stack: Vec<Dims> = Vec::with_capacity(cell_count);

        visited.insert(Dims::ZERO);
        stack.push(Dims::ZERO);
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = maze
                .get_neighbors(current)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<Vec<_>>();

            if !unvisited_neighbors.is_empty() {
                stack.push(current);
                let chosen = *unvisited_neighbors.choose(&mut rng).unwrap();
                let chosen_wall = Maze::which_wall_between(current, chosen).unwrap();
                maze.remove_wall(current, chosen_wall);
                renderer.on_wall_change(current);
                renderer.on_wall_change(chosen);
                visited.insert(chosen);
                stack.push(chosen);
            }
        }

        let entrance = Dims::ZERO;
        let exit = size - Dims(1, 1);
        maze.remove_boundary_wall(entrance, CellWall::Top);
        renderer.on_wall_change(entrance);
        maze.remove_boundary_wall(exit, CellWall::Bottom);
        renderer.on_wall_change(exit);

        debug!("maze carved, {} cells", cell_count);
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::test_support::RecordingRenderer;
    use crate::renderer::NullRenderer;

    fn generate(size: Dims, seed: u64) -> Maze {
        DepthFirstSearch::generate(size, Some(seed), &mut NullRenderer).unwrap()
    }

    /// Counts open internal walls, each shared wall once.
    fn open_internal_walls(maze: &Maze) -> usize {
        Dims::iter_fill(Dims::ZERO, maze.size())
            .map(|cell| {
                let mut open = 0;
                if maze.is_valid_wall(cell, CellWall::Right)
                    && maze.is_open(cell, CellWall::Right)
                {
                    open += 1;
                }
                if maze.is_valid_wall(cell, CellWall::Bottom)
                    && maze.is_open(cell, CellWall::Bottom)
                {
                    open += 1;
                }
                open
            })
            .sum()
    }

    /// Flood-fills through open passages and returns the reached cell count.
    fn reachable_cells(maze: &Maze, start: Dims) -> usize {
        let mut seen = vec![start];
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for wall in CellWall::get_in_order() {
                let next = current + wall.to_coord();
                if maze.is_open(current, wall)
                    && maze.is_in_bounds(next)
                    && !seen.contains(&next)
                {
                    seen.push(next);
                    stack.push(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for size in [Dims(0, 5), Dims(5, 0), Dims(-3, 2), Dims(0, 0)] {
            let result = DepthFirstSearch::generate(size, Some(0), &mut NullRenderer);
            assert_eq!(result.unwrap_err(), GenerationError::InvalidSize(size));
        }
    }

    #[test]
    fn carves_a_spanning_tree() {
        for (size, seed) in [(Dims(4, 4), 1), (Dims(7, 3), 2), (Dims(12, 9), 3)] {
            let maze = generate(size, seed);
            let cells = size.product() as usize;
            // tree: connected with exactly cells - 1 edges
            assert_eq!(open_internal_walls(&maze), cells - 1);
            assert_eq!(reachable_cells(&maze, Dims::ZERO), cells);
        }
    }

    #[test]
    fn opens_entrance_and_exit_only() {
        let size = Dims(5, 4);
        let maze = generate(size, 7);
        let exit = size - Dims(1, 1);

        assert!(maze.is_open(Dims::ZERO, CellWall::Top));
        assert!(maze.is_open(exit, CellWall::Bottom));

        for cell in Dims::iter_fill(Dims::ZERO, size) {
            for wall in CellWall::get_in_order() {
                if maze.is_valid_wall(cell, wall) {
                    continue;
                }
                let is_entrance = cell == Dims::ZERO && wall == CellWall::Top;
                let is_exit = cell == exit && wall == CellWall::Bottom;
                assert_eq!(maze.is_open(cell, wall), is_entrance || is_exit);
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = generate(Dims(10, 10), 42);
        let b = generate(Dims(10, 10), 42);
        assert_eq!(a, b);

        let c = generate(Dims(10, 10), 43);
        assert_ne!(a, c);
    }

    #[test]
    fn single_cell_maze_is_entrance_and_exit() {
        let maze = generate(Dims(1, 1), 0);
        assert!(maze.is_open(Dims::ZERO, CellWall::Top));
        assert!(maze.is_open(Dims::ZERO, CellWall::Bottom));
        assert!(!maze.is_open(Dims::ZERO, CellWall::Left));
        assert!(!maze.is_open(Dims::ZERO, CellWall::Right));
    }

    #[test]
    fn one_column_maze_has_single_possible_layout() {
        // with one neighbor at every step the random source has no choice
        for seed in [0, 1, 99] {
            let maze = generate(Dims(1, 2), seed);
            assert!(maze.is_open(Dims(0, 0), CellWall::Top));
            assert!(maze.is_open(Dims(0, 0), CellWall::Bottom));
            assert!(maze.is_open(Dims(0, 1), CellWall::Top));
            assert!(maze.is_open(Dims(0, 1), CellWall::Bottom));
            assert!(!maze.is_open(Dims(0, 0), CellWall::Left));
            assert!(!maze.is_open(Dims(0, 0), CellWall::Right));
            assert!(!maze.is_open(Dims(0, 1), CellWall::Left));
            assert!(!maze.is_open(Dims(0, 1), CellWall::Right));
        }
    }

    #[test]
    fn notifies_renderer_per_changed_cell() {
        let size = Dims(3, 3);
        let mut renderer = RecordingRenderer::default();
        DepthFirstSearch::generate(size, Some(5), &mut renderer).unwrap();

        // both cells of each internal break, plus entrance and exit
        let internal = size.product() as usize - 1;
        assert_eq!(renderer.wall_changes.len(), 2 * internal + 2);
        assert!(renderer.moves.is_empty());
    }

    #[test]
    fn renderer_does_not_influence_the_layout() {
        let mut renderer = RecordingRenderer::default();
        let observed = DepthFirstSearch::generate(Dims(6, 5), Some(11), &mut renderer).unwrap();
        let silent = generate(Dims(6, 5), 11);
        assert_eq!(observed, silent);
    }
}

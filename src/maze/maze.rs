use std::fmt;

use crate::core::Dims;
use crate::error::GenerationError;
use crate::maze::cell::{Cell, CellWall};

/// Rectangular grid of cells, stored row-major.
///
/// Topology changes go through [`remove_wall`](Maze::remove_wall) and
/// [`remove_boundary_wall`](Maze::remove_boundary_wall); there is no way to
/// open only one side of a shared wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Creates a grid with every wall of every cell present. Fails on
    /// non-positive dimensions before any cell is allocated.
    pub fn new(size: Dims) -> Result<Maze, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }

        let (w, h) = (size.0 as usize, size.1 as usize);
        Ok(Maze {
            cells: vec![vec![Cell::new(); w]; h],
            width: w,
            height: h,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn is_valid_neighbor(&self, cell: Dims, off: Dims) -> bool {
        off.0.abs() + off.1.abs() == 1
            && self.is_in_bounds(cell)
            && self.is_in_bounds(cell + off)
    }

    /// Whether `wall` separates `cell` from an in-bounds neighbor.
    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_valid_neighbor(cell, wall.to_coord())
    }

    /// The wall of the first cell shared with the second, or `None` when
    /// the cells are not orthogonal neighbors.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// In-bounds orthogonal neighbors of `cell`, in wall priority order.
    pub fn get_neighbors(&self, cell: Dims) -> Vec<Dims> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| wall.to_coord())
            .filter(|off| self.is_valid_neighbor(cell, *off))
            .map(|off| cell + off)
            .collect()
    }

    /// Breaks the wall shared by `cell` and its neighbor on the `wall`
    /// side. Both flags are cleared, never only one. No-op when the wall is
    /// not an internal wall.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell.1 as usize][cell.0 as usize].remove_wall(wall);
        let neighbor = cell + wall.to_coord();
        self.cells[neighbor.1 as usize][neighbor.0 as usize].remove_wall(wall.reverse_wall());
    }

    /// Opens an outward-facing wall, such as the entrance or the exit.
    /// Unlike [`remove_wall`](Maze::remove_wall) there is no neighbor to
    /// mirror into; internal walls are refused.
    pub fn remove_boundary_wall(&mut self, cell: Dims, wall: CellWall) {
        if !self.is_in_bounds(cell) || self.is_valid_wall(cell, wall) {
            return;
        }

        self.cells[cell.1 as usize][cell.0 as usize].remove_wall(wall);
    }

    /// Whether `cell` has an open passage on the `wall` side. Out-of-bounds
    /// cells have no passages.
    pub fn is_open(&self, cell: Dims, wall: CellWall) -> bool {
        self.get_cell(cell).map_or(false, |c| !c.has_wall(wall))
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        if self.is_in_bounds(pos) {
            Some(&self.cells[pos.1 as usize][pos.0 as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for cell in &self.cells[y] {
                write!(
                    f,
                    "+{}",
                    if cell.has_wall(CellWall::Top) { "---" } else { "   " }
                )?;
            }
            writeln!(f, "+")?;
            for cell in &self.cells[y] {
                write!(
                    f,
                    "{}   ",
                    if cell.has_wall(CellWall::Left) { "|" } else { " " }
                )?;
            }
            let east = &self.cells[y][self.width - 1];
            writeln!(f, "{}", if east.has_wall(CellWall::Right) { "|" } else { " " })?;
        }
        for cell in &self.cells[self.height - 1] {
            write!(
                f,
                "+{}",
                if cell.has_wall(CellWall::Bottom) { "---" } else { "   " }
            )?;
        }
        write!(f, "+")
    }
}

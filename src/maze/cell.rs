use self::CellWall::*;
use crate::core::Dims;

/// One grid cell. Each side carries its own wall flag, `true` = wall
/// present; a fresh cell is walled in on all four sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    /// Walls in the fixed traversal priority order: top, right, bottom,
    /// left. The solver depends on this order for determinism.
    pub fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }
}

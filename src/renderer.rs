use crate::core::Dims;

/// Observer of maze state changes.
///
/// A renderer is notified after each mutation and must not feed anything
/// back: the generator and the solver produce the same maze and the same
/// path whether one is attached or not.
pub trait Renderer {
    /// The wall flags of `cell` changed. Breaking an internal wall reports
    /// both cells that share it; opening a boundary wall reports one.
    fn on_wall_change(&mut self, cell: Dims);

    /// The solver stepped between two adjacent cells. `undo` is true when
    /// the step retreats from a dead end.
    fn on_move(&mut self, from: Dims, to: Dims, undo: bool);
}

/// The "no renderer attached" configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_wall_change(&mut self, _cell: Dims) {}

    fn on_move(&mut self, _from: Dims, _to: Dims, _undo: bool) {}
}

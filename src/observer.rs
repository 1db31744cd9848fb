use crate::grids::Cell;

/// Hook for whatever wants to watch the maze being carved and walked,
/// typically a renderer animating each step. Notifications are synchronous
/// and nothing is read back from them, so attaching one (or not) never
/// changes what the algorithms do.
pub trait Observer {
    /// A cell's wall or visited state changed.
    fn on_cell_updated(&mut self, cell: &Cell);

    /// The solver crossed the edge between two cells. `undo` marks the
    /// retreat over an edge that led to a dead end.
    fn on_move(&mut self, from: &Cell, to: &Cell, undo: bool);
}

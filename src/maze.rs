use crate::generators::Backtracker;
use crate::grids::wall_grid::WallGrid;
use crate::grids::MazeError;
use crate::observer::Observer;
use crate::solvers;

/// A carved maze plus the placement metadata a renderer needs. The origin
/// and cell sizes are carried for `cell_rect` only and never feed into
/// carving or solving.
///
/// Generation runs once, here, at construction.
pub struct Maze {
    x1: f32,
    y1: f32,
    cell_size_x: f32,
    cell_size_y: f32,

    grid: WallGrid,
    observer: Option<Box<dyn Observer>>,
}

impl Maze {
    pub fn new(
        x1: f32,
        y1: f32,
        num_rows: usize,
        num_cols: usize,
        cell_size_x: f32,
        cell_size_y: f32,
        observer: Option<Box<dyn Observer>>,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let grid = WallGrid::with_dims(num_rows, num_cols)?;
        let mut maze = Self {
            x1,
            y1,
            cell_size_x,
            cell_size_y,
            grid,
            observer,
        };

        Backtracker::new(seed).carve(&mut maze.grid, maze.observer.as_deref_mut());

        Ok(maze)
    }

    pub fn solve(&mut self) -> bool {
        solvers::solve(&mut self.grid, self.observer.as_deref_mut())
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    /// Top-left and bottom-right corner of a cell on the host canvas.
    pub fn cell_rect(&self, i: usize, j: usize) -> Result<((f32, f32), (f32, f32)), MazeError> {
        self.grid.cell_at(i, j)?;

        let x1 = self.x1 + i as f32 * self.cell_size_x;
        let y1 = self.y1 + j as f32 * self.cell_size_y;

        Ok(((x1, y1), (x1 + self.cell_size_x, y1 + self.cell_size_y)))
    }
}

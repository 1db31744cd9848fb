mod generators;
mod grids;
mod maze;
mod observer;
mod solvers;

use grids::wall_grid::WallGrid;
use grids::Cell;
use maze::Maze;
use observer::Observer;

/// Streams every carve and walk step to the log, in place of an animated
/// window. Run with RUST_LOG=debug (or trace) to watch.
struct LogObserver;

impl Observer for LogObserver {
    fn on_cell_updated(&mut self, cell: &Cell) {
        log::trace!(
            "cell ({}, {}) walls: left {} right {} top {} bottom {}",
            cell.i,
            cell.j,
            cell.left,
            cell.right,
            cell.top,
            cell.bottom
        );
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, undo: bool) {
        let verb = if undo { "backtrack" } else { "move" };
        log::debug!(
            "{} ({}, {}) -> ({}, {})",
            verb,
            from.i,
            from.j,
            to.i,
            to.j
        );
    }
}

fn render_ascii(grid: &WallGrid) -> String {
    let mut out = String::new();

    for j in 0..grid.dims.rows {
        for i in 0..grid.dims.columns {
            out.push('+');
            out.push_str(if grid.cell(i, j).top { "---" } else { "   " });
        }
        out.push_str("+\n");

        for i in 0..grid.dims.columns {
            out.push(if grid.cell(i, j).left { '|' } else { ' ' });
            out.push_str("   ");
        }
        out.push_str(if grid.cell(grid.dims.columns - 1, j).right {
            "|\n"
        } else {
            " \n"
        });
    }

    for i in 0..grid.dims.columns {
        out.push('+');
        out.push_str(if grid.cell(i, grid.dims.rows - 1).bottom {
            "---"
        } else {
            "   "
        });
    }
    out.push('+');

    out
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let num_rows = 14;
    let num_cols = 20;
    let margin = 50.0;
    let screen_x = 800.0_f32;
    let screen_y = 600.0_f32;
    let cell_size_x = (screen_x - 2.0 * margin) / num_cols as f32;
    let cell_size_y = (screen_y - 2.0 * margin) / num_rows as f32;

    let mut maze = Maze::new(
        margin,
        margin,
        num_rows,
        num_cols,
        cell_size_x,
        cell_size_y,
        Some(Box::new(LogObserver)),
        Some(10),
    )?;

    println!("{}", render_ascii(maze.grid()));

    if maze.solve() {
        println!("Maze Solved");
    } else {
        println!("Maze cannot be solved!");
    }

    Ok(())
}

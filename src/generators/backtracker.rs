use rand::prelude::*;

use crate::grids::wall_grid::WallGrid;
use crate::observer::Observer;

/// Carves a perfect maze by randomized depth-first backtracking: walk to a
/// random unvisited neighbor, knocking the shared wall down, and retreat when
/// boxed in. Every cell gets visited exactly once, so the open passages form
/// a spanning tree and any two cells are joined by exactly one simple path.
pub struct Backtracker {
    rng: StdRng,
}

impl Backtracker {
    /// Seeding is by presence: `Some(seed)` makes the carve deterministic and
    /// `Some(0)` is a real seed, not "unseeded". The RNG lives in this value
    /// only, so parallel tests never trample each other's streams.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng }
    }

    /// Expects a freshly built grid: fully walled, nothing visited.
    pub fn carve(&mut self, grid: &mut WallGrid, mut observer: Option<&mut (dyn Observer + '_)>) {
        // entrance at the top-left, exit at the bottom-right
        grid.cell_mut(0, 0).top = false;
        if let Some(obs) = observer.as_deref_mut() {
            obs.on_cell_updated(grid.cell(0, 0));
        }

        let (exit_i, exit_j) = (grid.dims.columns - 1, grid.dims.rows - 1);
        grid.cell_mut(exit_i, exit_j).bottom = false;
        if let Some(obs) = observer.as_deref_mut() {
            obs.on_cell_updated(grid.cell(exit_i, exit_j));
        }

        // Depth-first walk from (0, 0). The explicit stack stands in for the
        // call stack of the textbook recursion and reproduces its traversal
        // order; depth can hit rows * columns, too deep for real recursion on
        // a default thread stack.
        let mut stack = vec![(0usize, 0usize)];
        grid.cell_mut(0, 0).visited = true;

        while let Some(&(i, j)) = stack.last() {
            let candidates = grid.unvisited_neighbors_of(i, j);
            if candidates.is_empty() {
                // boxed in, this cell's walls are final
                if let Some(obs) = observer.as_deref_mut() {
                    obs.on_cell_updated(grid.cell(i, j));
                }
                stack.pop();
                continue;
            }

            let (ni, nj) = candidates[self.rng.gen_range(0, candidates.len())];
            grid.clear_wall_between((i, j), (ni, nj));
            grid.cell_mut(ni, nj).visited = true;
            stack.push((ni, nj));
        }

        // the solver reuses the same flag
        grid.reset_visited();
    }
}

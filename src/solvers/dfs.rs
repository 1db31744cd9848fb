use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;
use crate::observer::Observer;

/// Directions are tried in this fixed order. It decides which of several
/// open paths gets walked first, never whether one is found.
const WALK_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

struct Frame {
    i: usize,
    j: usize,
    next: usize,
}

/// Depth-first search from the top-left cell to the bottom-right one over
/// whatever wall topology the grid currently holds. Walls are only read;
/// visited flags are reset and managed here, so calling this again on the
/// same grid starts clean.
///
/// Returns `false` when no path exists, which is a normal answer for an
/// arbitrary wall configuration, not an error.
///
/// The frame stack replays the classic recursion in the same order: descend
/// through the first open unvisited side, report the crossing, and on a dead
/// end report the same crossing as an undo before the parent tries its next
/// side.
pub fn solve(grid: &mut WallGrid, mut observer: Option<&mut (dyn Observer + '_)>) -> bool {
    grid.reset_visited();

    let goal = (grid.dims.columns - 1, grid.dims.rows - 1);

    grid.cell_mut(0, 0).visited = true;
    if let Some(obs) = observer.as_deref_mut() {
        obs.on_cell_updated(grid.cell(0, 0));
    }
    if goal == (0, 0) {
        return true;
    }

    let mut frames = vec![Frame { i: 0, j: 0, next: 0 }];

    while !frames.is_empty() {
        let top = frames.len() - 1;
        let (i, j) = (frames[top].i, frames[top].j);

        let mut descended = false;
        while frames[top].next < WALK_ORDER.len() {
            let direction = WALK_ORDER[frames[top].next];
            frames[top].next += 1;

            let (ni, nj) = match grid.open_neighbor_of(i, j, direction) {
                Some(next) if !grid.cell(next.0, next.1).visited => next,
                _ => continue,
            };

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_move(grid.cell(i, j), grid.cell(ni, nj), false);
            }
            grid.cell_mut(ni, nj).visited = true;
            if let Some(obs) = observer.as_deref_mut() {
                obs.on_cell_updated(grid.cell(ni, nj));
            }

            if (ni, nj) == goal {
                return true;
            }

            frames.push(Frame {
                i: ni,
                j: nj,
                next: 0,
            });
            descended = true;
            break;
        }

        if descended {
            continue;
        }

        // dead end: retreat and let the cell above try its next side
        frames.pop();
        if let Some(parent) = frames.last() {
            if let Some(obs) = observer.as_deref_mut() {
                obs.on_move(grid.cell(parent.i, parent.j), grid.cell(i, j), true);
            }
        }
    }

    false
}

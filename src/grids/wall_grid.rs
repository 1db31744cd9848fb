use crate::grids::{Cell, Dimensions, Direction, MazeError};

/// Candidate order when collecting carve targets. Only matters for
/// reproducibility under a fixed seed.
pub const CARVE_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// A fixed-size grid of walled cells, indexed by (column `i`, row `j`) with
/// row 0 at the top. Freshly built grids have every wall present and every
/// cell unvisited; the carver and the solver are the only mutators.
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for j in 0..rows {
            for i in 0..columns {
                cells.push(Cell::new(i, j));
            }
        }

        Ok(Self {
            dims: Dimensions { rows, columns },
            cells,
        })
    }

    #[inline]
    fn index_of(&self, i: usize, j: usize) -> usize {
        (self.dims.columns * j) + i
    }

    pub fn cell_at(&self, i: usize, j: usize) -> Result<&Cell, MazeError> {
        if i >= self.dims.columns || j >= self.dims.rows {
            return Err(MazeError::OutOfBounds { i, j });
        }
        Ok(&self.cells[self.index_of(i, j)])
    }

    /// Unchecked lookup for in-crate callers that only ever produce
    /// in-bounds coordinates.
    #[inline]
    pub(crate) fn cell(&self, i: usize, j: usize) -> &Cell {
        &self.cells[self.index_of(i, j)]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, i: usize, j: usize) -> &mut Cell {
        let index = self.index_of(i, j);
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn neighbor_coords_of(
        &self,
        i: usize,
        j: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        match direction {
            Direction::Up if j > 0 => Some((i, j - 1)),
            Direction::Down if j < self.dims.rows - 1 => Some((i, j + 1)),
            Direction::Left if i > 0 => Some((i - 1, j)),
            Direction::Right if i < self.dims.columns - 1 => Some((i + 1, j)),
            _ => None,
        }
    }

    /// Neighbor in `direction` when it exists and the wall on that side of
    /// (i, j) is down.
    pub fn open_neighbor_of(
        &self,
        i: usize,
        j: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        if self.cell(i, j).wall(direction) {
            return None;
        }
        self.neighbor_coords_of(i, j, direction)
    }

    /// In-bounds orthogonal neighbors not yet visited, in `CARVE_ORDER`.
    pub fn unvisited_neighbors_of(&self, i: usize, j: usize) -> Vec<(usize, usize)> {
        CARVE_ORDER
            .iter()
            .filter_map(|&direction| self.neighbor_coords_of(i, j, direction))
            .filter(|&(ni, nj)| !self.cell(ni, nj).visited)
            .collect()
    }

    /// Knocks down the wall between two adjacent cells, on both sides, so the
    /// pairwise symmetry of wall flags is never broken.
    pub fn clear_wall_between(&mut self, one: (usize, usize), two: (usize, usize)) {
        let direction = if two.0 == one.0 + 1 {
            Direction::Right
        } else if one.0 == two.0 + 1 {
            Direction::Left
        } else if two.1 == one.1 + 1 {
            Direction::Down
        } else {
            Direction::Up
        };

        self.cell_mut(one.0, one.1).set_wall(direction, false);
        self.cell_mut(two.0, two.1).set_wall(-direction, false);
    }

    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }
}

#[cfg(test)]
mod test_grid {
    use super::*;

    #[test]
    fn starts_fully_walled_and_unvisited() {
        let grid = WallGrid::with_dims(3, 4).unwrap();

        assert_eq!(grid.cells().len(), 12);
        for cell in grid.cells() {
            assert!(cell.left && cell.right && cell.top && cell.bottom);
            assert!(!cell.visited);
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            WallGrid::with_dims(0, 5).err(),
            Some(MazeError::InvalidDimension { rows: 0, columns: 5 })
        );
        assert_eq!(
            WallGrid::with_dims(5, 0).err(),
            Some(MazeError::InvalidDimension { rows: 5, columns: 0 })
        );
    }

    #[test]
    fn cell_at_bounds_checks() {
        let grid = WallGrid::with_dims(2, 3).unwrap();

        assert_eq!(grid.cell_at(2, 1).unwrap().i, 2);
        assert_eq!(
            grid.cell_at(3, 0).unwrap_err(),
            MazeError::OutOfBounds { i: 3, j: 0 }
        );
        assert_eq!(
            grid.cell_at(0, 2).unwrap_err(),
            MazeError::OutOfBounds { i: 0, j: 2 }
        );
    }

    #[test]
    fn walls_come_down_in_pairs() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        grid.clear_wall_between((0, 0), (1, 0));
        assert!(!grid.cell(0, 0).right);
        assert!(!grid.cell(1, 0).left);

        grid.clear_wall_between((1, 1), (1, 0));
        assert!(!grid.cell(1, 1).top);
        assert!(!grid.cell(1, 0).bottom);

        // untouched walls stay up
        assert!(grid.cell(0, 0).left && grid.cell(0, 0).top && grid.cell(0, 0).bottom);
    }

    #[test]
    fn neighbor_candidates_in_fixed_order() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();

        // up, down, left, right around the center
        assert_eq!(
            grid.unvisited_neighbors_of(1, 1),
            vec![(1, 0), (1, 2), (0, 1), (2, 1)]
        );
        // corner only has two candidates
        assert_eq!(grid.unvisited_neighbors_of(0, 0), vec![(0, 1), (1, 0)]);

        grid.cell_mut(1, 0).visited = true;
        grid.cell_mut(0, 1).visited = true;
        assert_eq!(grid.unvisited_neighbors_of(1, 1), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn open_neighbor_respects_walls_and_bounds() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();

        assert_eq!(grid.open_neighbor_of(0, 0, Direction::Right), None);
        grid.clear_wall_between((0, 0), (1, 0));
        assert_eq!(grid.open_neighbor_of(0, 0, Direction::Right), Some((1, 0)));
        assert_eq!(grid.open_neighbor_of(1, 0, Direction::Left), Some((0, 0)));

        // entrance breach opens a side with no neighbor behind it
        grid.cell_mut(0, 0).top = false;
        assert_eq!(grid.open_neighbor_of(0, 0, Direction::Up), None);
    }

    #[test]
    fn reset_visited_clears_every_cell() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.cell_mut(0, 0).visited = true;
        grid.cell_mut(1, 1).visited = true;

        grid.reset_visited();
        assert!(grid.cells().iter().all(|cell| !cell.visited));
    }
}

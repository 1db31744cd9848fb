pub mod wall_grid;

use std::fmt;

pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A single maze cell. Walls start out present on all four sides and get
/// knocked down pairwise during carving. `visited` is shared by the carver
/// and the solver, which run strictly one after the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub i: usize,
    pub j: usize,

    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,

    pub visited: bool,
}

impl Cell {
    pub fn new(i: usize, j: usize) -> Self {
        Self {
            i,
            j,
            left: true,
            right: true,
            top: true,
            bottom: true,
            visited: false,
        }
    }

    pub fn wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set_wall(&mut self, side: Direction, present: bool) {
        match side {
            Direction::Up => self.top = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one row and one column.
    InvalidDimension { rows: usize, columns: usize },
    /// Coordinate query outside the grid extent, a caller bug.
    OutOfBounds { i: usize, j: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { rows, columns } => {
                write!(
                    f,
                    "invalid grid dimensions: {} rows x {} columns",
                    rows, columns
                )
            }
            MazeError::OutOfBounds { i, j } => {
                write!(f, "cell ({}, {}) is outside the grid", i, j)
            }
        }
    }
}

impl std::error::Error for MazeError {}

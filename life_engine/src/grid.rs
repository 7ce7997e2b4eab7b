// grid.rs - Fixed-size cell buffer for Conway's Game of Life

use std::fmt;
use thiserror::Error;

/// Errors raised while allocating or writing a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },
    #[error("unable to allocate a {rows}x{cols} grid")]
    Allocation { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

/// Row-major boolean buffer. Dimensions are fixed at construction and the
/// grid never wraps coordinates itself; that is the topology's job.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates an all-dead grid.
    ///
    /// The whole buffer is reserved in one request, so a failure leaves
    /// nothing behind.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::Allocation { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::Allocation { rows, cols })?;
        cells.resize(len, false);

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Maps signed coordinates into the grid, or reports them as out of bounds.
    pub fn checked_coords(&self, row: i64, col: i64) -> Result<(usize, usize), GridError> {
        let r = usize::try_from(row).ok().filter(|&r| r < self.rows);
        let c = usize::try_from(col).ok().filter(|&c| c < self.cols);
        match (r, c) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_dead(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// `(row, col)` of every alive cell, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

/// One text line per row, `O` alive and `.` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.is_dead());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Grid::new(0, 5), Err(GridError::Empty { rows: 0, cols: 5 }));
        assert_eq!(Grid::new(5, 0), Err(GridError::Empty { rows: 5, cols: 0 }));
    }

    #[test]
    fn overflowing_size_is_an_allocation_error() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::Allocation {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn set_get_and_clear() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 2, true);
        grid.set(0, 0, true);
        assert!(grid.get(1, 2));
        assert!(!grid.get(1, 1));
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 2)]);

        grid.clear();
        assert!(grid.is_dead());
    }

    #[test]
    #[should_panic]
    fn get_does_not_wrap() {
        let grid = Grid::new(2, 3).unwrap();
        grid.get(0, 3);
    }

    #[test]
    fn checked_coords_rejects_outside_cells() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.checked_coords(1, 2), Ok((1, 2)));
        assert_eq!(
            grid.checked_coords(-1, 0),
            Err(GridError::OutOfBounds {
                row: -1,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert!(grid.checked_coords(0, 3).is_err());
        assert!(grid.checked_coords(2, 0).is_err());
    }

    #[test]
    fn display_draws_rows() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 1, true);
        grid.set(1, 2, true);
        assert_eq!(grid.to_string(), ".O.\n..O\n");
    }
}

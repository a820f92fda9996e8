//! Rectangular cell storage shared by the generator, the solver and the renderer.
//!
//! Coordinates are `(row, col)` pairs. Every lookup goes through a bounds predicate, so callers
//! filter out-of-range positions instead of handling errors.

use crate::cell::Cell;

/// A `(row, col)` position in the grid.
pub type Coord = (usize, usize);

/// Unit moves in the four axis directions: right, left, down and up.
///
/// The order is fixed so that a scripted chooser sees neighbours in a predictable sequence.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Row-major grid of [`Cell`]s.
///
/// This structure stores the cells of a maze in a single flat vector, one row after the other.
/// Its dimensions never change after construction; only the cells themselves are rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order, `width * height` of them.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `height × width` grid with every cell set to `cell`.
    ///
    /// This function expects `width * height` to fit in a `usize`; [`crate::Maze::new`] checks
    /// that before calling it.
    pub(crate) fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Builds a grid from rows that are already known to share one width.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `coord` lies inside the grid.
    ///
    /// This function is the single bounds check every lookup and neighbour step goes through.
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.height && coord.1 < self.width
    }

    /// Returns the cell at `coord`, or `None` when it is out of bounds.
    ///
    /// This function never panics, so callers can look past the border freely and treat
    /// `None` like a wall.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            self.cells.get(coord.0 * self.width + coord.1).copied()
        } else {
            None
        }
    }

    /// Overwrites the cell at `coord`.
    ///
    /// Out-of-bounds positions are ignored.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if self.contains(coord) {
            if let Some(slot) = self.cells.get_mut(coord.0 * self.width + coord.1) {
                *slot = cell;
            }
        }
    }

    /// Overwrites every cell with `cell`.
    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterates over the rows, top to bottom.
    ///
    /// Each item is a slice of exactly [`Grid::width`] cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` from panicking on a zero-width grid.
        self.cells.chunks(self.width.max(1))
    }

    /// Iterates over every cell together with its coordinate, in row-major order.
    ///
    /// This function is meant for whole-grid scans such as counting open cells or locating a
    /// marker; for single lookups use [`Grid::get`].
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let width = self.width.max(1);
            ((idx / width, idx % width), *cell)
        })
    }

    /// Counts the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&other| other == cell).count()
    }

    /// Moves `coord` by `delta` scaled by `distance`, returning the target if it is in bounds.
    ///
    /// This function uses checked arithmetic throughout, so stepping left of column zero or above
    /// row zero yields `None` instead of wrapping.
    pub(crate) fn offset(&self, coord: Coord, delta: (isize, isize), distance: isize) -> Option<Coord> {
        let row = coord.0.checked_add_signed(delta.0.checked_mul(distance)?)?;
        let col = coord.1.checked_add_signed(delta.1.checked_mul(distance)?)?;

        self.contains((row, col)).then_some((row, col))
    }

    /// In-bounds positions `distance` cells away from `coord` in each axis direction.
    ///
    /// Neighbours come out in [`DIRECTIONS`] order with out-of-bounds targets skipped. The
    /// generator calls this with a distance of two to hop between junctions and the solver with
    /// a distance of one.
    pub(crate) fn neighbours(&self, coord: Coord, distance: isize) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |delta| self.offset(coord, delta, distance))
    }
}

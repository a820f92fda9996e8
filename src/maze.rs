//! The maze engine: grid ownership, generation, solving and rendering.

use crate::{
    cell::Cell,
    chooser::{Chooser, RandomChooser},
    generator,
    grid::{Coord, Grid},
    solver::{self, Exploration},
};

/// Smallest side length a maze can have.
pub const MIN_DIMENSION: usize = 3;

/// Errors raised while building a maze.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A requested side length is zero.
    #[error("invalid {axis} {value}: must be at least 1")]
    InvalidDimension {
        /// Which side was rejected, `"width"` or `"height"`.
        axis: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The requested sides are valid on their own but their cell count overflows `usize`.
    #[error("a {width}x{height} grid has more cells than can be addressed")]
    Oversized {
        /// Normalised width.
        width: usize,
        /// Normalised height.
        height: usize,
    },
    /// Loaded text has an even number of rows or columns.
    ///
    /// Junctions sit on odd indices, so only odd sides leave a wall border around them.
    #[error("maze text {axis} {value} is even, expected an odd length")]
    EvenDimension {
        /// Which side was rejected, `"width"` or `"height"`.
        axis: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// Loaded text has fewer than three rows or columns.
    #[error("maze text must be at least {min}x{min}, found {width}x{height}", min = MIN_DIMENSION)]
    TooSmall {
        /// Width of the first row.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// A loaded row is not as wide as the first one.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// Loaded text contains a character that is not a maze glyph.
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        glyph: char,
    },
    /// Loaded text lacks a start or end marker.
    #[error("maze text has no {0:?} marker")]
    MissingMarker(Cell),
    /// Loaded text carries more than one start or end marker.
    #[error("maze text has more than one {0:?} marker")]
    DuplicateMarker(Cell),
}

/// A maze and the grid it exclusively owns.
///
/// Built all walls by [`Maze::new`], carved by [`Maze::generate`], then read by [`Maze::solve`]
/// and [`Maze::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cell storage.
    grid: Grid,
    /// Entry point.
    start: Coord,
    /// Exit point.
    end: Coord,
}

impl Maze {
    /// Builds an all-wall maze of at least `width × height` cells.
    ///
    /// Even sides are bumped to the next odd number so junctions and walls alternate, and sides
    /// below [`MIN_DIMENSION`] are raised to it. The start sits at `(1, 1)` and the end at
    /// `(height - 2, width - 2)`; in a 3×3 maze these coincide.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidDimension`] when a side is zero, and [`BuildError::Oversized`]
    /// when the cell count `width * height` does not fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, BuildError> {
        let width = normalise("width", width)?;
        let height = normalise("height", height)?;
        if width.checked_mul(height).is_none() {
            return Err(BuildError::Oversized { width, height });
        }

        Ok(Self {
            grid: Grid::filled(width, height, Cell::Wall),
            start: (1, 1),
            end: (height - 2, width - 2),
        })
    }

    /// Parses a maze from its rendered text form.
    ///
    /// Accepts the glyphs produced by [`Maze::render`], with solution marks read as open floor.
    /// The positions of the `S` and `E` glyphs become the start and the end. Trailing blank lines
    /// are ignored. The markers may sit anywhere for solving; [`Maze::generate`] moves them back
    /// to the corners of the junction lattice.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - The text is smaller than 3×3
    /// - The text has an even number of rows or columns
    /// - Rows differ in width
    /// - A character is not a maze glyph
    /// - There is not exactly one `S` and exactly one `E`
    pub fn from_text(text: &str) -> Result<Self, BuildError> {
        let lines: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.chars().count());

        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(BuildError::TooSmall { width, height });
        }
        if width % 2 == 0 {
            return Err(BuildError::EvenDimension {
                axis: "width",
                value: width,
            });
        }
        if height % 2 == 0 {
            return Err(BuildError::EvenDimension {
                axis: "height",
                value: height,
            });
        }

        let mut start = None;
        let mut end = None;
        let mut rows = Vec::with_capacity(height);

        for (row_idx, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BuildError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    found,
                });
            }

            let mut row = Vec::with_capacity(width);
            for (col_idx, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(BuildError::UnknownGlyph {
                    row: row_idx,
                    col: col_idx,
                    glyph,
                })?;

                let marker = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::End => Some(&mut end),
                    Cell::Wall | Cell::Path | Cell::SolutionMark => None,
                };
                if let Some(slot) = marker {
                    if slot.replace((row_idx, col_idx)).is_some() {
                        return Err(BuildError::DuplicateMarker(cell));
                    }
                }

                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self {
            grid: Grid::from_rows(width, rows),
            start: start.ok_or(BuildError::MissingMarker(Cell::Start))?,
            end: end.ok_or(BuildError::MissingMarker(Cell::End))?,
        })
    }

    /// Carves a fresh perfect maze, drawing every random decision from `chooser`.
    ///
    /// Any previous carving is discarded, and so are start and end positions loaded by
    /// [`Maze::from_text`]: carving always begins at `(1, 1)` and ends at
    /// `(height - 2, width - 2)`. The start marker is written before the end marker, so when both
    /// share a cell the cell reads [`Cell::End`].
    pub fn generate<C: Chooser + ?Sized>(&mut self, chooser: &mut C) {
        self.start = (1, 1);
        self.end = (self.height() - 2, self.width() - 2);

        generator::carve(&mut self.grid, self.start, chooser);

        self.grid.set(self.start, Cell::Start);
        self.grid.set(self.end, Cell::End);
    }

    /// Carves a fresh perfect maze from a seeded random source.
    ///
    /// The same seed always produces the same maze.
    pub fn generate_seeded(&mut self, seed: u64) {
        self.generate(&mut RandomChooser::seeded(seed));
    }

    /// Finds the shortest path from the start to the end.
    ///
    /// Returns `None` when no path exists, which includes a maze that was never generated.
    pub fn solve(&self) -> Option<Vec<Coord>> {
        solver::search(&self.grid, self.start, self.end, |_| {})
    }

    /// Runs the same search as [`Maze::solve`], also recording the order cells were visited in.
    pub fn explore(&self) -> Exploration {
        let mut visited = Vec::new();
        let path = solver::search(&self.grid, self.start, self.end, |coord| visited.push(coord));

        Exploration { visited, path }
    }

    /// Renders the maze as one string per row.
    ///
    /// When `path` is given, every coordinate on it except the start and the end is drawn as a
    /// solution mark. The overlay is applied to a copy, so the maze itself never changes.
    pub fn render(&self, path: Option<&[Coord]>) -> Vec<String> {
        let mut canvas = self.grid.clone();

        for &coord in path.unwrap_or_default() {
            if coord != self.start && coord != self.end {
                canvas.set(coord, Cell::SolutionMark);
            }
        }

        canvas
            .rows()
            .map(|row| row.iter().copied().map(Cell::glyph).collect())
            .collect()
    }

    /// The underlying grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Entry point as `(row, col)`.
    pub const fn start(&self) -> Coord {
        self.start
    }

    /// Exit point as `(row, col)`.
    pub const fn end(&self) -> Coord {
        self.end
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Validates one requested side length and turns it into the odd length actually used.
fn normalise(axis: &'static str, value: usize) -> Result<usize, BuildError> {
    let odd = match value {
        0 => None,
        even if even % 2 == 0 => even.checked_add(1),
        odd => Some(odd),
    };

    odd.map(|length| length.max(MIN_DIMENSION))
        .ok_or(BuildError::InvalidDimension { axis, value })
}

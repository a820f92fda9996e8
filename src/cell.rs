//! Cell kinds stored in the maze grid and their glyphs.

/// Glyph used for walls when rendering and parsing.
pub const WALL_GLYPH: char = '#';
/// Glyph used for open floor when rendering and parsing.
pub const PATH_GLYPH: char = ' ';
/// Glyph used for the start marker.
pub const START_GLYPH: char = 'S';
/// Glyph used for the end marker.
pub const END_GLYPH: char = 'E';
/// Glyph overlaid on solution coordinates.
pub const SOLUTION_GLYPH: char = 'o';

/// Contents of a single grid cell.
///
/// A freshly built grid holds nothing but [`Cell::Wall`]. Generation turns junctions and the
/// connectors between them into [`Cell::Path`], and finally stamps the [`Cell::Start`] and
/// [`Cell::End`] markers. [`Cell::SolutionMark`] only ever appears in the throwaway copy used for
/// rendering a solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell.
    #[default]
    Wall,
    /// Carved, walkable cell.
    Path,
    /// Entry point of the maze.
    Start,
    /// Exit point of the maze.
    End,
    /// Walkable cell lying on a rendered solution.
    SolutionMark,
}

impl Cell {
    /// Returns the glyph for this cell.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => WALL_GLYPH,
            Self::Path => PATH_GLYPH,
            Self::Start => START_GLYPH,
            Self::End => END_GLYPH,
            Self::SolutionMark => SOLUTION_GLYPH,
        }
    }

    /// Maps a glyph back to a cell.
    ///
    /// Solution marks read back as plain [`Cell::Path`], so a rendered solution can be loaded and
    /// solved again. Unknown glyphs yield `None`.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            WALL_GLYPH => Some(Self::Wall),
            PATH_GLYPH | SOLUTION_GLYPH => Some(Self::Path),
            START_GLYPH => Some(Self::Start),
            END_GLYPH => Some(Self::End),
            _ => None,
        }
    }

    /// Whether a walker may step onto this cell.
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

//! Command-line configuration and maze sourcing.

use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};

use crate::maze::Maze;

/// Perfect-maze generator and shortest-path solver.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Maze width in cells; even values are bumped to the next odd number
    #[arg(long, default_value_t = 31, conflicts_with = "input")]
    pub width: usize,

    /// Maze height in cells; even values are bumped to the next odd number
    #[arg(long, default_value_t = 19, conflicts_with = "input")]
    pub height: usize,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the maze from a text file instead of generating one
    #[arg(long, value_name = "FILE", conflicts_with = "seed")]
    pub input: Option<PathBuf>,

    /// Print the maze without solving it
    #[arg(long)]
    pub no_solve: bool,

    /// Also print the all-wall grid before generation
    #[arg(long, conflicts_with = "input")]
    pub show_blank: bool,

    /// Open the interactive viewer instead of printing
    #[arg(long)]
    pub tui: bool,
}

impl Config {
    /// Resolves where the maze comes from, drawing a random seed if none was given.
    pub fn source(&self) -> Source {
        self.input.clone().map_or_else(
            || Source::Seeded(self.seed.unwrap_or_else(rand::random)),
            Source::File,
        )
    }
}

/// Where a maze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Generated from this seed.
    Seeded(u64),
    /// Loaded from this file.
    File(PathBuf),
}

impl Source {
    /// Produces the maze, generating a `width × height` one or loading it from disk.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The dimensions are rejected by [`Maze::new`]
    /// - The file cannot be read
    /// - The file contents are rejected by [`Maze::from_text`]
    pub fn build(&self, width: usize, height: usize) -> Result<Maze> {
        match self {
            Self::Seeded(seed) => {
                let mut maze = Maze::new(width, height)?;
                maze.generate_seeded(*seed);
                Ok(maze)
            }
            Self::File(path) => {
                let contents = fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;
                Maze::from_text(&contents)
                    .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))
            }
        }
    }
}

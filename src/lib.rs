//! Perfect-maze generation and shortest-path solving.
//!
//! A [`Maze`] owns a grid of odd dimensions. [`Maze::generate`] carves a loop-free maze into it
//! with randomized recursive backtracking, [`Maze::solve`] finds the shortest route from the start
//! to the end with breadth-first search, and [`Maze::render`] turns the grid, optionally with a
//! solution overlaid, into lines of text.
//!
//! ```
//! use mazecarver::{chooser::RandomChooser, Maze};
//!
//! let mut maze = Maze::new(21, 11)?;
//! maze.generate(&mut RandomChooser::seeded(7));
//!
//! let path = maze.solve().expect("generated mazes are always solvable");
//! assert_eq!(path.first(), Some(&maze.start()));
//! assert_eq!(path.last(), Some(&maze.end()));
//!
//! for line in maze.render(Some(path.as_slice())) {
//!     println!("{line}");
//! }
//! # Ok::<(), mazecarver::BuildError>(())
//! ```
//!
//! The crate also ships the `mazecarver` binary: a printer for the command line and an
//! interactive terminal viewer animating the search, both driven by [`Config`].

mod animation;
mod app;
pub mod cell;
pub mod chooser;
pub mod config;
mod events;
mod generator;
pub mod grid;
pub mod maze;
mod report;
mod solver;
mod types;
mod ui;

pub use app::App;
pub use cell::Cell;
pub use config::{Config, Source};
pub use grid::{Coord, Grid};
pub use maze::{BuildError, Maze};
pub use report::print_report;
pub use solver::Exploration;

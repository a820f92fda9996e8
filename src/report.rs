//! Plain-text front-end printing the maze, its solution and the path length.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::{
    config::{Config, Source},
    maze::Maze,
};

/// Writes the full report for `config` to `out`.
///
/// The report lists, in order: the blank grid (only with `--show-blank` on a generated maze), the
/// maze itself, and unless `--no-solve` is set, the maze with its solution overlaid followed by the
/// path length in steps.
///
/// # Errors
///
/// This function may return errors from building the maze or from writing to `out`.
pub fn print_report<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let source = config.source();
    let maze = source.build(config.width, config.height)?;

    match &source {
        Source::Seeded(seed) => {
            if config.show_blank {
                let blank = Maze::new(maze.width(), maze.height())?;
                writeln!(out, "Initialized empty {}x{} maze:", maze.height(), maze.width())?;
                write_lines(out, &blank.render(None))?;
                writeln!(out)?;
            }
            writeln!(out, "Generated random maze (seed {seed}):")?;
        }
        Source::File(path) => {
            writeln!(
                out,
                "Loaded {}x{} maze from {}:",
                maze.height(),
                maze.width(),
                path.display()
            )?;
        }
    }
    write_lines(out, &maze.render(None))?;

    if config.no_solve {
        return Ok(());
    }

    writeln!(out)?;
    if let Some(path) = maze.solve() {
        writeln!(out, "Maze with solution path ('o'):")?;
        write_lines(out, &maze.render(Some(path.as_slice())))?;
        writeln!(out)?;
        writeln!(out, "Path length: {} steps", path.len().saturating_sub(1))?;
    } else {
        writeln!(out, "No solution path found.")?;
    }

    Ok(())
}

/// Writes each line followed by a newline.
fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }

    Ok(())
}

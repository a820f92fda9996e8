//! Randomized recursive-backtracking maze carving.
//!
//! The carver walks the junction lattice two cells at a time. Each step into an unvisited junction
//! also opens the single connector cell in between, so every junction is entered exactly once and
//! the open cells always form a spanning tree.

use crate::{
    cell::Cell,
    chooser::Chooser,
    grid::{Coord, Grid},
};

/// Distance between neighbouring junctions.
const JUNCTION_STRIDE: isize = 2;

/// Carves a perfect maze into `grid`, starting from `start`.
///
/// The grid is reset to walls first, so carving an already generated grid produces a fresh maze.
/// The backtracking is driven by an explicit stack: the top cell either still has an unvisited
/// junction around it, in which case one is chosen and carved into, or it is exhausted and gets
/// popped.
pub(crate) fn carve<C: Chooser + ?Sized>(grid: &mut Grid, start: Coord, chooser: &mut C) {
    grid.fill(Cell::Wall);

    if !grid.contains(start) {
        return;
    }

    grid.set(start, Cell::Path);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let unvisited: Vec<Coord> = grid
            .neighbours(current, JUNCTION_STRIDE)
            .filter(|&next| grid.get(next) == Some(Cell::Wall))
            .collect();

        if let Some(&next) = chooser.choose(&unvisited) {
            grid.set(next, Cell::Path);
            grid.set(midpoint(current, next), Cell::Path);
            stack.push(next);
        } else {
            let _ = stack.pop();
        }
    }
}

/// Cell halfway between two junctions sharing a row or a column.
const fn midpoint(from: Coord, to: Coord) -> Coord {
    ((from.0 + to.0) / 2, (from.1 + to.1) / 2)
}

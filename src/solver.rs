//! Breadth-first shortest-path search over the fine grid.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    cell::Cell,
    grid::{Coord, Grid},
};

/// Distance between cells the solver steps across.
const STEP: isize = 1;

/// Result of a traced search.
///
/// This structure is returned by [`crate::Maze::explore`]. It carries the same path
/// [`crate::Maze::solve`] would return, plus the order in which the search visited cells, which
/// the terminal viewer replays as an animation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exploration {
    /// Every cell taken off the queue, in the order it was dequeued. The end cell is the last
    /// entry when a path was found.
    pub visited: Vec<Coord>,
    /// Shortest path from start to end inclusive, or `None` when the end is unreachable.
    pub path: Option<Vec<Coord>>,
}

/// Finds the shortest path between `start` and `end`.
///
/// Cells are visited in non-decreasing distance from `start`, so the parent chain recorded when
/// `end` is first dequeued is a shortest path. Search stops right there instead of draining the
/// queue.
///
/// This function calls `on_visit` with each dequeued cell, `end` included. It returns `None`
/// without visiting anything when `start` is a wall or out of bounds, and after draining the
/// queue when `end` is unreachable.
pub(crate) fn search<F: FnMut(Coord)>(
    grid: &Grid,
    start: Coord,
    end: Coord,
    mut on_visit: F,
) -> Option<Vec<Coord>> {
    if !grid.get(start).is_some_and(Cell::is_open) {
        return None;
    }

    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::from([(start, None)]);

    while let Some(current) = queue.pop_front() {
        on_visit(current);

        if current == end {
            return Some(reconstruct(&parents, end));
        }

        for next in grid.neighbours(current, STEP) {
            if grid.get(next).is_some_and(Cell::is_open) && visited.insert(next) {
                let _ = parents.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    None
}

/// Walks the parent chain back from `end` and returns it in start-to-end order.
fn reconstruct(parents: &HashMap<Coord, Option<Coord>>, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = parents.get(&end).copied().flatten();

    while let Some(coord) = current {
        path.push(coord);
        current = parents.get(&coord).copied().flatten();
    }

    path.reverse();
    path
}

//! Solution animation and coordinate transformation module.
//!
//! This module replays a breadth-first search on screen: first the cells in the order the search
//! dequeued them, then the shortest path it settled on. It also maps maze coordinates onto the
//! canvas coordinate space used by the viewer.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::{grid::Coord, solver::Exploration};

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames. Each frame may process several
/// steps, see [`TARGET_FRAMES`].
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 30;

/// Number of frames a full animation should take regardless of the maze size.
pub(crate) const TARGET_FRAMES: usize = 120;

/// Time the finished animation stays on screen before it restarts.
pub(crate) const ANIMATION_HOLD_MS: u64 = 2000;

/// Animation step types for solution visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Show a cell the search dequeued.
    Explore(Coord),
    /// Show a cell lying on the shortest path.
    Trace(Coord),
}

/// Animation state manager for solution visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// coordinates being displayed during the animated maze solving.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Animation steps recorded from a traced search.
    pub(crate) steps: Vec<AnimationStep>,
    /// Index of the next step to process.
    pub(crate) current_index: usize,
    /// Number of steps processed per frame.
    pub(crate) stride: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Explored cells currently on screen.
    pub(crate) explored: Vec<Coord>,
    /// Path cells currently on screen.
    pub(crate) path: Vec<Coord>,
}

impl Default for AnimationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationManager {
    /// Creates a new animation manager with no steps.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            stride: 1,
            last_update_time: Instant::now(),
            explored: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Replaces the steps with those of `exploration` and rewinds.
    ///
    /// The explored cells come first, followed by the path from start to end. An unsolvable maze
    /// only animates its exploration.
    pub(crate) fn load(&mut self, exploration: &Exploration) {
        self.steps = exploration
            .visited
            .iter()
            .copied()
            .map(AnimationStep::Explore)
            .chain(
                exploration
                    .path
                    .iter()
                    .flatten()
                    .copied()
                    .map(AnimationStep::Trace),
            )
            .collect();
        self.stride = self.steps.len().div_ceil(TARGET_FRAMES).max(1);
        self.reset();
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.explored.clear();
        self.path.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Whether every step has been processed.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Processes the next [`stride`](AnimationManager::stride) steps.
    pub(crate) fn advance(&mut self) {
        for step in self.steps.iter().skip(self.current_index).take(self.stride) {
            match *step {
                AnimationStep::Explore(coord) => self.explored.push(coord),
                AnimationStep::Trace(coord) => self.path.push(coord),
            }
        }

        self.current_index = self
            .current_index
            .saturating_add(self.stride)
            .min(self.steps.len());
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// This method advances the animation when a frame's worth of time has passed. Once the last
    /// step is on screen it holds the final picture for a while and then starts over.
    pub(crate) fn update(&mut self) {
        let elapsed = self.last_update_time.elapsed();

        if self.is_finished() {
            if !self.steps.is_empty() && elapsed >= Duration::from_millis(ANIMATION_HOLD_MS) {
                self.reset();
            }
        } else if elapsed >= Duration::from_millis(ANIMATION_FRAME_DELAY_MS) {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze coordinates (row, col) to canvas coordinates (x, y) using the
/// standard transformation formulas: y = (rows - 1) / 2 - row, so the first row ends up on top,
/// and x = col - (cols - 1) / 2.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_maze_to_screen_coords(
    maze_coords: &[Coord],
    rows: usize,
    cols: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(cols)?);

    maze_coords
        .iter()
        .map(|&(row, col)| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an exploration with `visited` cells and a two-cell path.
    fn exploration(visited: usize) -> Exploration {
        Exploration {
            visited: (0..visited).map(|col| (1, col)).collect(),
            path: Some(vec![(1, 0), (1, 1)]),
        }
    }

    #[test]
    fn test_load_orders_steps() {
        let mut manager = AnimationManager::new();
        manager.load(&exploration(3));

        assert_eq!(
            manager.steps,
            vec![
                AnimationStep::Explore((1, 0)),
                AnimationStep::Explore((1, 1)),
                AnimationStep::Explore((1, 2)),
                AnimationStep::Trace((1, 0)),
                AnimationStep::Trace((1, 1)),
            ]
        );
        assert_eq!(manager.stride, 1);
        assert_eq!(manager.current_index, 0);
    }

    #[test]
    fn test_load_without_path() {
        let mut manager = AnimationManager::new();
        manager.load(&Exploration {
            visited: vec![(1, 1)],
            path: None,
        });

        assert_eq!(manager.steps, vec![AnimationStep::Explore((1, 1))]);
    }

    #[test]
    fn test_stride_scales_with_steps() {
        let mut manager = AnimationManager::new();
        manager.load(&exploration(TARGET_FRAMES * 3));

        assert_eq!(manager.stride, 4);
    }

    #[test]
    fn test_advance_fills_explored_then_path() {
        let mut manager = AnimationManager::new();
        manager.load(&exploration(2));

        manager.advance();
        manager.advance();
        assert_eq!(manager.explored, vec![(1, 0), (1, 1)]);
        assert!(manager.path.is_empty());

        manager.advance();
        manager.advance();
        assert_eq!(manager.path, vec![(1, 0), (1, 1)]);
        assert!(manager.is_finished());

        manager.advance();
        assert_eq!(manager.current_index, manager.steps.len());
    }

    #[test]
    fn test_reset_and_clear() {
        let mut manager = AnimationManager::new();
        manager.load(&exploration(2));
        manager.advance();

        manager.reset();
        assert_eq!(manager.current_index, 0);
        assert!(manager.explored.is_empty());
        assert!(!manager.steps.is_empty());

        manager.clear();
        assert!(manager.steps.is_empty());
        assert!(manager.is_finished());
    }

    #[test]
    fn test_update_waits_for_frame_delay() {
        let mut manager = AnimationManager::new();
        manager.load(&exploration(2));

        manager.last_update_time = Instant::now();
        manager.update();
        assert_eq!(manager.current_index, 0);

        manager.last_update_time = Instant::now()
            .checked_sub(Duration::from_millis(ANIMATION_FRAME_DELAY_MS * 2))
            .expect("clock should allow going back a few milliseconds");
        manager.update();
        assert_eq!(manager.current_index, 1);
    }

    #[test]
    fn test_transform_coords() {
        let coords = transform_maze_to_screen_coords(&[(0, 0), (2, 4)], 3, 5)
            .expect("small coordinates should convert");

        assert_eq!(coords, vec![(-2., 1.), (2., -1.)]);
    }

    #[test]
    fn test_transform_coords_out_of_range() {
        assert!(transform_maze_to_screen_coords(&[(70_000, 0)], 3, 5).is_err());
    }
}

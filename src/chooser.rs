//! Sources of uniform choice used by maze generation.
//!
//! Generation only ever needs to pick one element out of a short list of candidate neighbours.
//! Abstracting that single operation lets tests replace randomness with a fixed script.

use rand::{rngs::StdRng, seq::SliceRandom as _, Rng, SeedableRng as _};

/// Picks one element from a slice.
///
/// This trait is the only source of nondeterminism in maze generation. Any implementation yields
/// a valid perfect maze; only which maze comes out depends on it.
pub trait Chooser {
    /// Chooses one element of `items`, or returns `None` when `items` is empty.
    ///
    /// This function is called once per backtracking step with the unvisited neighbouring
    /// junctions, in the fixed right, left, down, up order.
    fn choose<'items, T>(&mut self, items: &'items [T]) -> Option<&'items T>;
}

/// Uniform random choice backed by any [`Rng`].
///
/// This structure is what real generation uses. Wrap a thread-local generator for fresh mazes
/// every run, or use [`RandomChooser::seeded`] to get the same maze back for the same seed.
#[derive(Clone, Debug)]
pub struct RandomChooser<R> {
    /// Underlying random number generator.
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    /// Wraps an existing random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChooser<StdRng> {
    /// Builds a reproducible chooser from a seed.
    ///
    /// This function seeds a [`StdRng`], so the sequence of choices, and therefore the maze, is
    /// stable for a given seed and `rand` release.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose<'items, T>(&mut self, items: &'items [T]) -> Option<&'items T> {
        items.choose(&mut self.rng)
    }
}

/// Deterministic chooser replaying a fixed sequence of indices.
///
/// Each call consumes the next scripted index, wrapping around when the script runs out, and
/// reduces it modulo the number of candidates. An empty script always picks the first element.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    /// Indices to replay.
    script: Vec<usize>,
    /// Position of the next index in the script.
    cursor: usize,
}

impl ScriptedChooser {
    /// Builds a chooser replaying `script`.
    pub const fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Builds a chooser that always picks the first candidate.
    pub const fn first() -> Self {
        Self::new(Vec::new())
    }
}

impl Chooser for ScriptedChooser {
    fn choose<'items, T>(&mut self, items: &'items [T]) -> Option<&'items T> {
        if items.is_empty() {
            return None;
        }

        let index = if self.script.is_empty() {
            0
        } else {
            let scripted = self
                .script
                .get(self.cursor % self.script.len())
                .copied()
                .unwrap_or_default();
            self.cursor = self.cursor.wrapping_add(1);
            scripted % items.len()
        };

        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_chooser_replays_script() {
        let mut chooser = ScriptedChooser::new(vec![2, 0, 1]);
        let items = ['a', 'b', 'c'];

        assert_eq!(chooser.choose(&items), Some(&'c'));
        assert_eq!(chooser.choose(&items), Some(&'a'));
        assert_eq!(chooser.choose(&items), Some(&'b'));
        assert_eq!(chooser.choose(&items), Some(&'c'));
    }

    #[test]
    fn test_scripted_chooser_wraps_index() {
        let mut chooser = ScriptedChooser::new(vec![5]);

        assert_eq!(chooser.choose(&[10, 20]), Some(&20));
        assert_eq!(chooser.choose(&[10, 20, 30]), Some(&30));
    }

    #[test]
    fn test_first_chooser() {
        let mut chooser = ScriptedChooser::first();

        assert_eq!(chooser.choose(&[7, 8, 9]), Some(&7));
        assert_eq!(chooser.choose(&[8, 9]), Some(&8));
    }

    #[test]
    fn test_empty_items() {
        let empty: [u8; 0] = [];

        assert_eq!(ScriptedChooser::new(vec![1]).choose(&empty), None);
        assert_eq!(RandomChooser::seeded(1).choose(&empty), None);
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let items: Vec<u32> = (0..100).collect();
        let mut first = RandomChooser::seeded(42);
        let mut second = RandomChooser::seeded(42);

        let left: Vec<u32> = (0..20)
            .filter_map(|_| first.choose(&items).copied())
            .collect();
        let right: Vec<u32> = (0..20)
            .filter_map(|_| second.choose(&items).copied())
            .collect();

        assert_eq!(left, right);
    }

    #[test]
    fn test_random_chooser_stays_in_slice() {
        let items = [1, 2, 3];
        let mut chooser = RandomChooser::seeded(7);

        for _ in 0..50 {
            let choice = chooser.choose(&items).expect("non-empty slice must yield a choice");
            assert!(items.contains(choice), "choice must come from the slice");
        }
    }
}

//! Randomization of answer and question order
//!
//! The randomness source is injected so callers can seed it: the binary
//! uses a process-seeded `StdRng` (or `--seed` for reproducible runs),
//! tests a fixed seed. Nothing here promises a particular permutation.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::document::models::Block;

/// Shuffle answers within each block, then the block order itself.
///
/// The two permutations are independent, and answer order is independent
/// across blocks.
pub fn shuffle_blocks<R: Rng + ?Sized>(blocks: &mut [Block], rng: &mut R) {
    for block in blocks.iter_mut() {
        block.answers.shuffle(rng);
    }
    blocks.shuffle(rng);
}

//! Draw engine: uniform single draws and full-pool shuffles.

use crate::models::RouletteError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw one uniformly random index in [0, n). Non-consuming; may be invoked
/// repeatedly against the same pool.
pub fn draw_single_index<R: Rng>(rng: &mut R, n: usize) -> Result<usize, RouletteError> {
    if n == 0 {
        return Err(RouletteError::EmptyPool);
    }
    Ok(rng.gen_range(0..n))
}

/// Uniformly random permutation of `items` (Fisher-Yates).
pub fn shuffled<R: Rng>(rng: &mut R, mut items: Vec<String>) -> Vec<String> {
    items.shuffle(rng);
    items
}

//! Dataset generation.
//!
//! Values start at 1 because a zero-height bar is invisible to the rendering
//! contract; the engine itself places no other constraint on the values.

use rand::Rng;

/// Generate `amount` data points: the integers `1..=amount`, jumbled.
///
/// Randomization is `amount` uniform index-pair swaps. That is "sufficiently
/// jumbled" for a visualizer, not a rigorous shuffle; no uniformity is
/// guaranteed or needed.
pub fn generate(amount: usize) -> Vec<u32> {
    generate_with(&mut rand::thread_rng(), amount)
}

/// Same as [`generate`], driving an explicit RNG (seeded runs, tests).
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, amount: usize) -> Vec<u32> {
    let mut data: Vec<u32> = (1..=amount as u32).collect();
    for _ in 0..data.len() {
        let a = rng.gen_range(0..data.len());
        let b = rng.gen_range(0..data.len());
        data.swap(a, b);
    }
    data
}

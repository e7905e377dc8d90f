//! Family tree generation: person factory, child planning, and the
//! breadth-first engine that ties them together.

pub mod children;
pub mod engine;
pub mod factory;

pub use engine::GenerationEngine;
pub use factory::{CoParent, PersonFactory, PlaceholderParent};

use rand::Rng;

/// Uniform draw in `[-spread, spread]`. A non-positive spread draws nothing.
pub(crate) fn perturbation(rng: &mut impl Rng, spread: f64) -> f64 {
    if spread > 0.0 {
        rng.gen_range(-spread..=spread)
    } else {
        0.0
    }
}

/// Uniform integer in `[-spread, spread]`. A non-positive spread draws nothing.
pub(crate) fn year_offset(rng: &mut impl Rng, spread: i32) -> i32 {
    if spread > 0 {
        rng.gen_range(-spread..=spread)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_perturbation_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = perturbation(&mut rng, 1.5);
            assert!((-1.5..=1.5).contains(&v));
            let y = year_offset(&mut rng, 10);
            assert!((-10..=10).contains(&y));
        }
    }

    #[test]
    fn test_zero_spread_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(perturbation(&mut rng, 0.0), 0.0);
        assert_eq!(perturbation(&mut rng, -2.0), 0.0);
        assert_eq!(year_offset(&mut rng, 0), 0);
    }
}

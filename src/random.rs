//! Random number generator construction.
//!
//! Operators never own an RNG: the caller passes one per invocation so that
//! concurrent invocations on different individuals share no mutable state.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use spl_moea::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

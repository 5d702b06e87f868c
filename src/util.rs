use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runs `f` and returns its result together with the wall-clock time it took.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

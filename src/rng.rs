//! Process wide seed for the default random source.
//!
//! Everything that needs randomness takes an explicit `&mut R where R: Rng`, this module only
//! provides the generator used when the caller doesn't bring one.

use std::env;

use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Set this to a `u64` to reproduce a previous run.
pub const SEED_ENV_VAR: &str = "OVERRIDE_SEED";

static SEED: OnceCell<u64> = OnceCell::new();

/// Returns the process seed, initializing it on first use.
pub fn process_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = match env::var(SEED_ENV_VAR) {
            Ok(val) => match val.trim().parse::<u64>() {
                Ok(seed) => seed,
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring unparsable {SEED_ENV_VAR}");
                    rand::thread_rng().gen()
                }
            },
            Err(_) => rand::thread_rng().gen(),
        };

        tracing::info!(seed, "random seed, set {SEED_ENV_VAR}={seed} to reproduce");
        seed
    })
}

/// Generator seeded from [`process_seed`]. Every call yields the same sequence.
pub fn process_rng() -> StdRng {
    StdRng::seed_from_u64(process_seed())
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Stochastic mechanics: RNG construction and the biased coin toss.
/// Every draw takes the random source explicitly so parallel runs can
/// each own an isolated `bevy_prng::WyRand` stream.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

use crate::games::Outcome;

/// Deterministic WyRand from an integer seed.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// WyRand seeded from the operating system.
pub fn from_entropy() -> WyRand {
    WyRand::from_os_rng()
}

/// Uniform in [0, 1) from the top 53 bits of one `next_u64`.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Biased coin: `Win` with probability `p_win`, one draw per call.
#[inline]
pub fn cointoss<R: RngCore + ?Sized>(rng: &mut R, p_win: f64) -> Outcome {
    if uniform01(rng) < p_win {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

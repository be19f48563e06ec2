//! Repeated independent runs of one pattern.
//!
//! Each run owns a WyRand seeded from `run_seed(base_seed, index)`, so the
//! result vector depends only on the config, never on scheduling. With the
//! `parallel` feature the runs are spread over rayon's pool.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::games::Play;
use crate::mechanics::stoch;
use crate::pattern::Pattern;
use crate::simulate_from;

#[derive(Clone, Copy, Debug)]
pub struct SweepConfig {
    pub runs: usize,
    pub n_steps: u64,
    pub init_capital: i64,
    pub base_seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { runs: 100, n_steps: 100_000, init_capital: 0, base_seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SweepSummary {
    /// Final capital per run, in run-index order.
    pub finals: Vec<i64>,
    pub mean: f64,
    /// Runs that ended strictly above their starting capital.
    pub winning: usize,
}

impl SweepSummary {
    fn from_finals(finals: Vec<i64>, init_capital: i64) -> Self {
        let mean = if finals.is_empty() {
            0.0
        } else {
            finals.iter().map(|&c| c as f64).sum::<f64>() / finals.len() as f64
        };
        let winning = finals.iter().filter(|&&c| c > init_capital).count();
        Self { finals, mean, winning }
    }
}

/// SplitMix64 finalizer over `base_seed + index * γ`.
#[inline]
pub fn run_seed(base_seed: u64, index: u64) -> u64 {
    let mut z = base_seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn sweep<G: Play + Sync>(pattern: &Pattern<G>, cfg: &SweepConfig) -> SweepSummary {
    let one = |index: usize| {
        let mut rng = stoch::seeded(run_seed(cfg.base_seed, index as u64));
        simulate_from(pattern, cfg.n_steps, cfg.init_capital, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let finals: Vec<i64> = (0..cfg.runs).into_par_iter().map(one).collect();
    #[cfg(not(feature = "parallel"))]
    let finals: Vec<i64> = (0..cfg.runs).map(one).collect();

    let summary = SweepSummary::from_finals(finals, cfg.init_capital);
    debug!(
        "sweep of {} runs x {} steps: mean {:.1}, {} winning",
        cfg.runs, cfg.n_steps, summary.mean, summary.winning
    );
    summary
}

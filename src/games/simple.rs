use rand_core::RngCore;

use crate::error::{ConfigError, probability};
use crate::games::{Outcome, Play};
use crate::mechanics::stoch;

/// Capital-independent biased coin ("game A").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleGame {
    p_win: f64,
}

impl SimpleGame {
    pub fn new(p_win: f64) -> Result<Self, ConfigError> {
        Ok(Self { p_win: probability("p_win", p_win)? })
    }

    pub fn p_win(&self) -> f64 {
        self.p_win
    }
}

impl Play for SimpleGame {
    #[inline]
    fn play<R: RngCore + ?Sized>(&self, _capital: i64, rng: &mut R) -> Outcome {
        stoch::cointoss(rng, self.p_win)
    }
}

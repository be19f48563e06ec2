use rand_core::RngCore;

use crate::error::{ConfigError, probability};
use crate::games::{Outcome, Play};
use crate::mechanics::{residue, stoch};

/// Capital-dependent coin ("game B"): `p_win1` when capital is a multiple
/// of `period` (floor modulo, sign-independent), `p_win2` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModuloGame {
    p_win1: f64,
    p_win2: f64,
    period: i64,
}

impl ModuloGame {
    pub fn new(p_win1: f64, p_win2: f64, period: i64) -> Result<Self, ConfigError> {
        if period < 1 {
            return Err(ConfigError::NonPositivePeriod { value: period });
        }
        Ok(Self {
            p_win1: probability("p_win1", p_win1)?,
            p_win2: probability("p_win2", p_win2)?,
            period,
        })
    }

    pub fn period(&self) -> i64 {
        self.period
    }

    /// Win probability in effect at `capital`.
    #[inline]
    pub fn p_win_at(&self, capital: i64) -> f64 {
        if residue::on_period(capital, self.period) {
            self.p_win1
        } else {
            self.p_win2
        }
    }
}

impl Play for ModuloGame {
    #[inline]
    fn play<R: RngCore + ?Sized>(&self, capital: i64, rng: &mut R) -> Outcome {
        stoch::cointoss(rng, self.p_win_at(capital))
    }
}

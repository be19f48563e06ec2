/*!
`parrondo` — a minimal coin-toss engine for Parrondo's paradox.

What it does
- Threads an integer capital through a fixed number of ±1 steps.
- At each step a cyclic pattern scheduler picks the game to play,
  the game draws once from the supplied random source, and the
  outcome is added to capital.
- Returns the final capital; repeated runs estimate whether a
  pattern of games is winning or losing.

How to use (call surface only)
- Build games with `Game::simple(p)` and `Game::modulo(p1, p2, m)`.
- Compose them into a `Pattern` (e.g. `[A, A, B, B]`).
- Seed a source with `mechanics::stoch::seeded(seed)`.
- Call `simulate(&pattern, n_steps, &mut rng) -> i64`
  (or `simulate_from` with a non-zero starting capital).

What it does NOT do
- No analytic probabilities or stationary distributions; outcomes are
  estimated purely by sampling. Reporting lives in `experiments`.
*/

use log::debug;
use rand_core::RngCore;

pub mod error;
pub mod experiments;
pub mod games;
pub mod mechanics;
pub mod pattern;

pub use error::ConfigError;
pub use games::{Game, ModuloGame, Outcome, Play, SimpleGame};
pub use pattern::{Cycle, Pattern};

/// State of one simulation run: step counter, capital, and pattern cursor.
#[derive(Clone, Debug)]
pub struct Run<'a, G> {
    cycle: Cycle<'a, G>,
    capital: i64,
    count: u64,
}

impl<'a, G: Play> Run<'a, G> {
    pub fn new(pattern: &'a Pattern<G>, init_capital: i64) -> Self {
        Self { cycle: pattern.cycle(), capital: init_capital, count: 0 }
    }

    /// Play the next scheduled game once and fold its outcome into capital.
    #[inline]
    pub fn step<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let game = self.cycle.next_game();
        let outcome = game.play(self.capital, rng);
        self.capital = self.capital.saturating_add(outcome.value());
        self.count += 1;
        outcome
    }

    pub fn capital(&self) -> i64 {
        self.capital
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Final capital after `n_steps` steps starting from zero.
pub fn simulate<G, R>(pattern: &Pattern<G>, n_steps: u64, rng: &mut R) -> i64
where
    G: Play,
    R: RngCore + ?Sized,
{
    simulate_from(pattern, n_steps, 0, rng)
}

/// Final capital after exactly `n_steps` game invocations.
pub fn simulate_from<G, R>(pattern: &Pattern<G>, n_steps: u64, init_capital: i64, rng: &mut R) -> i64
where
    G: Play,
    R: RngCore + ?Sized,
{
    let mut run = Run::new(pattern, init_capital);
    // Budget is checked before the scheduler advances.
    while run.count() < n_steps {
        run.step(rng);
    }
    debug!(
        "simulated {} steps over a {}-game pattern: {} -> {}",
        run.count(),
        pattern.len(),
        init_capital,
        run.capital()
    );
    run.capital()
}

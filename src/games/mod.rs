// src/games/mod.rs

//! # Games
//!
//! A *game* turns the current capital and one uniform draw into a ±1
//! [`Outcome`]. Two variants exist and the set is closed:
//!
//! - [`SimpleGame`] ("A"): wins with a fixed probability, ignores capital.
//! - [`ModuloGame`] ("B"): picks between two win probabilities depending on
//!   whether capital is a multiple of its period.
//!
//! [`Game`] wraps both behind a single dispatch point. The runner itself is
//! generic over [`Play`], so callers can wrap games (e.g. recorders that count
//! invocations) without touching the engine.
//!
//! ## Determinism
//! - `play` consumes exactly one draw from the supplied source per call.
//! - Same seed, same pattern, same budget → same final capital.

use rand_core::RngCore;

use crate::error::ConfigError;

pub mod modulo;
pub mod simple;

pub use modulo::ModuloGame;
pub use simple::SimpleGame;

/// Result of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Capital delta: +1 or -1.
    #[inline]
    pub fn value(self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Loss => -1,
        }
    }
}

/// Anything the runner can invoke once per step.
pub trait Play {
    fn play<R: RngCore + ?Sized>(&self, capital: i64, rng: &mut R) -> Outcome;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Game {
    Simple(SimpleGame),
    Modulo(ModuloGame),
}

impl Game {
    pub fn simple(p_win: f64) -> Result<Self, ConfigError> {
        SimpleGame::new(p_win).map(Game::Simple)
    }

    pub fn modulo(p_win1: f64, p_win2: f64, period: i64) -> Result<Self, ConfigError> {
        ModuloGame::new(p_win1, p_win2, period).map(Game::Modulo)
    }

    /// Short display name used in pattern strings.
    pub fn label(&self) -> char {
        match self {
            Game::Simple(_) => 'A',
            Game::Modulo(_) => 'B',
        }
    }
}

impl Play for Game {
    #[inline]
    fn play<R: RngCore + ?Sized>(&self, capital: i64, rng: &mut R) -> Outcome {
        match self {
            Game::Simple(g) => g.play(capital, rng),
            Game::Modulo(g) => g.play(capital, rng),
        }
    }
}

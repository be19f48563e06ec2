// src/experiments/mod.rs

//! # Experiments
//!
//! Drivers that sit on top of the engine and turn final capitals into
//! observations:
//!
//! - [`paradox`]: plays game A, game B and a list of A/B patterns for each
//!   period and classifies every pattern as winning or losing.
//! - [`sweep`]: repeats one pattern many times with isolated, index-derived
//!   seeds (parallel with the `parallel` feature).
//!
//! Anomalous observations (a game expected to lose ending at or above zero)
//! are logged as warnings. They are statistical facts about a seed, not
//! engine errors.

pub mod paradox;
pub mod sweep;

pub use paradox::*;
pub use sweep::*;

//! Pattern scheduler: a fixed, non-empty sequence of games repeated without
//! bound. The cycle is a cursor `idx mod len`, never a materialized sequence.

use std::fmt;

use crate::error::ConfigError;
use crate::games::Game;

#[derive(Clone, Debug, PartialEq)]
pub struct Pattern<G = Game> {
    games: Vec<G>,
}

impl<G> Pattern<G> {
    pub fn new(games: Vec<G>) -> Result<Self, ConfigError> {
        if games.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        Ok(Self { games })
    }

    /// Build from a label string such as `"AABB"`; whitespace is skipped.
    pub fn from_labels<F>(labels: &str, mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(char) -> Option<G>,
    {
        let games = labels
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|label| lookup(label).ok_or(ConfigError::UnknownLabel { label }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(games)
    }

    pub fn games(&self) -> &[G] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Patterns are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cycle(&self) -> Cycle<'_, G> {
        Cycle { games: &self.games, cursor: 0 }
    }
}

/// One-game pattern: the same game at every step.
impl<G> From<G> for Pattern<G> {
    fn from(game: G) -> Self {
        Self { games: vec![game] }
    }
}

impl fmt::Display for Pattern<Game> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.games.iter().try_for_each(|g| write!(f, "{}", g.label()))
    }
}

/// Endless round-robin over a pattern's games.
#[derive(Clone, Debug)]
pub struct Cycle<'a, G> {
    games: &'a [G],
    cursor: usize,
}

impl<'a, G> Cycle<'a, G> {
    /// Game at the cursor; advances and wraps after the last one.
    #[inline]
    pub fn next_game(&mut self) -> &'a G {
        let game = &self.games[self.cursor];
        self.cursor = (self.cursor + 1) % self.games.len();
        game
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<'a, G> Iterator for Cycle<'a, G> {
    type Item = &'a G;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_game())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

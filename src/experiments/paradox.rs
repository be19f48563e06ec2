//! Parrondo experiment: for each period `m`, confirm that A and B lose on
//! their own, then play every configured A/B pattern.

use std::fmt;

use bevy_prng::WyRand;
use log::{debug, warn};

use crate::error::ConfigError;
use crate::games::Game;
use crate::mechanics::stoch;
use crate::pattern::Pattern;
use crate::simulate;

#[derive(Clone, Debug)]
pub struct ParadoxConfig {
    /// Bias subtracted from every base probability.
    pub eps: f64,
    pub p_a: f64,
    pub p1_b: f64,
    pub p2_b: f64,
    pub periods: Vec<i64>,
    pub n_steps: u64,
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,
    pub patterns: Vec<String>,
}

impl Default for ParadoxConfig {
    fn default() -> Self {
        Self {
            eps: 0.005,
            p_a: 0.5,
            p1_b: 0.1,
            p2_b: 0.75,
            periods: vec![3, 2],
            n_steps: 1_000_000,
            seed: Some(42),
            patterns: ["AB", "AABB", "AAABBB", "AAB"].map(String::from).to_vec(),
        }
    }
}

impl ParadoxConfig {
    /// Games A and B for one period, biased by `eps`.
    pub fn games(&self, period: i64) -> Result<(Game, Game), ConfigError> {
        let a = Game::simple(self.p_a - self.eps)?;
        let b = Game::modulo(self.p1_b - self.eps, self.p2_b - self.eps, period)?;
        Ok((a, b))
    }
}

/// Resolve a label string against games A and B.
pub fn pattern_of(labels: &str, a: Game, b: Game) -> Result<Pattern, ConfigError> {
    Pattern::from_labels(labels, |c| match c.to_ascii_uppercase() {
        'A' => Some(a),
        'B' => Some(b),
        _ => None,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Winning,
    Losing,
}

impl Verdict {
    pub fn of(capital: i64) -> Self {
        if capital > 0 { Verdict::Winning } else { Verdict::Losing }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Winning => f.write_str("winning"),
            Verdict::Losing => f.write_str("losing"),
        }
    }
}

/// A single game that was expected to lose but did not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anomaly {
    GameANotLosing { capital: i64 },
    GameBNotLosing { capital: i64 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::GameANotLosing { capital } => write!(f, "game A is not losing (res={capital})"),
            Anomaly::GameBNotLosing { capital } => write!(f, "game B is not losing (res={capital})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternResult {
    pub pattern: String,
    pub capital: i64,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PeriodOutcome {
    Skipped(Anomaly),
    Completed { game_a: i64, game_b: i64, patterns: Vec<PatternResult> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodReport {
    pub period: i64,
    pub eps: f64,
    pub n_steps: u64,
    pub outcome: PeriodOutcome,
}

impl PeriodReport {
    pub fn winning_patterns(&self) -> impl Iterator<Item = &PatternResult> {
        let patterns = match &self.outcome {
            PeriodOutcome::Completed { patterns, .. } => patterns.as_slice(),
            PeriodOutcome::Skipped(_) => &[],
        };
        patterns.iter().filter(|r| r.verdict == Verdict::Winning)
    }
}

impl fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Running for eps={} M={} sim_steps={}", self.eps, self.period, self.n_steps)?;
        match &self.outcome {
            PeriodOutcome::Skipped(anomaly) => writeln!(f, "\tskipped: {anomaly}"),
            PeriodOutcome::Completed { patterns, .. } => patterns.iter().try_for_each(|r| {
                writeln!(f, "\tseq={} is {} res={}", r.pattern, r.verdict, r.capital)
            }),
        }
    }
}

/// Run the whole experiment on one random source seeded once up front.
pub fn run(cfg: &ParadoxConfig) -> Result<Vec<PeriodReport>, ConfigError> {
    let mut rng = match cfg.seed {
        Some(seed) => stoch::seeded(seed),
        None => stoch::from_entropy(),
    };
    // Patterns are resolved up front so a bad label fails before any sampling.
    let plans = cfg
        .periods
        .iter()
        .map(|&m| -> Result<_, ConfigError> {
            let (a, b) = cfg.games(m)?;
            let patterns = cfg
                .patterns
                .iter()
                .map(|labels| pattern_of(labels, a, b))
                .collect::<Result<Vec<_>, _>>()?;
            Ok((m, a, b, patterns))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(plans
        .into_iter()
        .map(|(m, a, b, patterns)| PeriodReport {
            period: m,
            eps: cfg.eps,
            n_steps: cfg.n_steps,
            outcome: run_period(m, a, b, &patterns, cfg.n_steps, &mut rng),
        })
        .collect())
}

fn run_period(
    m: i64,
    a: Game,
    b: Game,
    patterns: &[Pattern],
    n_steps: u64,
    rng: &mut WyRand,
) -> PeriodOutcome {
    debug!("running eps-biased games for M={m} over {n_steps} steps");

    let game_a = simulate(&Pattern::from(a), n_steps, rng);
    if game_a >= 0 {
        let anomaly = Anomaly::GameANotLosing { capital: game_a };
        warn!("M={m}: {anomaly}");
        return PeriodOutcome::Skipped(anomaly);
    }

    let game_b = simulate(&Pattern::from(b), n_steps, rng);
    if game_b >= 0 {
        let anomaly = Anomaly::GameBNotLosing { capital: game_b };
        warn!("M={m}: {anomaly}");
        return PeriodOutcome::Skipped(anomaly);
    }

    let patterns = patterns
        .iter()
        .map(|p| {
            let capital = simulate(p, n_steps, rng);
            let verdict = Verdict::of(capital);
            debug!("M={m} seq={p} is {verdict} res={capital}");
            PatternResult { pattern: p.to_string(), capital, verdict }
        })
        .collect();

    PeriodOutcome::Completed { game_a, game_b, patterns }
}

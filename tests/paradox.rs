// tests/paradox.rs
use parrondo::experiments::{
    Anomaly, ParadoxConfig, PeriodOutcome, Verdict, paradox, pattern_of,
};
use parrondo::mechanics::stoch;
use parrondo::{ConfigError, Pattern, simulate};

const STEPS: u64 = 1_000_000;

/* ──────────────────────────────────────────────────────────────────────────
1) Paradox signature — A and B lose alone, AABB wins (M = 3, seed 42)
────────────────────────────────────────────────────────────────────────── */

#[test]
fn two_losing_games_alternate_into_a_winning_one() {
    let cfg = ParadoxConfig::default();
    let (a, b) = cfg.games(3).unwrap();

    let res_a = simulate(&Pattern::from(a), STEPS, &mut stoch::seeded(42));
    let res_b = simulate(&Pattern::from(b), STEPS, &mut stoch::seeded(42));
    let aabb = pattern_of("AABB", a, b).unwrap();
    let res_aabb = simulate(&aabb, STEPS, &mut stoch::seeded(42));

    assert!(res_a < 0, "game A should lose: {res_a}");
    assert!(res_b < 0, "game B should lose: {res_b}");
    assert!(res_aabb > 0, "AABB should win: {res_aabb}");
}

#[test]
fn default_experiment_classifies_patterns_per_period() {
    let cfg = ParadoxConfig::default();
    let reports = paradox::run(&cfg).unwrap();
    assert_eq!(reports.len(), 2);

    // M = 3: AABB and AAB win, AB loses.
    let m3 = &reports[0];
    assert_eq!(m3.period, 3);
    match &m3.outcome {
        PeriodOutcome::Completed { game_a, game_b, patterns } => {
            assert!(*game_a < 0 && *game_b < 0);
            let names: Vec<&str> = patterns.iter().map(|r| r.pattern.as_str()).collect();
            assert_eq!(names, ["AB", "AABB", "AAABBB", "AAB"]);
            assert_eq!(patterns[0].verdict, Verdict::Losing);
            assert_eq!(patterns[1].verdict, Verdict::Winning);
            assert_eq!(patterns[3].verdict, Verdict::Winning);
        }
        other => panic!("M=3 should complete, got {other:?}"),
    }
    assert!(m3.winning_patterns().any(|r| r.pattern == "AABB"));

    // M = 2: capital parity flips every step, so each slot of a pattern
    // always meets the same branch of B. In AB, B always plays at odd
    // capital (p2) and wins; AAABBB meets p2 twice per cycle and wins;
    // AABB and AAB hit p1 often enough to lose.
    let m2 = &reports[1];
    assert_eq!(m2.period, 2);
    match &m2.outcome {
        PeriodOutcome::Completed { patterns, .. } => {
            let verdicts: Vec<Verdict> = patterns.iter().map(|r| r.verdict).collect();
            assert_eq!(
                verdicts,
                [Verdict::Winning, Verdict::Losing, Verdict::Winning, Verdict::Losing]
            );
        }
        other => panic!("M=2 should complete, got {other:?}"),
    }
    let winners: Vec<&str> = m2.winning_patterns().map(|r| r.pattern.as_str()).collect();
    assert_eq!(winners, ["AB", "AAABBB"]);
}

#[test]
fn experiment_is_reproducible_for_a_fixed_seed() {
    let cfg = ParadoxConfig { n_steps: 20_000, periods: vec![3], ..ParadoxConfig::default() };
    assert_eq!(paradox::run(&cfg).unwrap(), paradox::run(&cfg).unwrap());
}

/* ──────────────────────────────────────────────────────────────────────────
2) Anomalies — a non-losing single game skips the period
────────────────────────────────────────────────────────────────────────── */

#[test]
fn winning_game_a_skips_the_period() {
    // A at 0.6 wins on average.
    let cfg = ParadoxConfig { eps: -0.1, n_steps: 10_000, periods: vec![3], ..ParadoxConfig::default() };
    let reports = paradox::run(&cfg).unwrap();
    match reports[0].outcome {
        PeriodOutcome::Skipped(Anomaly::GameANotLosing { capital }) => assert!(capital >= 0),
        ref other => panic!("expected game A anomaly, got {other:?}"),
    }
    assert!(reports[0].to_string().contains("\tskipped: game A is not losing"));
}

#[test]
fn winning_game_b_skips_the_period() {
    // A at 0.45 still loses; B at (0.15, 0.8) wins.
    let cfg = ParadoxConfig {
        eps: -0.05,
        p_a: 0.4,
        n_steps: 10_000,
        periods: vec![3],
        ..ParadoxConfig::default()
    };
    let reports = paradox::run(&cfg).unwrap();
    match reports[0].outcome {
        PeriodOutcome::Skipped(Anomaly::GameBNotLosing { capital }) => assert!(capital >= 0),
        ref other => panic!("expected game B anomaly, got {other:?}"),
    }
}

/* ──────────────────────────────────────────────────────────────────────────
3) Configuration and rendering
────────────────────────────────────────────────────────────────────────── */

#[test]
fn bad_configuration_fails_before_sampling() {
    let cfg = ParadoxConfig { patterns: vec!["AC".into()], ..ParadoxConfig::default() };
    assert_eq!(paradox::run(&cfg), Err(ConfigError::UnknownLabel { label: 'C' }));

    let cfg = ParadoxConfig { periods: vec![3, 0], ..ParadoxConfig::default() };
    assert_eq!(paradox::run(&cfg), Err(ConfigError::NonPositivePeriod { value: 0 }));

    let cfg = ParadoxConfig { eps: 0.2, ..ParadoxConfig::default() };
    assert!(matches!(
        paradox::run(&cfg),
        Err(ConfigError::ProbabilityOutOfRange { field: "p_win1", .. })
    ));
}

#[test]
fn report_renders_one_line_per_pattern() {
    let cfg = ParadoxConfig {
        n_steps: 1_000,
        periods: vec![3],
        patterns: vec!["ab".into(), "aabb".into()],
        ..ParadoxConfig::default()
    };
    let reports = paradox::run(&cfg).unwrap();
    let text = reports[0].to_string();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("Running for eps=0.005 M=3 sim_steps=1000"));
    if let PeriodOutcome::Completed { .. } = reports[0].outcome {
        assert!(lines.next().unwrap().starts_with("\tseq=AB is "));
        assert!(lines.next().unwrap().starts_with("\tseq=AABB is "));
    }
    assert_eq!(Verdict::of(0), Verdict::Losing);
    assert_eq!(Verdict::of(1), Verdict::Winning);
}

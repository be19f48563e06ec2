use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use parrondo::ConfigError;
use parrondo::experiments::{self, ParadoxConfig, SweepConfig, pattern_of};

#[derive(Debug, Parser)]
#[command(name = "parrondo", version)]
#[command(about = "Simulate Parrondo's paradox with biased coin-toss games")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Used when no subcommand is given
    #[command(flatten)]
    paradox: ParadoxArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that A and B lose alone, then classify each A/B pattern
    Paradox(ParadoxArgs),
    /// Repeat one pattern over independently seeded runs
    Sweep(SweepArgs),
}

#[derive(Debug, Args)]
struct ParadoxArgs {
    /// Bias subtracted from every base probability
    #[arg(long, default_value_t = 0.005)]
    eps: f64,

    /// Periods of game B (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [3, 2])]
    periods: Vec<i64>,

    /// Steps per simulation
    #[arg(long, default_value_t = 1_000_000)]
    steps: u64,

    /// Random seed
    #[arg(long, default_value_t = 42, conflicts_with = "no_seed")]
    seed: u64,

    /// Seed from the operating system instead
    #[arg(long)]
    no_seed: bool,

    /// Patterns to play (comma-separated, e.g. AB,AABB)
    #[arg(long, value_delimiter = ',', default_values = ["AB", "AABB", "AAABBB", "AAB"])]
    patterns: Vec<String>,
}

#[derive(Debug, Args)]
struct SweepArgs {
    #[arg(long, default_value = "AABB")]
    pattern: String,

    #[arg(long, default_value_t = 3)]
    period: i64,

    #[arg(long, default_value_t = 0.005)]
    eps: f64,

    #[arg(long, default_value_t = 100)]
    runs: usize,

    #[arg(long, default_value_t = 100_000)]
    steps: u64,

    /// Base seed; run i uses a seed derived from (seed, i)
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    match cli.command.unwrap_or(Command::Paradox(cli.paradox)) {
        Command::Paradox(ParadoxArgs { eps, periods, steps, seed, no_seed, patterns }) => {
            let cfg = ParadoxConfig {
                eps,
                periods,
                n_steps: steps,
                seed: (!no_seed).then_some(seed),
                patterns,
                ..ParadoxConfig::default()
            };
            for report in experiments::paradox::run(&cfg)? {
                print!("{report}");
            }
        }
        Command::Sweep(SweepArgs { pattern, period, eps, runs, steps, seed }) => {
            let paradox = ParadoxConfig { eps, ..ParadoxConfig::default() };
            let (a, b) = paradox.games(period)?;
            let pattern = pattern_of(&pattern, a, b)?;
            let cfg = SweepConfig { runs, n_steps: steps, init_capital: 0, base_seed: seed };
            let summary = experiments::sweep(&pattern, &cfg);
            println!(
                "seq={pattern} M={period} runs={runs} steps={steps}: mean={:.1} winning={}/{}",
                summary.mean, summary.winning, runs
            );
        }
    }
    Ok(())
}

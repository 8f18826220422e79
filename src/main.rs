//! `vybe-strike` — play a VybeStrike session in the terminal.
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG` (default `warn`).

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use vybe_strike::{Console, ContentTables, GameConfig, GameError, Session};

/// Emotional-wellness quiz and life-scenario game
#[derive(Parser, Debug)]
#[command(name = "vybe-strike", version, about, long_about = None)]
struct Cli {
    /// Player name
    #[arg(long, default_value = "VyralTeen")]
    name: String,

    /// Number of rounds (one quiz + one scenario each)
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    /// Seed for reproducible question and scenario picks
    #[arg(long)]
    seed: Option<u64>,

    /// Pause after each interaction, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pause_ms: u64,

    /// Invalid quiz answers allowed before the question is skipped
    #[arg(long, default_value_t = 10)]
    max_attempts: u32,

    /// Zero-based round after which the VybeTree alert is shown
    #[arg(long, default_value_t = 1)]
    skill_tree_round: u32,

    /// Print the final player as JSON after the session
    #[arg(long)]
    json_summary: bool,
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        GameConfig {
            player_name: cli.name.clone(),
            rounds: cli.rounds,
            skill_tree_round: cli.skill_tree_round,
            pause: Duration::from_millis(cli.pause_ms),
            max_answer_attempts: cli.max_attempts,
            rng_seed: cli.seed,
        }
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let config = GameConfig::from(cli);
    let content = ContentTables::embedded()?;
    let mut console = Console::stdio(config.pause);

    let mut session = Session::new(config, content);
    session.run(&mut console)?;

    if cli.json_summary {
        console.say(serde_json::to_string_pretty(session.player())?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session failed");
            eprintln!("vybe-strike: {e}");
            ExitCode::FAILURE
        }
    }
}

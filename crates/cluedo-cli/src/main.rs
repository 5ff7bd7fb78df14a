use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cluedo_cli::config::SessionConfig;
use cluedo_cli::logging::init_logging;
use cluedo_cli::render::render;
use cluedo_cli::session::Session;
use cluedo_core::model::card::Card;
use cluedo_core::{AppInfo, GameSnapshot};

/// Replays a recorded Cluedo session and prints what can be deduced.
#[derive(Debug, Parser)]
#[command(
    name = "cluedo-assistant",
    author,
    version,
    about = "Deduce card locations from the questions asked in a game of Cluedo"
)]
struct Cli {
    /// Path to the YAML session file.
    #[arg(short, long, value_name = "FILE", default_value = "sessions/demo.yaml")]
    config: PathBuf,

    /// Print the board as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Exit after validating the session file (no turns are applied).
    #[arg(long)]
    validate_only: bool,

    /// Override the configured log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SessionConfig::from_path(&cli.config)?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    tracing::debug!(
        app = AppInfo::name(),
        version = AppInfo::version(),
        config = %cli.config.display(),
        "session loaded"
    );

    let player_count = config.players.len();
    let turn_count = config.turns.len();
    if cli.validate_only {
        println!(
            "Session {} is valid: {player_count} other player{}, {turn_count} turn{}.",
            cli.config.display(),
            if player_count == 1 { "" } else { "s" },
            if turn_count == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    let mut session = Session::new(config).context("setting up the game")?;
    let summary = session
        .run()
        .with_context(|| format!("replaying {}", cli.config.display()))?;

    if cli.json {
        println!("{}", GameSnapshot::to_json(session.game())?);
        return Ok(());
    }

    print!("{}", render(session.game()));
    println!(
        "{} turn{} applied, {} skipped, {} of {} cards located.",
        summary.turns_applied,
        if summary.turns_applied == 1 { "" } else { "s" },
        summary.turns_skipped,
        summary.cards_found,
        Card::COUNT
    );
    if let Some([who, what, place]) = summary.accusation {
        println!("Accusation: {who} with the {what} in the {place}.");
    }

    Ok(())
}

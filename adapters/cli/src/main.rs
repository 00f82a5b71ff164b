#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Lawn Defence session.

mod autopilot;
mod presenter;

use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;
use lawn_defence_core::{LossReason, SessionStatus};
use lawn_defence_presentation::{present, Frame};
use lawn_defence_simulation::{Session, SessionConfig};
use lawn_defence_world::{query, World};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{autopilot::Autopilot, presenter::LogPresenter};

/// Runs a headless Lawn Defence session and prints a summary.
#[derive(Debug, Parser)]
#[command(name = "lawn-defence", version, about)]
struct Args {
    /// TOML file with session tuning and an opening script.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated seconds to run before stopping.
    #[arg(long, default_value_t = 300)]
    seconds: u64,
    /// Length of a simulation step in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
    /// Leaves suns on the lawn instead of collecting them.
    #[arg(long)]
    no_autocollect: bool,
}

/// End-of-run report printed as TOML.
#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    outcome: String,
    elapsed_ms: u64,
    ticks: u64,
    balance: u32,
    score: u32,
    zombies_killed: u32,
    plants_lost: u32,
    plants_alive: usize,
    zombies_alive: usize,
    scripted_moves_left: usize,
    visuals_created: u64,
    visuals_destroyed: u64,
}

/// Entry point for the Lawn Defence command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => SessionConfig::from_path(path)
            .with_context(|| format!("failed to load session config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.tick_ms == 0 {
        bail!("--tick-ms must be positive");
    }

    let tick = Duration::from_millis(args.tick_ms);
    let limit = Duration::from_secs(args.seconds);

    let mut session = Session::new(&config);
    let mut autopilot = Autopilot::new(&config.opening, !args.no_autocollect);
    let mut presenter = LogPresenter::default();
    present(session.events(), &capture(session.world()), &mut presenter);

    while !session.is_over() && query::clock(session.world()) < limit {
        let input = autopilot.input(&session);
        let _ = session.step(tick, input);
        present(session.events(), &capture(session.world()), &mut presenter);
    }

    let world = session.world();
    let board = session.scoreboard();
    let summary = Summary {
        seed: config.seed,
        outcome: outcome(session.status()),
        elapsed_ms: u64::try_from(query::clock(world).as_millis()).unwrap_or(u64::MAX),
        ticks: query::tick_index(world),
        balance: board.balance,
        score: board.score,
        zombies_killed: board.zombies_killed,
        plants_lost: board.plants_lost,
        plants_alive: query::plants(world).len(),
        zombies_alive: query::live_zombie_count(world),
        scripted_moves_left: autopilot.remaining(),
        visuals_created: presenter.created,
        visuals_destroyed: presenter.destroyed,
    };
    info!(updates = presenter.updates, "run finished");

    let report = toml::to_string(&summary).context("failed to render run summary")?;
    print!("{report}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn capture(world: &World) -> Frame {
    Frame::capture(
        &query::plants(world),
        &query::zombies(world),
        &query::projectiles(world),
        &query::suns(world),
    )
}

fn outcome(status: SessionStatus) -> String {
    match status {
        SessionStatus::Running => "survived".to_owned(),
        SessionStatus::Lost {
            reason: LossReason::Breach { zombie },
        } => format!("lost: zombie {} reached the house", zombie.get()),
        SessionStatus::Lost {
            reason: LossReason::PlantsLost { count },
        } => format!("lost: {count} plants destroyed"),
    }
}

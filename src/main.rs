//! Headless driver (default binary).
//!
//! Runs a seeded session with a greedy bot, advancing the simulation at a
//! fixed frame length the way an interactive front end would: one bot action
//! per frame, then one tick. Prints the final snapshot as JSON.

mod bot;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use blockstacker::core::{GameState, SimpleRng};
use blockstacker::types::GameConfig;

use bot::Bot;

#[derive(Debug, Parser)]
#[command(name = "blockstacker", about = "Run a headless falling-block session")]
struct Cli {
    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(long, default_value_t = 1, help = "Seed for the piece randomizer")]
    seed: u32,

    #[arg(long, default_value_t = 100, help = "Stop after this many locked pieces")]
    pieces: u32,

    #[arg(long, default_value_t = 16, help = "Simulated frame length in milliseconds")]
    frame_ms: u64,

    #[arg(long, default_value_t = 5, help = "Number of upcoming pieces in the preview")]
    preview: usize,

    #[arg(long, help = "Print the final board as text instead of JSON")]
    ascii: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.frame_ms == 0 {
        bail!("--frame-ms must be greater than zero");
    }

    let config = GameConfig::default().with_preview_len(cli.preview);
    let mut game = GameState::with_config(config, SimpleRng::new(cli.seed));
    let mut bot = Bot::default();
    let frame = Duration::from_millis(cli.frame_ms);

    info!(seed = cli.seed, pieces = cli.pieces, "session started");

    let mut frames: u64 = 0;
    while !game.game_over() && game.pieces_locked() < cli.pieces {
        if let Some(action) = bot.act(&game) {
            game.apply_action(action);
        }
        game.tick(frame);
        frames += 1;

        if let Some(event) = game.take_last_event() {
            if event.lines_cleared > 0 {
                info!(lines = event.lines_cleared, total = game.lines(), "cleared");
            }
        }
    }

    info!(
        frames,
        pieces = game.pieces_locked(),
        lines = game.lines(),
        game_over = game.game_over(),
        "session finished"
    );

    let snapshot = game.snapshot();
    if cli.ascii {
        print!("{}", snapshot.to_ascii());
        println!(
            "pieces={} lines={} game_over={}",
            snapshot.pieces_locked,
            snapshot.lines,
            game.game_over()
        );
    } else {
        let json = serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?;
        println!("{json}");
    }
    Ok(())
}

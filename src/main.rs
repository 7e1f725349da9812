//! Terminal runner (default binary).
//!
//! Resolves the configuration, takes over the terminal, runs one game until
//! quit or game over, then restores the terminal and prints a summary.

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tui_blockfall::core::GridEngine;
use tui_blockfall::engine::{ExitReason, GameLoop};
use tui_blockfall::input::TerminalInput;
use tui_blockfall::settings::{self, Args};
use tui_blockfall::term::TerminalSurface;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = settings::load_config(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "starting {}x{} board, seed {}",
        config.cols, config.rows, seed
    );

    let engine = GridEngine::new(&config, seed)?;
    let mut game = GameLoop::new(&config, engine);
    let mut surface = TerminalSurface::new(&config)?;

    surface.enter()?;
    let result = game.run(&mut surface, &mut TerminalInput);
    // Always try to restore terminal state.
    let restored = surface.exit();
    let reason = result?;
    restored?;

    if reason == ExitReason::GameOver {
        println!("Game over.");
    }
    println!("Final score: {}", game.summary());
    Ok(())
}

/// Logs go to `--log-file` only; the raw-mode screen is never written to.
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

//! Flappy entry point
//!
//! Loads settings and assets, then runs the game loop in a window (or headless).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use flappy::assets::Assets;
use flappy::{AppError, GameLoop, Settings, platform};

#[derive(Parser)]
#[command(name = "flappy")]
#[command(about = "A minimal Flappy Bird clone with a naive autopilot", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for pipe generation (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the autopilot off
    #[arg(long)]
    no_autopilot: bool,

    /// Run without a window, assets or input
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(
        long,
        default_value_t = 600,
        requires = "headless",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    ticks: u64,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.no_autopilot {
        settings.autopilot_enabled = false;
    }
    settings.validate()?;

    if cli.headless {
        let game = GameLoop::new(settings);
        platform::run_headless(game, cli.ticks)?;
        return Ok(());
    }

    let assets = Assets::load(&settings.assets)?;
    let game = GameLoop::new(settings);
    platform::run(game, assets)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy starting...");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, Session};
use grid_snake::modes::{HeadlessMode, PlayMode};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake played in the terminal")]
struct Cli {
    /// How to run the game
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in units (overrides the config file)
    #[arg(long)]
    width: Option<i32>,

    /// Board height in units (overrides the config file)
    #[arg(long)]
    height: Option<i32>,

    /// Cell size in units (overrides the config file)
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between ticks, lower is faster (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Comma separated moves fed one per tick (headless only)
    #[arg(long, default_value = "")]
    moves: String,

    /// Stop a headless run after this many ticks
    #[arg(long, default_value = "10000")]
    max_ticks: u64,

    /// Where to write the log
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log verbosity
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard
    Play,
    /// Run a scripted game without a terminal UI
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => match self.mode {
                Mode::Play => GameConfig::terminal(),
                Mode::Headless => GameConfig::default(),
            },
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the renderer, so log to a file
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("starting with {:?}", config);

    let session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed)?,
        None => Session::new(config)?,
    };

    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(session);
            play_mode.run().await?;
        }
        Mode::Headless => {
            let script = HeadlessMode::parse_script(&cli.moves).context("Invalid --moves")?;
            let mut headless_mode = HeadlessMode::new(session, script, cli.max_ticks);
            let report = headless_mode.run();
            println!(
                "{:?} after {} ticks: length {}, food eaten {}, collision {:?}",
                report.state, report.ticks, report.length, report.food_eaten, report.collision
            );
        }
    }

    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use torus_snake::config::AppConfig;
use torus_snake::game::GameConfig;
use torus_snake::logging;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// Board preset (ignored for sides given by --width/--height)
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Grid width
    #[arg(long)]
    width: Option<i32>,

    /// Grid height
    #[arg(long)]
    height: Option<i32>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" (defaults to RUST_LOG, then "info")
    #[arg(long, requires = "log_file")]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 3x3 board
    Tiny,
    /// 4x4 board
    Small,
    /// 10x10 board
    Classic,
}

impl Preset {
    fn game_config(self) -> GameConfig {
        match self {
            Preset::Tiny => GameConfig::tiny(),
            Preset::Small => GameConfig::small(),
            Preset::Classic => GameConfig::classic(),
        }
    }
}

impl Cli {
    /// File settings first, then command line overrides
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(preset) = self.preset {
            let game = preset.game_config();
            config.game.grid_width = game.grid_width;
            config.game.grid_height = game.grid_height;
        }
        if let Some(width) = self.width {
            config.game.grid_width = width;
        }
        if let Some(height) = self.height {
            config.game.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }

        if let Err(e) = config.validate() {
            bail!("Invalid settings: {}", e);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level.as_deref())?;
    }

    let config = cli.app_config()?;
    tracing::info!(?config, "settings loaded");

    if let Some(path) = &cli.save_config {
        config
            .save(path)
            .with_context(|| format!("Failed to save settings to {:?}", path))?;
        println!("Settings written to {}", path.display());
        return Ok(());
    }

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}

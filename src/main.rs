use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::File;

use gridsnek::app::App;
use gridsnek::config::Cli;
use gridsnek::score::{FileScoreStore, MemoryScoreStore, ScoreStore};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else; stdout belongs to the game
    let level = LevelFilter::from(cli.log_level);
    if level != LevelFilter::Off {
        let file = File::create(&cli.log_file)
            .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
        WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    }

    info!("Starting gridsnek with {:?}", cli);

    let store: Box<dyn ScoreStore> = if cli.no_persist {
        Box::new(MemoryScoreStore::default())
    } else {
        Box::new(FileScoreStore::new(&cli.best_score_file))
    };

    let mut app = App::new(cli.grid(), store, cli.tick_interval(), cli.min_swipe);
    app.run()?;

    info!("Shutting down");
    Ok(())
}

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

use crate::game::geometry::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::game::Grid;
use crate::score::DEFAULT_BEST_SCORE_FILE;

#[derive(Debug, Parser)]
#[command(name = "gridsnek")]
#[command(version, about = "Grid snake in your terminal")]
pub struct Cli {
    /// Playfield width in cells
    #[arg(
        long,
        default_value_t = DEFAULT_COLS,
        value_parser = clap::value_parser!(u16).range(2..=200)
    )]
    pub cols: u16,

    /// Playfield height in cells
    #[arg(
        long,
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u16).range(2..=200)
    )]
    pub rows: u16,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,

    /// File holding the best score between sessions
    #[arg(long, default_value = DEFAULT_BEST_SCORE_FILE)]
    pub best_score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Shortest mouse swipe, in terminal cells, that counts as a turn
    #[arg(long, default_value_t = 1)]
    pub min_swipe: u16,

    /// Where to write the log (the terminal is busy drawing the game)
    #[arg(long, default_value = "gridsnek.log")]
    pub log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn grid(&self) -> Grid {
        Grid::new(self.cols, self.rows)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gridsnek"]);

        assert_eq!(cli.grid(), Grid::default());
        assert_eq!(cli.tick_interval(), Duration::from_millis(100));
        assert_eq!(cli.best_score_file, PathBuf::from(DEFAULT_BEST_SCORE_FILE));
        assert!(!cli.no_persist);
        assert_eq!(cli.min_swipe, 1);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_custom_grid() {
        let cli = Cli::parse_from([
            "gridsnek", "--cols", "30", "--rows", "15", "--tick-ms", "80",
        ]);

        assert_eq!(cli.grid(), Grid::new(30, 15));
        assert_eq!(cli.tick_interval(), Duration::from_millis(80));
    }

    #[test]
    fn test_tiny_grid_is_rejected() {
        assert!(Cli::try_parse_from(["gridsnek", "--cols", "1"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["gridsnek", "--log-level", "debug", "--no-persist"]);

        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
        assert!(cli.no_persist);
    }
}

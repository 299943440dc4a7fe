//! Durable storage for the best score.
//!
//! The slot holds a single integer written as text. A missing or garbled
//! slot reads back as zero.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_BEST_SCORE_FILE: &str = ".gridsnek_best_score";

/// Where the best score lives between sessions
pub trait ScoreStore {
    /// Read the stored best score, falling back to 0
    fn load(&self) -> u32;

    /// Overwrite the stored best score
    fn save(&mut self, best_score: u32) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        (**self).save(best_score)
    }
}

/// Best score kept in a small text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => {
                    info!("Loaded best score {} from {}", score, self.path.display());
                    score
                }
                Err(e) => {
                    warn!("Ignoring malformed best score in {}: {}", self.path.display(), e);
                    0
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No best score at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                warn!("Error loading best score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        fs::write(&self.path, best_score.to_string())
            .with_context(|| format!("Failed to write best score to {}", self.path.display()))
    }
}

/// Best score that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best_score: u32,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new(best_score: u32) -> Self {
        Self {
            best_score,
            writes: 0,
        }
    }

    /// Number of successful `save` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best_score
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        self.best_score = best_score;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileScoreStore::new(temp_dir.path().join("best"));

        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("best");
        let mut store = FileScoreStore::new(&path);

        store.save(230).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "230");
        assert_eq!(FileScoreStore::new(&path).load(), 230);
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("best");
        fs::write(&path, "lots").unwrap();

        assert_eq!(FileScoreStore::new(&path).load(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("best");
        fs::write(&path, " 40\n").unwrap();

        assert_eq!(FileScoreStore::new(&path).load(), 40);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileScoreStore::new(temp_dir.path().join("nope").join("best"));

        assert!(store.save(10).is_err());
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryScoreStore::new(5);
        assert_eq!(store.load(), 5);

        store.save(20).unwrap();
        assert_eq!(store.load(), 20);
        assert_eq!(store.writes(), 1);
    }
}

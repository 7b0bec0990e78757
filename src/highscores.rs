//! High score leaderboard
//!
//! Persisted as JSON in the platform data directory, tracks top 10 scores.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Unix timestamp (seconds) when achieved
    pub timestamp: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, level: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Copy of the leaderboard with an in-progress run folded in.
    ///
    /// Used for mid-run persistence: the provisional entry goes to disk
    /// without touching the live board, which gets the final entry once the
    /// run ends.
    pub fn with_run(&self, score: u64, level: u32, timestamp: u64) -> HighScores {
        let mut snapshot = self.clone();
        snapshot.add_score(score, level, timestamp);
        snapshot
    }

    /// Leaderboard file path under the platform data directory
    fn storage_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("starfall").join("highscores.json"))
    }

    /// Load high scores from disk. A missing or unreadable file yields an
    /// empty leaderboard rather than an error.
    pub fn load() -> Self {
        let Some(path) = Self::storage_path() else {
            log::warn!("no data directory, high scores disabled");
            return Self::new();
        };

        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("Corrupt high score file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save high scores to disk. Failures are logged and swallowed; losing
    /// a leaderboard write never takes the game down.
    pub fn save(&self) {
        let Some(path) = Self::storage_path() else {
            return;
        };

        let result = path
            .parent()
            .map(fs::create_dir_all)
            .unwrap_or(Ok(()))
            .and_then(|_| {
                let json = serde_json::to_string_pretty(self)?;
                fs::write(&path, json)
            });

        match result {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(err) => log::warn!("Failed to save high scores: {err}"),
        }
    }
}

/// Watermark of the best score already written to disk.
///
/// Drives the save cadence: a running score is persisted the moment it
/// exceeds everything saved so far, so a crash mid-run cannot lose a new
/// best.
#[derive(Debug)]
pub struct PersistedBest(u64);

impl PersistedBest {
    pub fn new(scores: &HighScores) -> Self {
        Self(scores.top_score().unwrap_or(0))
    }

    /// True when `score` beats the watermark; advances it so each new best
    /// triggers exactly once.
    pub fn advance(&mut self, score: u64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

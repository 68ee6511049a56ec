//! High score leaderboard
//!
//! Persisted to LocalStorage, tracks the top 10 finished runs.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;
use crate::storage;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u64,
    /// Seconds of play before the last life was lost
    pub time_survived: f32,
    /// Fish caught during the run
    pub fish_collected: u32,
    /// Highest golden × frenzy multiplier reached
    pub best_multiplier: u64,
}

impl HighScoreEntry {
    /// Summarize a finished run
    pub fn from_run(state: &GameState) -> Self {
        Self {
            score: state.progression.score,
            time_survived: state.elapsed,
            fish_collected: state.stats.fish_collected,
            best_multiplier: state.stats.best_multiplier,
        }
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    const STORAGE_KEY: &'static str = "fish_frenzy_highscores";

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
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a finished run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| entry.score > e.score);
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

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Stored leaderboard, or an empty one
    pub fn load() -> Self {
        match storage::load::<HighScores>(Self::STORAGE_KEY) {
            Some(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            None => Self::new(),
        }
    }

    pub fn save(&self) {
        if storage::save(Self::STORAGE_KEY, self) {
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry {
            score,
            time_survived: 30.0,
            fish_collected: 10,
            best_multiplier: 1,
        }
    }

    #[test]
    fn test_ranked_insert() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add(entry(100)), Some(1));
        assert_eq!(scores.add(entry(300)), Some(1));
        assert_eq!(scores.add(entry(200)), Some(2));
        assert_eq!(scores.top_score(), Some(300));
        assert_eq!(scores.add(entry(0)), None);
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut scores = HighScores::new();
        for s in 1..=12 {
            scores.add(entry(s * 10));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(30));
        assert!(!scores.qualifies(30));
        assert!(scores.qualifies(31));
    }
}

//! Progress and result types reported by the search driver.

use serde::{Deserialize, Serialize};

use super::Board;

/// Snapshot of search progress, emitted after every batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress {
    /// Batches completed so far.
    pub batches: u64,
    /// Mutations proposed so far.
    pub iterations: u64,
    /// Mutations that became the current state.
    pub accepted: u64,
    /// Mutations that raised the best score.
    pub improvements: u64,
    /// Score of the current state.
    pub current_score: i64,
    /// Best score seen so far.
    pub best_score: i64,
    /// Annealing temperature, if annealing.
    pub temperature: Option<f64>,
    /// Fraction of the time budget used (0.0-1.0).
    pub progress: f64,
}

/// Statistics from a search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Score of the starting board.
    pub initial_score: i64,
    /// Best score achieved.
    pub best_score: i64,
    /// Total mutations proposed.
    pub iterations: u64,
    /// Mutations accepted as the current state.
    pub accepted: u64,
    /// Mutations that raised the best score.
    pub improvements: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Mutations evaluated per second.
    pub iterations_per_second: f64,
}

/// Final output of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best board found.
    pub board: Board,
    pub stats: SearchStats,
}

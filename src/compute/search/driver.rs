//! Time-bounded local search over single-cell board edits.

use std::time::Instant;

use crate::compute::Engine;
use crate::schema::{
    Board, SearchAlgorithm, SearchConfig, SearchProgress, SearchResult, SearchStats,
};

use super::mutation::MutationRng;
use super::schedule::{Deadline, linear_temperature};

/// Search driver that owns the current engine and the best board seen.
pub struct SearchDriver {
    config: SearchConfig,
    rng: MutationRng,
    current: Engine,
    best_board: Board,
    best_score: i64,
    initial_score: i64,
    batches: u64,
    iterations: u64,
    accepted: u64,
    improvements: u64,
}

impl SearchDriver {
    /// Create a driver starting from a fully evaluated engine.
    pub fn new(config: SearchConfig, engine: Engine) -> Self {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        log::info!("search seed: {seed}");

        Self {
            config,
            rng: MutationRng::new(seed),
            best_board: engine.board().clone(),
            best_score: engine.score(),
            initial_score: engine.score(),
            current: engine,
            batches: 0,
            iterations: 0,
            accepted: 0,
            improvements: 0,
        }
    }

    /// Replace the random number generator.
    pub fn with_rng(mut self, rng: MutationRng) -> Self {
        self.rng = rng;
        self
    }

    /// Current working state.
    pub fn current(&self) -> &Engine {
        &self.current
    }

    pub fn best_board(&self) -> &Board {
        &self.best_board
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    /// Temperature at a point of the schedule; `None` for hill climbing.
    pub fn temperature(&self, progress: f64) -> Option<f64> {
        match self.config.algorithm {
            SearchAlgorithm::HillClimbing => None,
            SearchAlgorithm::SimulatedAnnealing {
                start_temperature,
                end_temperature,
            } => Some(linear_temperature(
                start_temperature,
                end_temperature,
                progress,
            )),
        }
    }

    /// Run one batch of mutation attempts at the given schedule position.
    pub fn step_batch(&mut self, progress: f64) -> SearchProgress {
        let temperature = self.temperature(progress);
        for _ in 0..self.config.batch_size {
            self.step(temperature);
        }
        self.batches += 1;

        SearchProgress {
            batches: self.batches,
            iterations: self.iterations,
            accepted: self.accepted,
            improvements: self.improvements,
            current_score: self.current.score(),
            best_score: self.best_score,
            temperature,
            progress,
        }
    }

    /// Propose, evaluate and accept or reject a single mutation.
    fn step(&mut self, temperature: Option<f64>) {
        let mutation = self
            .rng
            .propose(self.current.board(), &self.config.panel_weights);
        let candidate = self.current.with_mutation(mutation);
        self.iterations += 1;

        let accept = match temperature {
            None => candidate.score() > self.best_score,
            Some(t) => {
                let delta = candidate.score() - self.current.score();
                delta > 0 || self.rng.chance((delta as f64 / t).exp())
            }
        };
        if !accept {
            return;
        }

        log::trace!(
            "accepted {:?} at {}: score {} -> {}",
            mutation.panel,
            mutation.cell,
            self.current.score(),
            candidate.score()
        );
        self.current = candidate;
        self.accepted += 1;

        if self.current.score() > self.best_score {
            self.best_score = self.current.score();
            self.best_board = self.current.board().clone();
            self.improvements += 1;
            log::debug!(
                "new best score {} after {} iterations",
                self.best_score,
                self.iterations
            );
        }
    }

    /// Run until the time budget is spent, reporting progress after every batch.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> SearchResult
    where
        F: FnMut(&SearchProgress),
    {
        let deadline = Deadline::starting_now(self.config.time_budget());
        log::info!(
            "starting {:?} search: initial score {}, budget {} ms",
            self.config.algorithm,
            self.best_score,
            self.config.time_budget_ms
        );

        loop {
            let now = Instant::now();
            if deadline.has_expired(now) {
                break;
            }
            let progress = self.step_batch(deadline.progress(now));
            callback(&progress);
        }

        let elapsed = deadline.elapsed(Instant::now()).as_secs_f64();
        let stats = SearchStats {
            initial_score: self.initial_score,
            best_score: self.best_score,
            iterations: self.iterations,
            accepted: self.accepted,
            improvements: self.improvements,
            elapsed_seconds: elapsed,
            iterations_per_second: if elapsed > 0.0 {
                self.iterations as f64 / elapsed
            } else {
                0.0
            },
        };

        log::info!(
            "search finished: best score {} ({} iterations, {} accepted, {:.3}s)",
            stats.best_score,
            stats.iterations,
            stats.accepted,
            stats.elapsed_seconds
        );

        SearchResult {
            board: self.best_board.clone(),
            stats,
        }
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> SearchResult {
        self.run_with_callback(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::prelude::*;

    use super::*;
    use crate::schema::{Program, RewardTable};

    fn engine(programs: &[&str]) -> Engine {
        let programs: Arc<[Program]> = programs.iter().map(|p| p.parse().unwrap()).collect();
        Engine::new(Board::new(9), programs, RewardTable::default())
    }

    /// Seeded random programs of forty instructions.
    fn random_engine(robots: usize) -> Engine {
        let mut rng = StdRng::seed_from_u64(5);
        let programs: Vec<String> = (0..robots)
            .map(|_| (0..40).map(|_| ['S', 'S', 'L', 'R'][rng.gen_range(0..4)]).collect())
            .collect();
        let refs: Vec<&str> = programs.iter().map(String::as_str).collect();
        engine(&refs)
    }

    fn config(algorithm: SearchAlgorithm) -> SearchConfig {
        SearchConfig {
            time_budget_ms: 30,
            batch_size: 20,
            algorithm,
            random_seed: Some(2463534242),
            ..Default::default()
        }
    }

    #[test]
    fn test_hill_climbing_best_is_monotone() {
        // Both robots end one cell left of the center; a force panel on the
        // center splits them.
        let mut driver = SearchDriver::new(
            SearchConfig {
                batch_size: 100,
                ..config(SearchAlgorithm::HillClimbing)
            },
            engine(&["LS", "RRRS"]),
        );
        let initial = driver.best_score();
        assert_eq!(initial, 3);

        let mut last = initial;
        for _ in 0..50 {
            let progress = driver.step_batch(0.0);
            assert!(progress.best_score >= last);
            assert_eq!(progress.current_score, progress.best_score);
            assert_eq!(progress.temperature, None);
            last = progress.best_score;
        }
        assert_eq!(driver.best_score(), 20);
    }

    #[test]
    fn test_best_board_matches_best_score() {
        let mut driver = SearchDriver::new(
            config(SearchAlgorithm::annealing()),
            random_engine(16),
        );
        for i in 0..40 {
            driver.step_batch(i as f64 / 40.0);
        }

        let engine = driver.current();
        let rescored = Engine::new(
            driver.best_board().clone(),
            Arc::clone(engine.programs()),
            *engine.rewards(),
        );
        assert_eq!(rescored.score(), driver.best_score());
        assert!(driver.best_score() >= driver.current().score());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let driver = || {
            SearchDriver::new(config(SearchAlgorithm::annealing()), random_engine(12))
                .with_rng(MutationRng::new(11))
        };
        let mut a = driver();
        let mut b = driver();
        for i in 0..20 {
            let progress = i as f64 / 20.0;
            assert_eq!(a.step_batch(progress), b.step_batch(progress));
        }
        assert_eq!(a.best_board(), b.best_board());
    }

    #[test]
    fn test_annealing_temperature_schedule() {
        let driver = SearchDriver::new(
            config(SearchAlgorithm::SimulatedAnnealing {
                start_temperature: 10.0,
                end_temperature: 2.0,
            }),
            random_engine(4),
        );
        assert_eq!(driver.temperature(0.0), Some(10.0));
        assert_eq!(driver.temperature(0.5), Some(6.0));
        assert_eq!(driver.temperature(1.0), Some(2.0));
    }

    /// Drive single-proposal batches at a fixed temperature and count how
    /// often the current score went down.
    fn downhill_moves(temperature: f64, steps: usize) -> usize {
        let mut driver = SearchDriver::new(
            SearchConfig {
                batch_size: 1,
                ..config(SearchAlgorithm::SimulatedAnnealing {
                    start_temperature: temperature,
                    end_temperature: temperature,
                })
            },
            random_engine(16),
        );

        let mut previous = driver.current().score();
        let mut downhill = 0;
        for _ in 0..steps {
            let progress = driver.step_batch(0.0);
            assert!(progress.best_score >= progress.current_score);
            if progress.current_score < previous {
                downhill += 1;
            }
            previous = progress.current_score;
        }
        downhill
    }

    #[test]
    fn test_hot_annealing_accepts_worse_candidates() {
        assert!(downhill_moves(1000.0, 400) > 0);
    }

    #[test]
    fn test_cold_annealing_rejects_worse_candidates() {
        // Score deltas are whole numbers, so exp(-1 / 0.001) is zero.
        assert_eq!(downhill_moves(0.001, 400), 0);
    }

    #[test]
    fn test_run_respects_time_budget() {
        let mut driver = SearchDriver::new(
            config(SearchAlgorithm::HillClimbing),
            random_engine(8),
        );
        let mut reports = 0;
        let result = driver.run_with_callback(|_| reports += 1);

        assert!(reports > 0);
        assert!(result.stats.iterations > 0);
        assert!(result.stats.elapsed_seconds >= 0.03);
        assert!(result.stats.best_score >= result.stats.initial_score);
        assert_eq!(result.board.side(), 9);
    }

    #[test]
    fn test_zero_budget_returns_initial_board() {
        let engine = random_engine(8);
        let initial_board = engine.board().clone();
        let mut driver = SearchDriver::new(
            SearchConfig {
                time_budget_ms: 0,
                ..config(SearchAlgorithm::HillClimbing)
            },
            engine,
        );
        let result = driver.run();
        assert_eq!(result.stats.iterations, 0);
        assert_eq!(result.board, initial_board);
        assert_eq!(result.stats.best_score, result.stats.initial_score);
    }
}

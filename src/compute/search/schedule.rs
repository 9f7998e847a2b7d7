//! Wall-clock deadline and annealing temperature schedule.

use std::time::{Duration, Instant};

/// Fixed time budget measured from a start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(start: Instant, budget: Duration) -> Self {
        Self { start, budget }
    }

    /// Deadline whose budget starts counting now.
    pub fn starting_now(budget: Duration) -> Self {
        Self::new(Instant::now(), budget)
    }

    #[inline]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    #[inline]
    pub fn has_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.budget
    }

    /// Fraction of the budget used at `now`, clamped to 0.0-1.0.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.budget.is_zero() {
            return 1.0;
        }
        (self.elapsed(now).as_secs_f64() / self.budget.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Linear interpolation from `start` to `end` over `progress` in 0.0-1.0.
#[inline]
pub fn linear_temperature(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress.clamp(0.0, 1.0)
}

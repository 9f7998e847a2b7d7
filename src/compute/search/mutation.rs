//! Random mutation proposals.

use rand::prelude::*;

use crate::compute::Mutation;
use crate::schema::{Board, PanelKind, PanelWeights, Position};

/// Random number generator wrapper for search moves.
pub struct MutationRng {
    rng: StdRng,
}

impl MutationRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Propose a single-cell edit: a uniform random cell and a weighted
    /// random panel different from the one currently there.
    ///
    /// If no other panel has a positive weight the proposal keeps the
    /// current panel, which evaluates as a no-op.
    pub fn propose(&mut self, board: &Board, weights: &PanelWeights) -> Mutation {
        let side = board.side() as i32;
        let cell = Position::new(self.rng.gen_range(0..side), self.rng.gen_range(0..side));
        let current = board.get(cell).unwrap_or_default();

        let candidates = PanelKind::ALL.into_iter().filter(|&p| p != current);
        let total: u32 = candidates.clone().map(|p| weights.weight(p)).sum();
        if total == 0 {
            return Mutation {
                cell,
                panel: current,
            };
        }

        let mut target = self.rng.gen_range(0..total);
        let mut panel = current;
        for candidate in candidates {
            let weight = weights.weight(candidate);
            if target < weight {
                panel = candidate;
                break;
            }
            target -= weight;
        }

        Mutation { cell, panel }
    }

    /// Bernoulli trial with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.r#gen::<f64>() < p
    }
}

//! Board evaluation engine with incremental re-scoring.
//!
//! An [`Engine`] owns a board together with every robot's trace and the
//! resulting score. Single-cell edits never modify an engine in place:
//! [`Engine::with_mutation`] builds a new engine that shares the traces of
//! robots that never read the edited cell and re-simulates the others from
//! their first contact with it.

use std::sync::Arc;

use crate::schema::{Board, PanelKind, Position, Program, RewardTable};

use super::scorer::{Occupancy, score};
use super::simulator::{self, RobotState, Trace};

/// Replace the panel at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mutation {
    pub cell: Position,
    pub panel: PanelKind,
}

/// Evaluated board state.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    programs: Arc<[Program]>,
    rewards: RewardTable,
    traces: Vec<Arc<Trace>>,
    occupancy: Occupancy,
    score: i64,
    resimulated: usize,
}

impl Engine {
    /// Full evaluation: simulate every program on `board`.
    pub fn new(board: Board, programs: Arc<[Program]>, rewards: RewardTable) -> Self {
        let traces: Vec<Arc<Trace>> = programs
            .iter()
            .map(|program| Arc::new(simulator::simulate(&board, program)))
            .collect();

        let occupancy =
            Occupancy::from_positions(&board, traces.iter().map(|t| t.final_state().position));
        let score = score(&occupancy, &rewards);

        log::debug!(
            "full evaluation: {} robots on {}x{} board, score {}",
            traces.len(),
            board.side(),
            board.side(),
            score
        );

        Self {
            resimulated: traces.len(),
            board,
            programs,
            rewards,
            traces,
            occupancy,
            score,
        }
    }

    /// Incremental evaluation of a single-cell edit.
    ///
    /// Returns a new engine; `self` is left untouched. Edits that fall off
    /// the board or keep the current panel yield an identical engine.
    pub fn with_mutation(&self, mutation: Mutation) -> Self {
        let Mutation { cell, panel } = mutation;
        if self.board.get(cell).is_none_or(|current| current == panel) {
            return Self {
                resimulated: 0,
                ..self.clone()
            };
        }

        let mut board = self.board.clone();
        board.set(cell, panel);

        let mut traces = self.traces.clone();
        let mut occupancy = self.occupancy.clone();
        let mut resimulated = 0;

        for (i, (program, prior)) in self.programs.iter().zip(&self.traces).enumerate() {
            let Some(from) = simulator::first_contact(&self.board, program, prior, cell) else {
                continue;
            };

            let updated = simulator::resume(&board, program, prior, from);
            occupancy.remove(prior.final_state().position);
            occupancy.add(updated.final_state().position);
            traces[i] = Arc::new(updated);
            resimulated += 1;
        }

        let score = score(&occupancy, &self.rewards);

        Self {
            board,
            programs: Arc::clone(&self.programs),
            rewards: self.rewards,
            traces,
            occupancy,
            score,
            resimulated,
        }
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn programs(&self) -> &Arc<[Program]> {
        &self.programs
    }

    #[inline]
    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    pub fn traces(&self) -> impl ExactSizeIterator<Item = &Trace> + '_ {
        self.traces.iter().map(|t| t.as_ref())
    }

    /// Final state of every robot, in program order.
    pub fn final_states(&self) -> impl ExactSizeIterator<Item = RobotState> + '_ {
        self.traces.iter().map(|t| t.final_state())
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Robots simulated to build this engine: all of them after a full
    /// evaluation, only the affected ones after an incremental one.
    #[inline]
    pub fn resimulated(&self) -> usize {
        self.resimulated
    }
}

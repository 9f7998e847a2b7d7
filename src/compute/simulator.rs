//! Deterministic robot trajectory simulation.
//!
//! A robot only ever observes the board through the panels it reads: the
//! panel under it before every instruction, and each cell probed while
//! advancing (including the wall or edge that stops it). [`step`] reports
//! every such read so traces can record a footprint, which is what makes
//! partial re-simulation after a single-cell edit exact.

use crate::schema::{Board, CellSet, Direction, Instruction, Position, Program, turn_delta};

/// Position and facing of a robot between two instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RobotState {
    pub position: Position,
    pub direction: Direction,
}

impl RobotState {
    /// Starting state: board center, facing up.
    pub fn start(board: &Board) -> Self {
        Self {
            position: board.center(),
            direction: Direction::Up,
        }
    }
}

/// Full step trace of one robot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// `states[i]` is the state before instruction `i`; the last entry is final.
    states: Vec<RobotState>,
    /// Cells whose panel was read while producing the trace.
    footprint: CellSet,
}

impl Trace {
    #[inline]
    pub fn states(&self) -> &[RobotState] {
        &self.states
    }

    #[inline]
    pub fn final_state(&self) -> RobotState {
        // A trace always holds at least the starting state.
        self.states[self.states.len() - 1]
    }

    #[inline]
    pub fn footprint(&self) -> &CellSet {
        &self.footprint
    }
}

/// Apply one instruction, calling `on_read` for every in-board cell whose
/// panel is consulted.
pub fn step<F>(
    board: &Board,
    state: RobotState,
    instruction: Instruction,
    mut on_read: F,
) -> RobotState
where
    F: FnMut(Position),
{
    let panel = board.get(state.position).unwrap_or_default();
    on_read(state.position);

    if let Some(delta) = turn_delta(instruction, panel) {
        return RobotState {
            direction: state.direction.rotate(delta),
            ..state
        };
    }

    let offset = state.direction.offset();
    let mut position = state.position;
    for _ in 0..panel.step_count() {
        let next = position.offset(offset);
        let Some(next_panel) = board.get(next) else {
            break;
        };
        on_read(next);
        if next_panel.blocks() {
            break;
        }
        position = next;
    }

    RobotState { position, ..state }
}

/// Simulate a program from the starting state.
pub fn simulate(board: &Board, program: &Program) -> Trace {
    let mut states = Vec::with_capacity(program.len() + 1);
    states.push(RobotState::start(board));
    let mut footprint = CellSet::with_capacity(board.len());

    run_from(board, program.instructions(), &mut states, &mut footprint);
    Trace { states, footprint }
}

/// Re-simulate `prior` from instruction `from` on a new board.
///
/// `prior.states[..=from]` is kept as is, so instructions before `from` must
/// not have read any cell that differs between the two boards. Use
/// [`first_contact`] to find a valid `from`.
pub fn resume(board: &Board, program: &Program, prior: &Trace, from: usize) -> Trace {
    let instructions = program.instructions();
    let mut states = Vec::with_capacity(instructions.len() + 1);
    states.extend_from_slice(&prior.states[..=from]);
    let mut footprint = CellSet::with_capacity(board.len());

    // The prefix is unchanged, but its reads still belong to the footprint.
    for (i, &instruction) in instructions[..from].iter().enumerate() {
        let next = step(board, states[i], instruction, |p| {
            mark(&mut footprint, board, p)
        });
        debug_assert_eq!(next, states[i + 1], "prefix diverged before instruction {from}");
    }

    run_from(board, &instructions[from..], &mut states, &mut footprint);
    Trace { states, footprint }
}

/// First instruction index whose execution reads `cell`, replayed on the
/// board that produced `trace`.
pub fn first_contact(
    board: &Board,
    program: &Program,
    trace: &Trace,
    cell: Position,
) -> Option<usize> {
    let index = board.index_of(cell)?;
    if !trace.footprint.contains(index) {
        return None;
    }

    program
        .instructions()
        .iter()
        .zip(&trace.states)
        .position(|(&instruction, &state)| {
            let mut hit = false;
            step(board, state, instruction, |p| hit |= p == cell);
            hit
        })
}

fn run_from(
    board: &Board,
    instructions: &[Instruction],
    states: &mut Vec<RobotState>,
    footprint: &mut CellSet,
) {
    let Some(&start) = states.last() else {
        return;
    };
    let mut state = start;
    for &instruction in instructions {
        state = step(board, state, instruction, |p| mark(footprint, board, p));
        states.push(state);
    }
}

#[inline]
fn mark(footprint: &mut CellSet, board: &Board, position: Position) {
    if let Some(i) = board.index_of(position) {
        footprint.insert(i);
    }
}

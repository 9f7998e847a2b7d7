//! Robot programs and problem input parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Border, Instruction};

/// Fixed instruction sequence executed by one robot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl FromStr for Program {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(column, symbol)| {
                Instruction::from_symbol(symbol).ok_or(InstructionError { column, symbol })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Unknown character in a single program line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown instruction {symbol:?} at column {column}")]
pub struct InstructionError {
    pub column: usize,
    pub symbol: char,
}

/// A complete problem instance: grid size and one program per robot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Grid dimension M, including the wall frame when one is used.
    pub grid_size: usize,
    /// Length L shared by every program.
    pub program_length: usize,
    /// One program per robot (N entries).
    pub programs: Vec<Program>,
}

impl Problem {
    /// Parse the whitespace-separated `N M L` header followed by N programs.
    pub fn parse(input: &str) -> Result<Self, ProblemError> {
        let mut tokens = input.split_whitespace();

        let mut header = |name: &'static str| -> Result<usize, ProblemError> {
            let token = tokens.next().ok_or(ProblemError::MissingHeader(name))?;
            let value: usize = token.parse().map_err(|_| ProblemError::InvalidNumber {
                name,
                value: token.to_string(),
            })?;
            if value == 0 {
                return Err(ProblemError::ZeroCount(name));
            }
            Ok(value)
        };

        let agent_count = header("agent count")?;
        let grid_size = header("grid size")?;
        let program_length = header("program length")?;

        let mut programs = Vec::with_capacity(agent_count);
        for agent in 0..agent_count {
            let line = tokens.next().ok_or(ProblemError::MissingPrograms {
                expected: agent_count,
                found: agent,
            })?;

            let program: Program = line.parse().map_err(
                |InstructionError { column, symbol }| ProblemError::UnknownInstruction {
                    agent,
                    column,
                    symbol,
                },
            )?;

            if program.len() != program_length {
                return Err(ProblemError::ProgramLength {
                    agent,
                    expected: program_length,
                    found: program.len(),
                });
            }
            programs.push(program);
        }

        if let Some(extra) = tokens.next() {
            return Err(ProblemError::TrailingInput(extra.to_string()));
        }

        Ok(Self {
            grid_size,
            program_length,
            programs,
        })
    }

    /// Number of robots.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.programs.len()
    }

    /// Side of the searchable board for the given border style.
    pub fn board_side(&self, border: Border) -> Result<usize, ProblemError> {
        match border {
            Border::Open => Ok(self.grid_size),
            Border::Framed if self.grid_size >= 3 => Ok(self.grid_size - 2),
            Border::Framed => Err(ProblemError::GridTooSmall(self.grid_size)),
        }
    }
}

/// Problem input errors.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    #[error("Missing {0} in header")]
    MissingHeader(&'static str),
    #[error("Invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("The {0} must be non-zero")]
    ZeroCount(&'static str),
    #[error("Expected {expected} programs, found {found}")]
    MissingPrograms { expected: usize, found: usize },
    #[error("Program {agent} has length {found}, expected {expected}")]
    ProgramLength {
        agent: usize,
        expected: usize,
        found: usize,
    },
    #[error("Program {agent} has unknown instruction {symbol:?} at column {column}")]
    UnknownInstruction {
        agent: usize,
        column: usize,
        symbol: char,
    },
    #[error("Unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error("Grid size {0} is too small for a wall frame")]
    GridTooSmall(usize),
}

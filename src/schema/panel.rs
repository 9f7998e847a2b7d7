//! Panel kinds, instructions and the turn lookup table.
//!
//! A panel changes how a robot standing on it interprets its next
//! instruction. Panel kinds and turn deltas are kept as separate enums and
//! joined only through [`turn_delta`].

use serde::{Deserialize, Serialize};

/// Behavior-modifying panel placed on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelKind {
    /// No modifier.
    #[default]
    Empty,
    /// Blocks movement into the cell.
    Wall,
    /// Advance moves two cells; turns rotate 180 degrees.
    DoubleSpeed,
    /// Advance moves three cells; turns rotate 270 degrees.
    TripleSpeed,
    /// Every turn rotates clockwise.
    ForceRight,
    /// Every turn rotates counter-clockwise.
    ForceLeft,
}

impl PanelKind {
    /// All panel kinds, in symbol order.
    pub const ALL: [PanelKind; 6] = [
        PanelKind::Empty,
        PanelKind::Wall,
        PanelKind::DoubleSpeed,
        PanelKind::TripleSpeed,
        PanelKind::ForceRight,
        PanelKind::ForceLeft,
    ];

    /// Character used in board output.
    pub fn symbol(self) -> char {
        match self {
            PanelKind::Empty => '.',
            PanelKind::Wall => '#',
            PanelKind::DoubleSpeed => 'D',
            PanelKind::TripleSpeed => 'T',
            PanelKind::ForceRight => 'R',
            PanelKind::ForceLeft => 'L',
        }
    }

    /// Parse a panel from its board character.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.symbol() == c)
    }

    /// Number of unit steps an advance performs when started on this panel.
    #[inline]
    pub fn step_count(self) -> usize {
        match self {
            PanelKind::DoubleSpeed => 2,
            PanelKind::TripleSpeed => 3,
            _ => 1,
        }
    }

    #[inline]
    pub fn blocks(self) -> bool {
        self == PanelKind::Wall
    }
}

/// A single robot instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    Advance,
    TurnLeft,
    TurnRight,
}

impl Instruction {
    /// Parse from the input alphabet (`S`, `L`, `R`).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'S' => Some(Instruction::Advance),
            'L' => Some(Instruction::TurnLeft),
            'R' => Some(Instruction::TurnRight),
            _ => None,
        }
    }
}

/// Rotation actually applied by a turn instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDelta {
    Left,
    Right,
    HalfLeft,
    HalfRight,
    ThreeQuarterLeft,
    ThreeQuarterRight,
}

impl TurnDelta {
    /// Signed number of clockwise quarter turns.
    #[inline]
    pub fn quarter_turns(self) -> i8 {
        match self {
            TurnDelta::Left => -1,
            TurnDelta::Right => 1,
            TurnDelta::HalfLeft => -2,
            TurnDelta::HalfRight => 2,
            TurnDelta::ThreeQuarterLeft => -3,
            TurnDelta::ThreeQuarterRight => 3,
        }
    }
}

/// Turn lookup table keyed by (instruction, panel under the robot).
///
/// Returns `None` for [`Instruction::Advance`].
pub fn turn_delta(instruction: Instruction, panel: PanelKind) -> Option<TurnDelta> {
    use PanelKind::*;
    use TurnDelta::*;

    let delta = match (instruction, panel) {
        (Instruction::Advance, _) => return None,
        (Instruction::TurnLeft, DoubleSpeed) => HalfLeft,
        (Instruction::TurnLeft, TripleSpeed) => ThreeQuarterLeft,
        (Instruction::TurnLeft, ForceRight) => Right,
        (Instruction::TurnLeft, Empty | Wall | ForceLeft) => Left,
        (Instruction::TurnRight, DoubleSpeed) => HalfRight,
        (Instruction::TurnRight, TripleSpeed) => ThreeQuarterRight,
        (Instruction::TurnRight, ForceLeft) => Left,
        (Instruction::TurnRight, Empty | Wall | ForceRight) => Right,
    };
    Some(delta)
}

/// Cardinal facing of a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit offset (dx, dy) with y growing downwards.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rotate by a turn delta, clockwise positive.
    #[inline]
    pub fn rotate(self, delta: TurnDelta) -> Self {
        let idx = (self.index() as i8 + delta.quarter_turns()).rem_euclid(4);
        Self::ORDER[idx as usize]
    }
}

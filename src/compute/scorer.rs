//! Occupancy-based scoring of final robot positions.

use crate::schema::{Board, Position, RewardTable};

impl RewardTable {
    /// Reward for a cell on which `count` robots finished.
    #[inline]
    pub fn reward(&self, count: u32) -> i64 {
        match count {
            1 => self.single,
            2 => self.pair,
            3 => self.triple,
            _ => 0,
        }
    }
}

/// Number of robots finishing on each cell of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    side: usize,
    counts: Vec<u32>,
}

impl Occupancy {
    /// Empty occupancy for a board of the given side.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            counts: vec![0; side * side],
        }
    }

    /// Occupancy of a set of final positions on `board`.
    pub fn from_positions<I>(board: &Board, positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut occupancy = Self::new(board.side());
        for position in positions {
            occupancy.add(position);
        }
        occupancy
    }

    /// Flat index of an on-board position. Off-board positions, which only
    /// occur on a zero-sized board, are not counted.
    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        let side = self.side as i32;
        ((0..side).contains(&position.x) && (0..side).contains(&position.y))
            .then(|| position.y as usize * self.side + position.x as usize)
    }

    #[inline]
    pub fn add(&mut self, position: Position) {
        if let Some(i) = self.index(position) {
            self.counts[i] += 1;
        }
    }

    #[inline]
    pub fn remove(&mut self, position: Position) {
        if let Some(i) = self.index(position) {
            self.counts[i] -= 1;
        }
    }

    #[inline]
    pub fn count(&self, position: Position) -> u32 {
        self.index(position).map_or(0, |i| self.counts[i])
    }
}

/// Score an occupancy table. Shared by full and incremental evaluation.
pub fn score(occupancy: &Occupancy, rewards: &RewardTable) -> i64 {
    occupancy.counts.iter().map(|&c| rewards.reward(c)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_tiers() {
        let rewards = RewardTable::default();
        assert_eq!(rewards.reward(0), 0);
        assert_eq!(rewards.reward(1), 10);
        assert_eq!(rewards.reward(2), 3);
        assert_eq!(rewards.reward(3), 1);
        assert_eq!(rewards.reward(4), 0);
        assert_eq!(rewards.reward(500), 0);
    }

    #[test]
    fn test_shared_cell_scores_pair_tier() {
        let board = Board::new(5);
        let shared = Position::new(1, 1);
        let occupancy = Occupancy::from_positions(&board, [shared, shared]);
        assert_eq!(occupancy.count(shared), 2);
        assert_eq!(score(&occupancy, &RewardTable::default()), 3);
    }

    #[test]
    fn test_off_board_positions_are_not_counted() {
        let board = Board::new(0);
        let occupancy = Occupancy::from_positions(&board, [board.center()]);
        assert_eq!(occupancy.count(board.center()), 0);
        assert_eq!(score(&occupancy, &RewardTable::default()), 0);
    }

    #[test]
    fn test_add_remove() {
        let board = Board::new(5);
        let a = Position::new(0, 0);
        let b = Position::new(4, 4);
        let mut occupancy = Occupancy::from_positions(&board, [a, a, a, b]);
        assert_eq!(score(&occupancy, &RewardTable::default()), 1 + 10);

        occupancy.remove(a);
        occupancy.add(b);
        assert_eq!(score(&occupancy, &RewardTable::default()), 3 + 3);

        occupancy.add(b);
        occupancy.add(b);
        assert_eq!(occupancy.count(b), 4);
        assert_eq!(score(&occupancy, &RewardTable::default()), 3);
    }
}

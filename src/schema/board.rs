//! Square panel board and board-indexed cell sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Border, PanelKind};

/// Integer cell coordinate. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Square grid of panels with a side fixed at construction.
///
/// Cells outside the board behave exactly like walls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    cells: Vec<PanelKind>,
}

impl Board {
    /// Create an all-empty board.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![PanelKind::Empty; side * side],
        }
    }

    /// Parse a board from rows of panel characters.
    ///
    /// Returns `None` if the rows are not square or contain unknown symbols.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in rows {
            let before = cells.len();
            for c in row.as_ref().chars() {
                cells.push(PanelKind::from_symbol(c)?);
            }
            if cells.len() - before != side {
                return None;
            }
        }
        Some(Self { side, cells })
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Starting cell shared by every robot.
    #[inline]
    pub fn center(&self) -> Position {
        let c = (self.side / 2) as i32;
        Position::new(c, c)
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        let side = self.side as i32;
        (0..side).contains(&pos.x) && (0..side).contains(&pos.y)
    }

    /// Flat row-major index of an in-board cell.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.side + pos.x as usize)
    }

    /// Position of a flat index.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.side) as i32, (index / self.side) as i32)
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<PanelKind> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Set a panel, returning the previous one. Off-board writes are ignored.
    pub fn set(&mut self, pos: Position, panel: PanelKind) -> Option<PanelKind> {
        let i = self.index_of(pos)?;
        Some(std::mem::replace(&mut self.cells[i], panel))
    }

    /// Number of cells holding the given panel.
    pub fn count(&self, panel: PanelKind) -> usize {
        self.cells.iter().filter(|&&p| p == panel).count()
    }

    /// Render as text rows, optionally wrapped in a ring of walls.
    pub fn render(&self, border: Border) -> String {
        let wall = PanelKind::Wall.symbol();
        let framed = border == Border::Framed;
        let width = self.side + if framed { 2 } else { 0 };
        let mut out = String::with_capacity((width + 1) * width);

        if framed {
            out.extend(std::iter::repeat_n(wall, width));
            out.push('\n');
        }
        for row in self.cells.chunks(self.side.max(1)) {
            if framed {
                out.push(wall);
            }
            out.extend(row.iter().map(|p| p.symbol()));
            if framed {
                out.push(wall);
            }
            out.push('\n');
        }
        if framed {
            out.extend(std::iter::repeat_n(wall, width));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Border::Open))
    }
}

/// Fixed-capacity bit set over the cells of a board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellSet {
    words: Vec<u64>,
}

impl CellSet {
    /// Empty set able to hold `capacity` cell indices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
        }
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.words[index / 64] |= 1 << (index % 64);
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / 64)
            .is_some_and(|w| w & (1 << (index % 64)) != 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

use serde::{Deserialize, Serialize};

/// What a cell holds, fixed when the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell with the number of mines among its neighbors.
    Safe(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Safe(count) => Some(count),
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// Player-visible state of a cell, as drawn by a presenter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Single character used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Self::Hidden => '#',
            Self::Mine => '*',
            Self::Revealed(0) => '.',
            Self::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use types::array_size;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;
mod view;

/// Board the game opens with when nothing else is requested.
pub const DEFAULT_CONFIG: GameConfig = GameConfig::new_unchecked(4, 5, 4);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validated configuration; a board always keeps at least one safe cell.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 {
            return Err(GameError::InvalidConfiguration("board needs at least one row"));
        }
        if cols == 0 {
            return Err(GameError::InvalidConfiguration("board needs at least one column"));
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfiguration(
                "mine count must leave at least one safe cell",
            ));
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.rows, self.cols, self.mines).map(|_| ())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let rows = Coord::try_from(rows)
            .map_err(|_| GameError::InvalidConfiguration("too many rows"))?;
        let cols = Coord::try_from(cols)
            .map_err(|_| GameError::InvalidConfiguration("too many columns"))?;
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(rows, cols, mine_count)?;

        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    /// Builds a layout with mines at exactly `mine_coords`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mine_count = CellCount::try_from(mine_coords.len())
            .map_err(|_| GameError::InvalidConfiguration("too many mines"))?;
        GameConfig::new(size.0, size.1, mine_count)?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(GameError::InvalidConfiguration("duplicate mine coordinates"));
            }
            *cell = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        array_size(&self.mine_mask)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Mine coordinates in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        iter_coords(self.size())
            .filter(|&coords| self[coords])
            .collect()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn cell_kind(&self, coords: Coord2) -> CellKind {
        if self[coords] {
            CellKind::Mine
        } else {
            CellKind::Safe(self.adjacent_mine_count(coords))
        }
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of a single reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
}

impl RevealOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

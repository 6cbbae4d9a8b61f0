use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only snapshot of everything a presenter needs to draw a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub state: BoardState,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut cells = Array2::default(size.to_nd_index());
        for coords in iter_coords(size) {
            cells[coords.to_nd_index()] = board.view_at(coords);
        }

        Self {
            size,
            mine_count: board.mine_count(),
            state: board.state(),
            triggered_mine: board.triggered_mine(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}

use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    InProgress,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One round of the game: where the mines are and which cells are open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    kinds: Array2<CellKind>,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Board with `mines` randomly placed mines.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }

    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_layout(generator.generate(config)?))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let mut kinds: Array2<CellKind> = Array2::default(size.to_nd_index());
        for coords in iter_coords(size) {
            kinds[coords.to_nd_index()] = mine_layout.cell_kind(coords);
        }

        Self {
            mine_layout,
            kinds,
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.mine_layout.mine_coords()
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The mine whose reveal lost the round.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Number of safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_hidden(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(!self.revealed[coords.to_nd_index()])
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.contains_mine(coords))
    }

    pub fn cell_kind(&self, coords: Coord2) -> Result<CellKind> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.kinds[coords.to_nd_index()])
    }

    /// Adjacent mine count of a safe cell, `None` for a mine.
    pub fn neighbor_count(&self, coords: Coord2) -> Result<Option<u8>> {
        self.cell_kind(coords).map(CellKind::adjacent_mines)
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.view_at(coords))
    }

    pub(crate) fn view_at(&self, coords: Coord2) -> CellView {
        if !self.revealed[coords.to_nd_index()] {
            return CellView::Hidden;
        }
        match self.kinds[coords.to_nd_index()] {
            CellKind::Mine => CellView::Mine,
            CellKind::Safe(count) => CellView::Revealed(count),
        }
    }

    /// Every safe cell is revealed; mines may stay hidden.
    pub fn has_won(&self) -> bool {
        self.kinds
            .iter()
            .zip(self.revealed.iter())
            .all(|(kind, &revealed)| kind.is_mine() || revealed)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.revealed[coords.to_nd_index()] {
            return Ok(RevealOutcome::Continue);
        }

        match self.state {
            BoardState::Won => return Ok(RevealOutcome::Won),
            BoardState::Lost => return Ok(RevealOutcome::Lost),
            BoardState::InProgress => {}
        }

        if self.mine_layout.contains_mine(coords) {
            self.explode(coords);
            return Ok(RevealOutcome::Lost);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            log::debug!("Board cleared after revealing {:?}", coords);
            self.state = BoardState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Continue)
        }
    }

    /// Opens `start` and, while zero cells keep turning up, everything around them.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            let revealed = &mut self.revealed[visit_coords.to_nd_index()];
            if *revealed {
                continue;
            }
            *revealed = true;
            self.revealed_count += 1;

            if self.kinds[visit_coords.to_nd_index()] == CellKind::Safe(0) {
                log::trace!("Flooding around {:?}", visit_coords);
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| !self.revealed[pos.to_nd_index()]),
                );
            }
        }
    }

    fn explode(&mut self, coords: Coord2) {
        log::debug!("Mine hit at {:?}", coords);
        self.revealed.fill(true);
        self.revealed_count = self.mine_layout.safe_cell_count();
        self.triggered_mine = Some(coords);
        self.state = BoardState::Lost;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();
        for x in 0..rows {
            for y in 0..cols {
                if y > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.view_at((x, y)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    fn hidden_cells(board: &Board) -> Vec<Coord2> {
        iter_coords(board.size())
            .filter(|&coords| board.is_hidden(coords).unwrap())
            .collect()
    }

    #[test]
    fn new_board_is_all_hidden() {
        let board = Board::new(4, 5, 4).unwrap();

        assert_eq!(hidden_cells(&board).len(), 20);
        assert_eq!(board.mine_count(), 4);
        assert_eq!(board.state(), BoardState::InProgress);
        assert!(!board.has_won());
    }

    #[test]
    fn new_rejects_invalid_configuration() {
        assert!(matches!(
            Board::new(0, 4, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Board::new(2, 2, 4),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn queries_check_bounds() {
        let board = board((2, 3), &[(0, 0)]);

        assert_eq!(board.is_hidden((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.is_mine((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(board.neighbor_count((5, 5)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell_view((2, 3)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn neighbor_counts_follow_the_layout() {
        let board = board((3, 3), &[(0, 0), (0, 2)]);

        assert_eq!(board.neighbor_count((0, 0)), Ok(None));
        assert_eq!(board.neighbor_count((0, 1)), Ok(Some(2)));
        assert_eq!(board.neighbor_count((1, 1)), Ok(Some(2)));
        assert_eq!(board.neighbor_count((1, 0)), Ok(Some(1)));
        assert_eq!(board.neighbor_count((2, 1)), Ok(Some(0)));
    }

    #[test]
    fn reveal_mine_exposes_whole_board() {
        let mut board = board((3, 3), &[(1, 1)]);

        assert_eq!(board.reveal((1, 1)), Ok(RevealOutcome::Lost));
        assert_eq!(board.state(), BoardState::Lost);
        assert_eq!(board.triggered_mine(), Some((1, 1)));
        assert!(hidden_cells(&board).is_empty());
        assert_eq!(board.cell_view((1, 1)), Ok(CellView::Mine));
    }

    #[test]
    fn reveal_flood_fill_opens_zero_region() {
        let mut board = board((3, 3), &[(2, 2)]);

        let outcome = board.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(board.cell_view((0, 0)), Ok(CellView::Revealed(0)));
        assert_eq!(board.cell_view((1, 1)), Ok(CellView::Revealed(1)));
        assert_eq!(board.cell_view((2, 2)), Ok(CellView::Hidden));
        assert!(board.has_won());
    }

    #[test]
    fn flood_fill_stops_at_numbered_cells() {
        // column 2 is a wall of mines; the left side floods, the right stays shut
        let mut board = board((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        assert_eq!(board.reveal((1, 0)), Ok(RevealOutcome::Continue));

        for x in 0..3 {
            assert_eq!(board.is_hidden((x, 0)), Ok(false));
            assert_eq!(board.is_hidden((x, 1)), Ok(false));
            assert_eq!(board.is_hidden((x, 2)), Ok(true));
            assert_eq!(board.is_hidden((x, 3)), Ok(true));
            assert_eq!(board.is_hidden((x, 4)), Ok(true));
        }
        assert_eq!(board.revealed_count(), 6);
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(board.reveal((1, 1)), Ok(RevealOutcome::Continue));
        assert_eq!(hidden_cells(&board).len(), 8);
    }

    #[test]
    fn repeated_reveal_is_a_no_op() {
        let mut board = board((3, 3), &[(0, 0)]);

        board.reveal((1, 1)).unwrap();
        let before = board.clone();

        assert_eq!(board.reveal((1, 1)), Ok(RevealOutcome::Continue));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_reveal_leaves_board_unchanged() {
        let mut board = board((3, 3), &[(0, 0)]);
        let before = board.clone();

        assert_eq!(board.reveal((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.reveal((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(board, before);
    }

    #[test]
    fn winning_board_transitions_to_won_state() {
        let mut board = board((2, 1), &[(0, 0)]);

        assert_eq!(board.reveal((1, 0)), Ok(RevealOutcome::Won));
        assert_eq!(board.state(), BoardState::Won);
        assert!(board.is_finished());
        assert_eq!(board.is_hidden((0, 0)), Ok(true));
    }

    #[test]
    fn finished_round_ignores_hidden_mines() {
        let mut board = board((2, 1), &[(0, 0)]);
        board.reveal((1, 0)).unwrap();

        assert_eq!(board.reveal((0, 0)), Ok(RevealOutcome::Won));
        assert_eq!(board.state(), BoardState::Won);
        assert_eq!(board.is_hidden((0, 0)), Ok(true));
    }

    #[test]
    fn has_won_ignores_mine_visibility() {
        let mut board = board((1, 3), &[(0, 0)]);

        board.reveal((0, 1)).unwrap();
        assert!(!board.has_won());

        board.reveal((0, 2)).unwrap();
        assert!(board.has_won());
    }

    #[test]
    fn display_renders_rows() {
        let mut board = board((2, 3), &[(0, 0)]);
        board.reveal((1, 2)).unwrap();

        assert_eq!(board.to_string(), "# 1 .\n# 1 .\n");

        board.reveal((0, 0)).unwrap();
        assert_eq!(board.to_string(), "* 1 .\n1 1 .\n");
    }

    #[test]
    fn board_snapshot_round_trips_through_json() {
        let mut board = board((3, 3), &[(2, 2)]);
        board.reveal((0, 2)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
    }
}

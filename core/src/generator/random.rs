use super::*;

/// Uniformly random placement: every cell coordinate is shuffled and the first `mines` of them get a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generator seeded from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut cells: Vec<Coord2> = iter_coords(config.size()).collect();
        let (mines, _) = cells.partial_shuffle(&mut rng, config.mines.into());

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for &coords in mines.iter() {
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask)?;
        log::debug!(
            "Generated {}x{} minefield with {} mines (seed {})",
            config.rows,
            config.cols,
            layout.mine_count(),
            self.seed
        );
        Ok(layout)
    }
}

use super::*;

/// Places mines at a known set of coordinates, for scripted boards and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let layout = MineLayout::from_mine_coords(config.size(), &self.mines)?;
        if layout.mine_count() != config.mines {
            log::warn!(
                "Fixed minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
            return Err(GameError::InvalidConfiguration(
                "fixed mine list does not match the requested mine count",
            ));
        }
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_given_mines() {
        let config = GameConfig::new(4, 4, 2).unwrap();
        let layout = FixedMineGenerator::new([(0, 0), (3, 1)])
            .generate(config)
            .unwrap();

        assert_eq!(layout.mine_coords(), vec![(0, 0), (3, 1)]);
    }

    #[test]
    fn rejects_count_mismatch() {
        let config = GameConfig::new(4, 4, 3).unwrap();

        assert!(matches!(
            FixedMineGenerator::new([(0, 0)]).generate(config),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_out_of_bounds_mine() {
        let config = GameConfig::new(2, 2, 1).unwrap();

        assert_eq!(
            FixedMineGenerator::new([(0, 2)]).generate(config),
            Err(GameError::OutOfBounds)
        );
    }
}

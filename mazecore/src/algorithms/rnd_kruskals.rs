use log::trace;
use rand::seq::SliceRandom;

use super::{CarveStrategy, Chambers, GeneratorError, Random};
use crate::{gameboard::Wall, view::MazeView};

#[derive(Debug, Clone, Copy, Default)]
pub struct RndKruskals {
    pub strategy: CarveStrategy,
}

impl RndKruskals {
    pub fn new(strategy: CarveStrategy) -> Self {
        Self { strategy }
    }

    /// Removes walls until every cell shares one chamber.
    ///
    /// Returns the removed walls in removal order, each one is also reported to `view`.
    ///
    /// # Panics
    /// If there is more than one chamber left but no candidate wall joins two of them,
    /// which can only happen when `walls` doesn't connect the cells of `chambers`.
    pub fn carve<V: MazeView>(
        &self,
        mut walls: Vec<Wall>,
        chambers: &mut Chambers,
        rng: &mut Random,
        view: &mut V,
    ) -> Result<Vec<Wall>, GeneratorError> {
        let mut removed = Vec::with_capacity(chambers.count().saturating_sub(1));

        match self.strategy {
            CarveStrategy::Reshuffle => {
                while chambers.count() > 1 {
                    walls.shuffle(rng);

                    let index = walls
                        .iter()
                        .position(|wall| {
                            let (one, two) = wall.cells();
                            !chambers.same(one, two)
                        })
                        .unwrap_or_else(|| stalled(chambers.count()));

                    let wall = walls.swap_remove(index);
                    Self::remove(wall, chambers, view, &mut removed)?;
                }
            }
            CarveStrategy::SinglePass => {
                walls.shuffle(rng);

                let mut walls = walls.into_iter();
                while chambers.count() > 1 {
                    let wall = walls.next().unwrap_or_else(|| stalled(chambers.count()));
                    let (one, two) = wall.cells();

                    if chambers.same(one, two) {
                        continue;
                    }

                    Self::remove(wall, chambers, view, &mut removed)?;
                }
            }
        }

        Ok(removed)
    }

    fn remove<V: MazeView>(
        wall: Wall,
        chambers: &mut Chambers,
        view: &mut V,
        removed: &mut Vec<Wall>,
    ) -> Result<(), GeneratorError> {
        let (one, two) = wall.cells();
        let merged = chambers.merge(one, two);
        debug_assert!(merged);

        trace!("removed wall {}, {} chambers left", wall, chambers.count());
        view.remove_wall(&wall).map_err(GeneratorError::view)?;
        removed.push(wall);

        Ok(())
    }
}

fn stalled(chambers: usize) -> ! {
    panic!(
        "no wall left to join {} separate chambers, the wall list doesn't connect the grid",
        chambers
    )
}

mod chambers;
mod rnd_kruskals;

use std::fmt;

use log::{debug, info};
use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{
    gameboard::{Cell, Maze, Wall},
    view::MazeView,
};
pub use chambers::Chambers;
pub use rnd_kruskals::RndKruskals;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid maze dimension {0}, it has to be at least 1")]
    InvalidDimension(i32),
    #[error("View error: {0}")]
    View(String),
}

impl GeneratorError {
    pub fn view(err: impl fmt::Display) -> Self {
        GeneratorError::View(err.to_string())
    }
}

/// How candidate walls are ordered while carving
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CarveStrategy {
    /// Shuffle the remaining walls again after every removed wall
    #[default]
    Reshuffle,
    /// Shuffle once and walk the walls in that order
    SinglePass,
}

pub fn validate_dimension(dimension: i32) -> Result<usize, GeneratorError> {
    if dimension <= 0 {
        return Err(GeneratorError::InvalidDimension(dimension));
    }

    Ok(dimension as usize)
}

/// Builds every wall of a `dimension`×`dimension` grid and puts each cell into its own chamber.
///
/// Walls are listed row by row, the right wall of a cell before its bottom wall.
pub fn build_graph(dimension: i32) -> Result<(Vec<Wall>, Chambers), GeneratorError> {
    let n = validate_dimension(dimension)?;

    let mut walls = Vec::with_capacity(2 * n * (n - 1));
    for cell in Cell::iter_square(n) {
        if cell.col + 1 < n {
            walls.push(Wall::right_of(cell));
        }

        if cell.row + 1 < n {
            walls.push(Wall::below(cell));
        }
    }

    let chambers = Chambers::singletons(n);
    debug!(
        "built {} walls and {} chambers for dimension {}",
        walls.len(),
        chambers.count(),
        n
    );

    Ok((walls, chambers))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenState {
    Uninitialized,
    WallsGenerated,
    Carving,
    Complete,
}

/// Drives one maze generation and reports every step to a [`MazeView`]
#[derive(Debug, Clone)]
pub struct Generator {
    dimension: i32,
    algorithm: RndKruskals,
    seed: u64,
    rng: Random,
    state: GenState,
}

impl Generator {
    pub fn new(dimension: i32, strategy: CarveStrategy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());

        Generator {
            dimension,
            algorithm: RndKruskals::new(strategy),
            seed,
            rng: Random::seed_from_u64(seed),
            state: GenState::Uninitialized,
        }
    }

    /// Seed the generator was created with, can be used to get the same maze again
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> GenState {
        self.state
    }

    pub fn generate<V: MazeView>(&mut self, mut view: V) -> Result<Maze, GeneratorError> {
        let n = validate_dimension(self.dimension)?;

        view.set_dimension(n).map_err(GeneratorError::view)?;
        view.draw_border().map_err(GeneratorError::view)?;

        let (walls, mut chambers) = build_graph(self.dimension)?;
        self.state = GenState::WallsGenerated;
        for wall in &walls {
            view.draw_wall(wall).map_err(GeneratorError::view)?;
        }

        self.state = GenState::Carving;
        let removed =
            self.algorithm
                .carve(walls.clone(), &mut chambers, &mut self.rng, &mut view)?;
        self.state = GenState::Complete;

        info!(
            "maze of dimension {} done, removed {} of {} walls (seed {})",
            n,
            removed.len(),
            walls.len(),
            self.seed
        );

        Ok(Maze::new(n, walls, removed))
    }
}

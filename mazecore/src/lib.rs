pub mod algorithms;
pub mod array;
pub mod gameboard;
pub mod view;

use algorithms::{CarveStrategy, Generator, GeneratorError};
use gameboard::Maze;
use view::NullView;

/// Generates a maze without drawing it anywhere
pub fn generate(dimension: i32, seed: Option<u64>) -> Result<Maze, GeneratorError> {
    Generator::new(dimension, CarveStrategy::default(), seed).generate(NullView)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_without_view() {
        let maze = generate(5, Some(1)).unwrap();
        assert_eq!(maze.removed_walls().len(), 24);
        assert!(maze.is_spanning_tree());

        let again = generate(5, Some(1)).unwrap();
        assert_eq!(maze.removed_walls(), again.removed_walls());
    }

    #[test]
    fn generate_rejects_empty_grid() {
        assert_eq!(
            generate(0, None).unwrap_err(),
            GeneratorError::InvalidDimension(0)
        );
    }
}

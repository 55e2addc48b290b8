pub mod cell;
pub use cell::{Cell, CellPassages, CellWall, Wall};
pub mod maze;
pub use maze::Maze;

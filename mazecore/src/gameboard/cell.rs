use std::fmt;

use smallvec::SmallVec;

use CellWall::*;

/// Grid position, `row` grows downwards and `col` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ZERO: Cell = Cell { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    pub fn is_in_bounds(&self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// Cell on the other side of `wall`, if it is still inside the grid
    pub fn offset(&self, wall: CellWall, dimension: usize) -> Option<Cell> {
        let (dr, dc) = wall.to_offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;

        Some(Cell::new(row, col)).filter(|cell| cell.is_in_bounds(dimension))
    }

    pub fn neighbors(&self, dimension: usize) -> SmallVec<[Cell; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.offset(wall, dimension))
            .collect()
    }

    pub fn iter_square(dimension: usize) -> impl Iterator<Item = Cell> {
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    pub fn to_offset(self) -> (isize, isize) {
        match self {
            Left => (0, -1),
            Right => (0, 1),
            Top => (-1, 0),
            Bottom => (1, 0),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }
}

/// Wall between two grid-adjacent cells.
///
/// Stored in normalized form: `origin` is always the upper-left of the two cells, so
/// the direction is either [`CellWall::Right`] or [`CellWall::Bottom`] and the pair is unordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wall {
    origin: Cell,
    dir: CellWall,
}

impl Wall {
    pub fn right_of(cell: Cell) -> Self {
        Wall {
            origin: cell,
            dir: Right,
        }
    }

    pub fn below(cell: Cell) -> Self {
        Wall {
            origin: cell,
            dir: Bottom,
        }
    }

    /// Returns the wall between two cells, if they are adjacent horizontally or vertically
    pub fn between(a: Cell, b: Cell) -> Option<Self> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };

        if first.row == second.row && first.col + 1 == second.col {
            Some(Wall::right_of(first))
        } else if first.col == second.col && first.row + 1 == second.row {
            Some(Wall::below(first))
        } else {
            None
        }
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    pub fn dir(&self) -> CellWall {
        self.dir
    }

    pub fn other(&self) -> Cell {
        match self.dir {
            Right => Cell::new(self.origin.row, self.origin.col + 1),
            _ => Cell::new(self.origin.row + 1, self.origin.col),
        }
    }

    pub fn cells(&self) -> (Cell, Cell) {
        (self.origin, self.other())
    }

    pub fn is_horizontal_neighbor(&self) -> bool {
        self.dir == Right
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (one, two) = self.cells();
        write!(f, "{}-{}", one, two)
    }
}

/// Open sides of a single cell of a finished maze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPassages {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl CellPassages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, side: CellWall) {
        match side {
            Left => self.left = true,
            Right => self.right = true,
            Top => self.top = true,
            Bottom => self.bottom = true,
        }
    }

    pub fn is_open(&self, side: CellWall) -> bool {
        match side {
            Left => self.left,
            Right => self.right,
            Top => self.top,
            Bottom => self.bottom,
        }
    }

    pub fn is_closed(&self, side: CellWall) -> bool {
        !self.is_open(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_between_is_unordered() {
        let a = Cell::new(1, 1);
        let b = Cell::new(1, 2);
        let c = Cell::new(2, 1);

        assert_eq!(Wall::between(a, b), Some(Wall::right_of(a)));
        assert_eq!(Wall::between(b, a), Some(Wall::right_of(a)));
        assert_eq!(Wall::between(a, c), Some(Wall::below(a)));
        assert_eq!(Wall::between(c, a), Some(Wall::below(a)));
    }

    #[test]
    fn wall_between_rejects_non_neighbors() {
        let a = Cell::new(1, 1);

        assert_eq!(Wall::between(a, a), None);
        assert_eq!(Wall::between(a, Cell::new(2, 2)), None);
        assert_eq!(Wall::between(a, Cell::new(0, 2)), None);
        assert_eq!(Wall::between(a, Cell::new(1, 3)), None);
        assert_eq!(Wall::between(a, Cell::new(3, 1)), None);
    }

    #[test]
    fn wall_cells() {
        let wall = Wall::below(Cell::new(0, 3));
        assert_eq!(wall.cells(), (Cell::new(0, 3), Cell::new(1, 3)));
        assert_eq!(wall.to_string(), "(0, 3)-(1, 3)");
    }

    #[test]
    fn neighbors_stay_in_grid() {
        assert_eq!(Cell::ZERO.neighbors(3).len(), 2);
        assert_eq!(Cell::new(0, 1).neighbors(3).len(), 3);
        assert_eq!(Cell::new(1, 1).neighbors(3).len(), 4);
        assert_eq!(Cell::new(2, 2).neighbors(3).len(), 2);
        assert!(Cell::ZERO.neighbors(1).is_empty());
    }
}

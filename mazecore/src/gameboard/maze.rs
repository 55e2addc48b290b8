use std::{collections::VecDeque, fmt};

use hashbrown::HashSet;

use crate::array::Array2D;

use super::cell::{Cell, CellPassages, CellWall, Wall};

/// Finished maze, immutable once carving is complete
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) dimension: usize,
    pub(crate) walls: Vec<Wall>,
    pub(crate) removed: Vec<Wall>,
    pub(crate) cells: Array2D<CellPassages>,
}

impl Maze {
    pub(crate) fn new(dimension: usize, walls: Vec<Wall>, removed: Vec<Wall>) -> Self {
        let mut cells = Array2D::new_square(CellPassages::new(), dimension);
        for wall in &removed {
            let (one, two) = wall.cells();
            cells[one].open(wall.dir());
            cells[two].open(wall.dir().reverse_wall());
        }

        Maze {
            dimension,
            walls,
            removed,
            cells,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Every wall between neighboring cells, in the order they were generated
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Removed walls in the order they were carved
    pub fn removed_walls(&self) -> &[Wall] {
        &self.removed
    }

    pub fn remaining_walls(&self) -> impl Iterator<Item = &Wall> + '_ {
        self.walls.iter().filter(|wall| !self.is_open(wall))
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.is_in_bounds(self.dimension)
    }

    pub fn is_open(&self, wall: &Wall) -> bool {
        let (one, two) = wall.cells();
        self.is_in_bounds(two)
            && self
                .cells
                .get(one)
                .is_some_and(|cell| cell.is_open(wall.dir()))
    }

    pub fn cell(&self, cell: Cell) -> Option<&CellPassages> {
        self.cells.get(cell)
    }

    /// Neighbors reachable from `cell` without crossing a wall
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors(self.dimension)
            .into_iter()
            .filter(move |&next| {
                Wall::between(cell, next).is_some_and(|wall| self.is_open(&wall))
            })
    }

    /// Checks that the open passages form a tree spanning all cells
    pub fn is_spanning_tree(&self) -> bool {
        if self.dimension == 0 || self.removed.len() != self.cell_count() - 1 {
            return false;
        }

        let mut visited = HashSet::with_capacity(self.cell_count());
        let mut queue = VecDeque::from([Cell::ZERO]);
        visited.insert(Cell::ZERO);

        while let Some(current) = queue.pop_front() {
            for next in self.open_neighbors(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        visited.len() == self.cell_count()
    }

    /// Route between two cells along open passages, both ends included
    pub fn path(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return None;
        }

        let mut came_from: Array2D<Option<Cell>> = Array2D::new_square(None, self.dimension);
        let mut queue = VecDeque::from([from]);
        came_from[from] = Some(from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                break;
            }

            for next in self.open_neighbors(current) {
                if came_from[next].is_none() {
                    came_from[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        came_from[to]?;

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = came_from[current]?;
            path.push(current);
        }
        path.reverse();

        Some(path)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension;

        writeln!(f, "+{}", "--+".repeat(n))?;
        for row in 0..n {
            write!(f, "|")?;
            for col in 0..n {
                let cell = &self.cells[Cell::new(row, col)];
                let side = if col + 1 < n && cell.is_open(CellWall::Right) {
                    ' '
                } else {
                    '|'
                };
                write!(f, "  {}", side)?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for col in 0..n {
                let cell = &self.cells[Cell::new(row, col)];
                if row + 1 < n && cell.is_open(CellWall::Bottom) {
                    write!(f, "  +")?;
                } else {
                    write!(f, "--+")?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

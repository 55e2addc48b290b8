use std::ops;

use crate::gameboard::Cell;

/// Dense row-major grid, also used to give every cell a stable integer id.
#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn cell_to_idx(&self, cell: Cell) -> Option<usize> {
        let Cell { row, col } = cell;

        if col >= self.width || row >= self.height {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.cell_to_idx(cell).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.cell_to_idx(cell).and_then(|i| self.buf.get_mut(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }

    pub fn new_square(item: T, side: usize) -> Self {
        Self::new(item, side, side)
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping() {
        let arr = Array2D::new(0u8, 4, 3);
        assert_eq!(arr.cell_to_idx(Cell::new(0, 0)), Some(0));
        assert_eq!(arr.cell_to_idx(Cell::new(1, 2)), Some(6));
        assert_eq!(arr.cell_to_idx(Cell::new(2, 3)), Some(11));
        assert_eq!(arr.cell_to_idx(Cell::new(3, 0)), None);
        assert_eq!(arr.cell_to_idx(Cell::new(0, 4)), None);
    }

    #[test]
    fn get_and_index() {
        let mut arr = Array2D::new_square(0u8, 2);
        arr[Cell::new(1, 0)] = 5;
        *arr.get_mut(Cell::new(0, 1)).unwrap() = 3;

        assert_eq!(arr[Cell::new(1, 0)], 5);
        assert_eq!(arr.get(Cell::new(0, 1)), Some(&3));
        assert_eq!(arr.get(Cell::new(2, 0)), None);
    }
}

use hashbrown::HashMap;

use crate::gameboard::Cell;

/// Partition of the grid cells into chambers of mutually connected cells.
///
/// Disjoint-set forest over dense cell ids, with path halving and union by size.
#[derive(Debug, Clone)]
pub struct Chambers {
    dimension: usize,
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Chambers {
    /// Every cell of a `dimension`×`dimension` grid in its own chamber
    pub fn singletons(dimension: usize) -> Self {
        let len = dimension * dimension;

        Chambers {
            dimension,
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Number of cells covered by the partition
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of chambers
    pub fn count(&self) -> usize {
        self.count
    }

    fn id(&self, cell: Cell) -> usize {
        if !cell.is_in_bounds(self.dimension) {
            panic!("Cell {} is outside of the grid", cell);
        }

        cell.row * self.dimension + cell.col
    }

    fn cell(&self, id: usize) -> Cell {
        Cell::new(id / self.dimension, id % self.dimension)
    }

    fn root(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            self.parent[id] = self.parent[self.parent[id]];
            id = self.parent[id];
        }
        id
    }

    fn root_of(&self, mut id: usize) -> usize {
        while self.parent[id] != id {
            id = self.parent[id];
        }
        id
    }

    /// Representative cell of the chamber `cell` belongs to
    pub fn find(&mut self, cell: Cell) -> Cell {
        let id = self.id(cell);
        let root = self.root(id);
        self.cell(root)
    }

    pub fn same(&mut self, a: Cell, b: Cell) -> bool {
        let (a, b) = (self.id(a), self.id(b));
        self.root(a) == self.root(b)
    }

    /// Joins the chambers of `a` and `b`, returns `false` if they already were one chamber
    pub fn merge(&mut self, a: Cell, b: Cell) -> bool {
        let (a, b) = (self.id(a), self.id(b));
        let (mut a, mut b) = (self.root(a), self.root(b));

        if a == b {
            return false;
        }

        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }

        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;

        true
    }

    pub fn chamber_size(&mut self, cell: Cell) -> usize {
        let id = self.id(cell);
        let root = self.root(id);
        self.size[root]
    }

    /// All cells sharing a chamber with `cell`, in row-major order
    pub fn members(&self, cell: Cell) -> Vec<Cell> {
        let root = self.root_of(self.id(cell));
        Cell::iter_square(self.dimension)
            .enumerate()
            .filter(|&(id, _)| self.root_of(id) == root)
            .map(|(_, cell)| cell)
            .collect()
    }

    /// Snapshot of the whole partition, chambers ordered by their first cell
    pub fn chambers(&self) -> Vec<Vec<Cell>> {
        let mut by_root: HashMap<usize, usize> = HashMap::with_capacity(self.count);
        let mut chambers: Vec<Vec<Cell>> = Vec::with_capacity(self.count);

        for (id, cell) in Cell::iter_square(self.dimension).enumerate() {
            let root = self.root_of(id);
            let slot = *by_root.entry(root).or_insert_with(|| {
                chambers.push(Vec::new());
                chambers.len() - 1
            });
            chambers[slot].push(cell);
        }

        chambers
    }
}

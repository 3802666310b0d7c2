/// Growable, square, symmetric boolean matrix with an all-zero diagonal.
///
/// Entry `(i, j)` is set iff vertex `i` and vertex `j` are adjacent. Storage is row-major and
/// `grow` copies every existing entry into the larger matrix at the same `(i, j)` position.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// An all-zero `dim` x `dim` matrix.
    pub fn with_dimension(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Adds one all-zero row and column. Returns the index of the new row/column.
    pub fn grow(&mut self) -> usize {
        let old = self.dim;
        let new = old + 1;
        let mut cells = vec![false; new * new];
        for i in 0..old {
            cells[i * new..i * new + old].copy_from_slice(&self.cells[i * old..(i + 1) * old]);
        }
        self.cells = cells;
        self.dim = new;
        old
    }

    /// Out of range indices are never adjacent.
    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.dim && j < self.dim && self.cells[i * self.dim + j]
    }

    /// Marks `i` and `j` adjacent in both directions. Returns `true` if they were not already.
    ///
    /// Panics if either index is out of range or `i == j`; callers check vertex existence first.
    pub fn set(&mut self, i: usize, j: usize) -> bool {
        assert!(i < self.dim && j < self.dim, "index out of range");
        assert_ne!(i, j, "diagonal must stay zero");
        if self.cells[i * self.dim + j] {
            return false;
        }
        self.cells[i * self.dim + j] = true;
        self.cells[j * self.dim + i] = true;
        true
    }

    /// Columns set in row `i`, ascending.
    pub fn row(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[bool] = if i < self.dim {
            &self.cells[i * self.dim..(i + 1) * self.dim]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(j, adjacent)| adjacent.then_some(j))
    }

    pub fn degree(&self, i: usize) -> usize {
        self.row(i).count()
    }

    /// Every adjacent pair once, as `(i, j)` with `i < j`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.dim).flat_map(move |i| self.row(i).filter(move |j| *j > i).map(move |j| (i, j)))
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count() / 2
    }
}

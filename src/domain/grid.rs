use super::error::{GridError, GridResult};

/// GridState holds one generation of a bounded cellular automaton.
/// Cells are stored row-major, `index = x + width * y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GridState {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(GridError::InvalidDimension { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Builder: mark every listed coordinate alive.
    pub fn with_alive<I>(mut self, cells: I) -> GridResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (x, y) in cells {
            let idx = self.checked_index(x, y)?;
            self.cells[idx] = true;
        }
        Ok(self)
    }

    /// Assemble a grid from a precomputed cell buffer of matching length.
    pub(super) fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn checked_index(&self, x: usize, y: usize) -> GridResult<usize> {
        if self.contains(x, y) {
            Ok(x + self.width * y)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read a cell. Coordinates outside the grid are rejected, never wrapped.
    pub fn is_alive(&self, x: usize, y: usize) -> GridResult<bool> {
        self.checked_index(x, y).map(|idx| self.cells[idx])
    }

    /// Read the cell at `(x + dx, y + dy)`, treating anything past an edge as dead.
    pub(super) fn alive_at_offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) if self.contains(nx, ny) => self.cells[nx + self.width * ny],
            _ => false,
        }
    }

    /// Flip a single cell in place
    pub fn toggle(&mut self, x: usize, y: usize) -> GridResult<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|&alive| alive)
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Reset every cell to dead, keeping the dimensions
    pub fn clear(mut self) -> Self {
        self.cells.fill(false);
        self
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Iterate over the coordinates of alive cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }
}

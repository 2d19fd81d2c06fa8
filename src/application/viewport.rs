/// Viewport maps between screen pixels and grid cells.
/// The grid is drawn at the window origin with square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub const fn new(columns: usize, rows: usize, cell_size: f32) -> Self {
        Self {
            cell_size,
            columns,
            rows,
        }
    }

    /// Pixel size of the drawn grid
    pub fn canvas_size(&self) -> (f32, f32) {
        (self.to_screen(self.columns), self.to_screen(self.rows))
    }

    /// Convert a cell coordinate to its top-left pixel
    pub fn to_screen(&self, v: usize) -> f32 {
        v as f32 * self.cell_size
    }

    /// Convert a pixel coordinate to a (possibly out-of-grid) cell coordinate
    pub fn from_screen(&self, v: f32) -> i32 {
        (v / self.cell_size).floor() as i32
    }

    /// Convert screen coordinates to grid coordinates
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        (self.from_screen(screen_x), self.from_screen(screen_y))
    }

    /// The cell under a screen point, if the point lies on the grid
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let (x, y) = self.screen_to_grid(screen_x, screen_y);
        let x = usize::try_from(x).ok().filter(|&x| x < self.columns)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.rows)?;
        Some((x, y))
    }
}

//! Generation stepping on a bounded plane.
//!
//! Neighbors are found with plain `x ± 1, y ± 1` offsets. A neighbor that
//! falls outside the grid is absent, so edge cells see 5 neighbors and
//! corner cells 3. Nothing wraps to the opposite edge.

use super::{Fate, GridState};

/// Offsets of the Moore neighborhood, excluding the cell itself
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Count alive cells in the Moore neighborhood of `(x, y)`
pub fn live_neighbors(grid: &GridState, x: usize, y: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.alive_at_offset(x, y, dx, dy))
        .count() as u8
}

/// Compute the next generation. Every cell reads the same prior snapshot;
/// the input grid is never mutated.
pub fn step(grid: &GridState) -> GridState {
    let (width, height) = grid.dimensions();
    let cells = grid
        .positions()
        .map(|(x, y)| {
            let alive = grid.alive_at_offset(x, y, 0, 0);
            Fate::of(alive, live_neighbors(grid, x, y)).is_alive()
        })
        .collect();

    GridState::from_cells(width, height, cells)
}

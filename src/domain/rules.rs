/// Outcome of Conway's rule (B3/S23) for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    /// Alive with 2 or 3 neighbors
    Survives,
    /// Alive with fewer than 2 neighbors
    Underpopulation,
    /// Alive with more than 3 neighbors
    Overpopulation,
    /// Dead with exactly 3 neighbors
    Resurrects,
    StaysDead,
}

impl Fate {
    /// Apply the rule to a cell given its alive-neighbor count
    pub const fn of(alive: bool, neighbors: u8) -> Self {
        match (alive, neighbors) {
            (true, 2 | 3) => Fate::Survives,
            (true, 0 | 1) => Fate::Underpopulation,
            (true, _) => Fate::Overpopulation,
            (false, 3) => Fate::Resurrects,
            (false, _) => Fate::StaysDead,
        }
    }

    /// Whether the cell is alive in the next generation
    pub const fn is_alive(self) -> bool {
        matches!(self, Fate::Survives | Fate::Resurrects)
    }
}

mod error;
mod grid;
mod rules;
pub mod engine;

pub use error::{GridError, GridResult};
pub use grid::GridState;
pub use rules::Fate;
pub use engine::{step, live_neighbors};

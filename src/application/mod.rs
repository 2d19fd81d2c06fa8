mod simulation;
mod ticker;
mod viewport;

pub use simulation::{RunState, Simulation};
pub use ticker::Ticker;
pub use viewport::Viewport;

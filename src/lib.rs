// Domain layer - grid, rule and generation stepping
pub mod domain;

// Application layer - play/pause loop and screen mapping
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Fate, GridError, GridState, step};
pub use application::{RunState, Simulation, Ticker, Viewport};
pub use config::{ConfigError, LifeConfig};

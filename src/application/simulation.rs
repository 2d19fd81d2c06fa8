use std::time::Duration;

use super::Ticker;
use crate::config::LifeConfig;
use crate::domain::{GridResult, GridState, step};

/// Play/pause state. The ticker only exists while running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running(Ticker),
}

/// Simulation owns the grid and drives generations on a fixed interval.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: GridState,
    run_state: RunState,
    tick_interval: Duration,
    generation: u64,
}

impl Simulation {
    /// Create a paused simulation on an empty grid sized from `config`
    pub fn new(config: &LifeConfig) -> GridResult<Self> {
        let grid = GridState::new(config.width, config.height)?;
        Ok(Self::from_grid(grid, config.tick_interval()))
    }

    pub fn from_grid(grid: GridState, tick_interval: Duration) -> Self {
        Self {
            grid,
            run_state: RunState::Paused,
            tick_interval,
            generation: 0,
        }
    }

    pub const fn grid(&self) -> &GridState {
        &self.grid
    }

    pub const fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running(_))
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start ticking. No-op on an extinct grid or when already running.
    pub fn play(mut self) -> Self {
        if self.is_running() {
            return self;
        }
        if !self.grid.any_alive() {
            log::debug!("play ignored: no alive cells");
            return self;
        }

        log::info!(
            "playing from generation {} every {:?}",
            self.generation,
            self.tick_interval
        );
        self.run_state = RunState::Running(Ticker::new(self.tick_interval));
        self
    }

    /// Stop ticking. Safe to call when already paused.
    pub fn pause(mut self) -> Self {
        if self.is_running() {
            log::info!("paused at generation {}", self.generation);
        }
        self.run_state = RunState::Paused;
        self
    }

    pub fn toggle_running(self) -> Self {
        if self.is_running() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Kill every cell and pause, whatever the current state
    pub fn clear(mut self) -> Self {
        self = self.pause();
        self.grid = self.grid.clear();
        self.generation = 0;
        log::info!("grid cleared");
        self
    }

    /// Flip one cell. Allowed while running; the next tick sees the edit.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> GridResult<()> {
        self.grid.toggle(x, y)
    }

    /// Feed elapsed frame time; runs one generation when the ticker fires
    pub fn advance(mut self, delta: Duration) -> Self {
        let due = match &mut self.run_state {
            RunState::Running(ticker) => ticker.advance(delta),
            RunState::Paused => false,
        };

        if due {
            self.tick();
        }
        self
    }

    fn tick(&mut self) {
        self.grid = step(&self.grid);
        self.generation += 1;
        log::debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );

        if !self.grid.any_alive() {
            log::info!("extinction at generation {}", self.generation);
            self.run_state = RunState::Paused;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    fn simulation_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Simulation {
        let grid = GridState::new(width, height)
            .unwrap()
            .with_alive(alive.iter().copied())
            .unwrap();
        Simulation::from_grid(grid, INTERVAL)
    }

    fn blinker() -> Simulation {
        simulation_with(3, 3, &[(1, 0), (1, 1), (1, 2)])
    }

    #[test]
    fn test_starts_paused() {
        let sim = Simulation::new(&LifeConfig::default()).unwrap();
        assert!(!sim.is_running());
        assert_eq!(sim.run_state(), &RunState::Paused);
        assert_eq!(sim.grid().dimensions(), (100, 70));
    }

    #[test]
    fn test_new_rejects_empty_board() {
        let config = LifeConfig {
            height: 0,
            ..LifeConfig::default()
        };
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn test_play_on_empty_grid_is_noop() {
        let sim = simulation_with(5, 5, &[]).play();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_play_creates_ticker() {
        let sim = blinker().play();
        assert_eq!(sim.run_state(), &RunState::Running(Ticker::new(INTERVAL)));
    }

    #[test]
    fn test_play_twice_keeps_single_ticker() {
        let sim = blinker().play().advance(Duration::from_millis(200)).play();
        // The second play must not reset progress towards the next tick
        let sim = sim.advance(Duration::from_millis(100));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let sim = blinker().play().pause().pause();
        assert!(!sim.is_running());
        let sim = sim.pause();
        assert_eq!(sim.run_state(), &RunState::Paused);
    }

    #[test]
    fn test_paused_simulation_does_not_step() {
        let sim = blinker().advance(Duration::from_secs(10));
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid(), blinker().grid());
    }

    #[test]
    fn test_advance_steps_once_per_interval() {
        let sim = blinker().play();
        let sim = sim.advance(Duration::from_millis(299));
        assert_eq!(sim.generation(), 0);

        let sim = sim.advance(Duration::from_millis(1));
        assert_eq!(sim.generation(), 1);
        assert_eq!(
            sim.grid().alive_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 1), (2, 1)]
        );

        // A long stall still yields a single generation
        let sim = sim.advance(Duration::from_secs(3));
        assert_eq!(sim.generation(), 2);
        assert!(sim.is_running());
    }

    #[test]
    fn test_no_tick_after_pause() {
        let sim = blinker()
            .play()
            .advance(Duration::from_millis(250))
            .pause()
            .advance(Duration::from_millis(250));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_auto_pause_on_extinction() {
        // A lone cell dies of underpopulation on the first tick
        let sim = simulation_with(4, 4, &[(2, 2)]).play();
        assert!(sim.is_running());

        let sim = sim.advance(INTERVAL);
        assert_eq!(sim.generation(), 1);
        assert!(!sim.grid().any_alive());
        assert!(!sim.is_running());
    }

    #[test]
    fn test_clear_while_running_pauses() {
        let sim = blinker().play().advance(INTERVAL).clear();
        assert!(!sim.is_running());
        assert!(!sim.grid().any_alive());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().dimensions(), (3, 3));
    }

    #[test]
    fn test_clear_while_paused() {
        let sim = blinker().clear();
        assert!(!sim.is_running());
        assert!(!sim.grid().any_alive());
    }

    #[test]
    fn test_toggle_running_round_trip() {
        let sim = blinker().toggle_running();
        assert!(sim.is_running());
        let sim = sim.toggle_running();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_toggle_cell_while_running() {
        let mut sim = simulation_with(4, 4, &[(0, 0), (1, 0), (0, 1)]).play();
        sim.toggle_cell(1, 1).unwrap();
        let sim = sim.advance(INTERVAL);
        // Completed block is a still life
        assert_eq!(sim.grid().population(), 4);
        assert!(sim.is_running());
    }

    #[test]
    fn test_toggle_cell_out_of_bounds() {
        let mut sim = blinker();
        assert!(sim.toggle_cell(3, 1).is_err());
        assert_eq!(sim.grid(), blinker().grid());
    }
}

mod button;

pub use button::{Action, Button};

use crate::application::{Simulation, Viewport};

/// Height of the control strip drawn below the grid
pub const CONTROL_HEIGHT: f32 = 70.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BUTTON_GAP: f32 = 10.0;
/// Narrowest window that still fits the controls
pub const MIN_WINDOW_WIDTH: f32 = 3.0 * BUTTON_WIDTH + 4.0 * BUTTON_GAP + 160.0;

/// Window size needed for a grid drawn through `viewport`
pub fn window_size(viewport: &Viewport) -> (f32, f32) {
    let (width, height) = viewport.canvas_size();
    (width.max(MIN_WINDOW_WIDTH), height + CONTROL_HEIGHT)
}

/// Top of the control strip
pub fn controls_y(viewport: &Viewport) -> f32 {
    viewport.canvas_size().1 + BUTTON_GAP
}

/// Create the Play/Pause/Clear row. While running only Pause is enabled;
/// while paused Pause is disabled.
pub fn create_buttons(simulation: &Simulation, viewport: &Viewport) -> Vec<Button> {
    let running = simulation.is_running();
    let y = controls_y(viewport);

    [
        ("Play", Action::Play, !running),
        ("Pause", Action::Pause, running),
        ("Clear", Action::Clear, !running),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action, enabled))| {
        let x = BUTTON_GAP + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
        Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, label, action).with_enabled(enabled)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridState;
    use std::time::Duration;

    fn enabled(buttons: &[Button]) -> Vec<(Action, bool)> {
        buttons.iter().map(|b| (b.action(), b.is_enabled())).collect()
    }

    #[test]
    fn test_buttons_follow_run_state() {
        let viewport = Viewport::new(3, 3, 10.0);
        let grid = GridState::new(3, 3).unwrap().with_alive([(1, 0), (1, 1), (1, 2)]).unwrap();
        let paused = Simulation::from_grid(grid, Duration::from_millis(300));

        assert_eq!(
            enabled(&create_buttons(&paused, &viewport)),
            vec![(Action::Play, true), (Action::Pause, false), (Action::Clear, true)]
        );

        let running = paused.play();
        assert_eq!(
            enabled(&create_buttons(&running, &viewport)),
            vec![(Action::Play, false), (Action::Pause, true), (Action::Clear, false)]
        );
    }

    #[test]
    fn test_window_fits_grid_and_controls() {
        let (w, h) = window_size(&Viewport::new(100, 70, 10.0));
        assert_eq!((w, h), (1000.0, 700.0 + CONTROL_HEIGHT));

        let (w, _) = window_size(&Viewport::new(5, 5, 10.0));
        assert_eq!(w, MIN_WINDOW_WIDTH);
    }
}

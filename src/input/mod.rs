use macroquad::prelude::*;
use crate::application::{Simulation, Viewport};
use crate::ui::{Action, Button};

/// Apply a control action to the simulation
pub fn apply_action(simulation: Simulation, action: Action) -> Simulation {
    match action {
        Action::Play => simulation.play(),
        Action::Pause => simulation.pause(),
        Action::Clear => simulation.clear(),
    }
}

/// Toggle the cell under the cursor on left click
pub fn handle_cell_toggle(simulation: &mut Simulation, viewport: &Viewport, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let Some((x, y)) = viewport.cell_at(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    if let Err(err) = simulation.toggle_cell(x, y) {
        log::warn!("click ignored: {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(simulation: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 2] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
    ];

    actions.iter().fold(simulation, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    simulation: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons.iter().fold(simulation, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action())
        } else {
            s
        }
    })
}

use macroquad::prelude::*;
use crate::application::{Simulation, Viewport};
use crate::domain::GridState;
use crate::ui::{Button, BUTTON_GAP, BUTTON_HEIGHT, BUTTON_WIDTH, controls_y};

const BACKGROUND: Color = Color::new(0.11, 0.11, 0.12, 1.0);
/// #3c3f41
const GRID_LINE: Color = Color::new(0.235, 0.247, 0.255, 1.0);
const ALIVE: Color = WHITE;

/// Status line shown beside the buttons
pub fn status_text(simulation: &Simulation) -> String {
    format!(
        "{} | gen {} | alive {}",
        if simulation.is_running() { "Running" } else { "Paused" },
        simulation.generation(),
        simulation.grid().population()
    )
}

/// Hovered-cell readout
pub fn coordinates_text(viewport: &Viewport, mouse_pos: (f32, f32)) -> String {
    let (x, y) = viewport.screen_to_grid(mouse_pos.0, mouse_pos.1);
    format!("x: {x} y: {y}")
}

/// Draw grid lines and alive cells
pub fn draw_grid(grid: &GridState, viewport: &Viewport) {
    let (canvas_width, canvas_height) = viewport.canvas_size();
    draw_rectangle(0.0, 0.0, canvas_width, canvas_height, BACKGROUND);

    for y in 0..grid.height() {
        let sy = viewport.to_screen(y);
        draw_line(0.0, sy, canvas_width, sy, 1.0, GRID_LINE);
    }
    for x in 0..grid.width() {
        let sx = viewport.to_screen(x);
        draw_line(sx, 0.0, sx, canvas_height, 1.0, GRID_LINE);
    }

    for (x, y) in grid.alive_cells() {
        draw_rectangle(
            viewport.to_screen(x),
            viewport.to_screen(y),
            viewport.cell_size,
            viewport.cell_size,
            ALIVE,
        );
    }
}

/// Draw buttons, status and the hovered-cell coordinates
pub fn draw_controls(
    simulation: &Simulation,
    viewport: &Viewport,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let text_x = BUTTON_GAP + buttons.len() as f32 * (BUTTON_WIDTH + BUTTON_GAP);
    let y = controls_y(viewport);

    draw_text(&status_text(simulation), text_x, y + 14.0, 18.0, LIGHTGRAY);
    draw_text(
        &coordinates_text(viewport, mouse_pos),
        text_x,
        y + BUTTON_HEIGHT,
        18.0,
        GRAY,
    );
}

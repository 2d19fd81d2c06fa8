use std::sync::OnceLock;
use std::time::Duration;

use macroquad::prelude::*;
use bounded_life::{
    LifeConfig, Simulation, Viewport,
    config::DEFAULT_CONFIG_PATH,
    input, rendering, ui,
};

static CONFIG: OnceLock<LifeConfig> = OnceLock::new();

/// Settings from the path given as first argument, else `life.toml`
fn settings() -> &'static LifeConfig {
    CONFIG.get_or_init(|| {
        let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
        LifeConfig::load_or_default(path)
    })
}

fn viewport(config: &LifeConfig) -> Viewport {
    Viewport::new(config.width, config.height, config.cell_size)
}

fn window_conf() -> Conf {
    // Runs before the async main, so logging starts here
    env_logger::init();

    let (width, height) = ui::window_size(&viewport(settings()));
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: width.ceil() as i32,
        window_height: height.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = settings();
    let viewport = viewport(config);

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };
    log::info!(
        "{}x{} grid, {} ms per generation",
        config.width,
        config.height,
        config.tick_interval_ms
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&simulation, &viewport);

        // Process input
        simulation = input::process_button_clicks(simulation, &buttons, mouse_pos);
        input::handle_cell_toggle(&mut simulation, &viewport, mouse_pos);
        simulation = input::process_keyboard_input(simulation);

        // Update game state
        simulation = simulation.advance(Duration::from_secs_f32(get_frame_time()));

        let buttons = ui::create_buttons(&simulation, &viewport);
        clear_background(BLACK);
        rendering::draw_grid(simulation.grid(), &viewport);
        rendering::draw_controls(&simulation, &viewport, &buttons, mouse_pos);

        next_frame().await;
    }
}

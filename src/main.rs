extern crate sdl2;

use log::{error, info, LevelFilter};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use universe::config::UniverseConfig;
use universe::error::UniverseError;
use universe::logging::init_logging;
use universe::render::{init_graphics, DisplayConfig};
use universe::simulation::{create_rng, FrameTimer, Simulation};

fn run() -> Result<(), UniverseError> {
    let config = UniverseConfig::default();
    config.validate()?;

    // Setup.
    let display_config = DisplayConfig::default();
    let mut graphics = init_graphics(&display_config)?;
    let mut event_pump = graphics
        .sdl_context
        .event_pump()
        .map_err(UniverseError::Sdl)?;

    // Let the window reach its displayed size before placing balls in it.
    event_pump.pump_events();
    let bounds = graphics.bounds()?;
    let mut simulation = Simulation::populate(bounds, &config, create_rng(&config))?;
    let mut timer = FrameTimer::new(config.timer_delay);

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        timer.wait();
        simulation.tick(graphics.bounds()?);
        graphics.render_balls(&simulation, &display_config)?;
    }

    info!("Exiting after {} ticks", simulation.ticks());
    Ok(())
}

pub fn main() {
    if let Err(e) = init_logging(LevelFilter::Info) {
        eprintln!("{}", UniverseError::Logging(e));
    }
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

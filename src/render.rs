extern crate sdl2;

use sdl2::{gfx::primitives::DrawRenderer, pixels::Color};
use std::convert::TryFrom;

use crate::{ball::Ball, bounds::Bounds, error::UniverseError, simulation::Simulation};

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: sdl2::render::Canvas<sdl2::video::Window>,
}

pub struct DisplayConfig {
    pub title: &'static str,
    pub background: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Universe",
            background: Color::RGB(0, 0, 0),
        }
    }
}

fn sdl_error<E: ToString>(e: E) -> UniverseError {
    UniverseError::Sdl(e.to_string())
}

/// Opens a borderless fullscreen window with the mouse cursor hidden.
pub fn init_graphics(display_config: &DisplayConfig) -> Result<Graphics, UniverseError> {
    let sdl_context = sdl2::init().map_err(sdl_error)?;
    let video_subsystem = sdl_context.video().map_err(sdl_error)?;

    let mode = video_subsystem
        .desktop_display_mode(0)
        .map_err(sdl_error)?;
    let window = video_subsystem
        .window(display_config.title, mode.w as u32, mode.h as u32)
        .fullscreen_desktop()
        .borderless()
        .build()
        .map_err(sdl_error)?;
    sdl_context.mouse().show_cursor(false);

    let mut canvas = window.into_canvas().build().map_err(sdl_error)?;
    canvas.set_draw_color(display_config.background);
    canvas.clear();
    canvas.present();

    Ok(Graphics {
        sdl_context,
        canvas,
    })
}

impl Graphics {
    /// The live drawable size of the window.
    pub fn bounds(&self) -> Result<Bounds, UniverseError> {
        self.canvas
            .output_size()
            .map(Bounds::from)
            .map_err(sdl_error)
    }

    pub fn render_balls(
        &mut self,
        simulation: &Simulation,
        display_config: &DisplayConfig,
    ) -> Result<(), UniverseError> {
        self.canvas.set_draw_color(display_config.background);
        self.canvas.clear();
        simulation.try_for_each_ball(|ball| self.fill_oval(ball))?;
        self.canvas.present();
        Ok(())
    }

    /// Fills the ellipse inscribed in the ball's bounding box.
    fn fill_oval(&self, ball: &Ball) -> Result<(), UniverseError> {
        let position = ball.position();
        let radii = ball.size() / 2;
        let color = ball.color();
        self.canvas
            .filled_ellipse(
                saturate(position.x + radii.x),
                saturate(position.y + radii.y),
                saturate(radii.x),
                saturate(radii.y),
                Color::RGB(color.x, color.y, color.z),
            )
            .map_err(sdl_error)
    }
}

fn saturate(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_clamps_to_i16() {
        assert_eq!(saturate(42), 42);
        assert_eq!(saturate(-7), -7);
        assert_eq!(saturate(70_000), i16::MAX);
        assert_eq!(saturate(-70_000), i16::MIN);
    }
}

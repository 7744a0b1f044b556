//! # Display Management
//!
//! The macroquad-backed preview window.

use crate::rendering::{Preview, RenderingMode, Surface};
use crate::{config, Color, GameLabError, GameLabResult, SimulationConfig, Simulator};
use log::{info, warn};
use macroquad::prelude::*;
use std::path::PathBuf;

fn to_macroquad(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Height of the status strip under the canvas, in pixels.
const STATUS_HEIGHT: f32 = 28.0;

/// Draws onto the macroquad window.
pub struct MacroquadSurface {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
}

impl MacroquadSurface {
    /// Acquires the window as a drawing surface.
    ///
    /// Fails when the window reports no drawable area.
    pub fn acquire(width: f32, height: f32) -> GameLabResult<Self> {
        let (window_width, window_height) = (screen_width(), screen_height());
        if window_width <= 0.0 || window_height <= 0.0 {
            return Err(GameLabError::SurfaceUnavailable(format!(
                "window reports {}x{}",
                window_width, window_height
            )));
        }
        Ok(Self { width, height })
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        draw_rectangle(x, y, width, height, to_macroquad(color));
    }

    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        draw_circle(cx, cy, radius, to_macroquad(color));
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        draw_line(x0, y0, x1, y1, thickness, to_macroquad(color));
    }
}

/// Window configuration sized to the preview canvas.
pub fn window_conf() -> Conf {
    Conf {
        window_title: "GameLab Preview".to_string(),
        window_width: config::CANVAS_WIDTH as i32,
        window_height: config::CANVAS_HEIGHT as i32 + STATUS_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Runs the preview loop over a source file until Escape is pressed.
///
/// The preview ticks at most once per [`config::TICK_INTERVAL_MS`]. Space
/// toggles the run flag, R reloads the file from disk.
pub async fn run_preview(path: PathBuf) -> GameLabResult<()> {
    let mut source = std::fs::read_to_string(&path)?;
    let surface = MacroquadSurface::acquire(config::CANVAS_WIDTH as f32, config::CANVAS_HEIGHT as f32);
    let (width, height) = match &surface {
        Ok(surface) => surface.size(),
        Err(_) => (config::CANVAS_WIDTH as f32, config::CANVAS_HEIGHT as f32),
    };
    let simulator = Simulator::new(SimulationConfig::for_canvas(width, height))?;
    let tick_interval = config::TICK_INTERVAL_MS as f64 / 1000.0;
    let mut last_tick = f64::NEG_INFINITY;

    let mut preview = Preview::new(surface, simulator);
    preview.load_source(&source);
    preview.set_running(true);

    info!("Previewing {}", path.display());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if is_key_pressed(KeyCode::Space) {
            let running = !preview.is_running();
            preview.set_running(running);
            info!("Preview {}", if running { "running" } else { "paused" });
        }

        if is_key_pressed(KeyCode::R) {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    source = text;
                    preview.load_source(&source);
                    info!("Reloaded {}", path.display());
                }
                Err(err) => warn!("Could not reload {}: {}", path.display(), err),
            }
        }

        let failure = match preview.mode() {
            RenderingMode::Error(reason) => Some(reason.clone()),
            _ => None,
        };
        match failure {
            Some(reason) => {
                clear_background(BLACK);
                draw_text("Preview unavailable", 10.0, 30.0, 24.0, RED);
                draw_text(&reason, 10.0, 56.0, 16.0, WHITE);
            }
            None if preview.is_running() && get_time() - last_tick >= tick_interval => {
                last_tick = get_time();
                preview.tick(&source);
            }
            None => preview.redraw(),
        }

        render_status(&preview);
        next_frame().await;
    }

    info!("Preview closed");
    Ok(())
}

/// Draws the mode, object count, and frame rate under the canvas.
fn render_status(preview: &Preview<MacroquadSurface>) {
    let y = config::CANVAS_HEIGHT as f32;
    draw_rectangle(0.0, y, screen_width(), STATUS_HEIGHT, DARKGRAY);

    let mode = match preview.mode() {
        RenderingMode::Simulation => "simulation",
        RenderingMode::Real => "real",
        RenderingMode::Error(_) => "error",
    };
    let status = format!(
        "{} | {} | {} objects | {} fps target | {} fps",
        mode,
        if preview.is_running() { "running" } else { "paused" },
        preview.frame().objects.len(),
        preview.frame().frame_rate,
        get_fps()
    );
    draw_text(&status, 8.0, y + 19.0, 16.0, WHITE);
}

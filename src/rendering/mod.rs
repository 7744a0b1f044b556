//! # Rendering Module
//!
//! Draws simulated frames onto a 2D surface and tracks where the preview
//! canvas gets its pixels from.
//!
//! A [`Preview`] starts in [`RenderingMode::Simulation`]. Loading source that
//! imports pygame while a live [`Interpreter`] is attached moves it to
//! [`RenderingMode::Real`]; an interpreter error drops it back to simulation
//! for the rest of that source. If the surface itself cannot be acquired the
//! preview is stuck in [`RenderingMode::Error`] and draws nothing.

pub mod display;

pub use display::*;

use crate::{Color, GameLabError, GameLabResult, SimulationConfig, SimulationFrame, Shape, Simulator};
use log::{info, warn};

/// Drawing primitives the preview needs from a canvas.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    /// Filled circle.
    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color);
}

/// Clears the surface, fills the background, draws every object in order,
/// then overlays the reference grid. Background and grid cover the whole
/// surface.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, frame: &SimulationFrame, config: &SimulationConfig) {
    let (width, height) = surface.size();

    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, config.background);

    for object in &frame.objects {
        match object.shape {
            Shape::Circle { radius } => surface.fill_arc(object.x, object.y, radius, object.color),
            Shape::Rect { width, height } => {
                surface.fill_rect(object.x, object.y, width, height, object.color)
            }
        }
    }

    if config.grid_spacing > 0.0 {
        let mut x = config.grid_spacing;
        while x < width {
            surface.stroke_line(x, 0.0, x, height, 1.0, config.grid_color);
            x += config.grid_spacing;
        }
        let mut y = config.grid_spacing;
        while y < height {
            surface.stroke_line(0.0, y, width, y, 1.0, config.grid_color);
            y += config.grid_spacing;
        }
    }
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    FillArc { cx: f32, cy: f32, radius: f32, color: Color },
    StrokeLine { x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color },
}

/// A surface that records draw calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// Calls recorded since the last clear.
    pub fn current_frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == DrawCall::Clear)
            .unwrap_or(0);
        &self.calls[start..]
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::FillRect { x, y, width, height, color });
    }

    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.calls.push(DrawCall::FillArc { cx, cy, radius, color });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        self.calls.push(DrawCall::StrokeLine { x0, y0, x1, y1, thickness, color });
    }
}

/// Where the preview canvas gets its pixels from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderingMode {
    /// The text-scanning shim
    Simulation,
    /// A live interpreter
    Real,
    /// The surface could not be acquired
    Error(String),
}

/// A live interpreter able to run one frame of a script onto a surface.
pub trait Interpreter {
    fn run_frame(&mut self, source: &str, surface: &mut dyn Surface) -> GameLabResult<()>;
}

/// Whether source text imports pygame.
pub fn imports_pygame(source: &str) -> bool {
    source.lines().map(str::trim_start).any(|line| {
        line.starts_with("import pygame") || line.starts_with("from pygame")
    })
}

/// The preview canvas.
///
/// Owns the surface and the last displayed frame. Each tick replaces the frame
/// wholesale.
pub struct Preview<S: Surface> {
    surface: Option<S>,
    mode: RenderingMode,
    simulator: Simulator,
    interpreter: Option<Box<dyn Interpreter>>,
    running: bool,
    frame: SimulationFrame,
}

impl<S: Surface> Preview<S> {
    /// Creates a stopped preview. A failed surface acquisition puts it in the
    /// terminal error mode.
    pub fn new(surface: GameLabResult<S>, simulator: Simulator) -> Self {
        let frame = SimulationFrame::empty(simulator.config().default_frame_rate);
        let (surface, mode) = match surface {
            Ok(surface) => (Some(surface), RenderingMode::Simulation),
            Err(err) => {
                warn!("Preview unavailable: {}", err);
                (None, RenderingMode::Error(err.to_string()))
            }
        };

        Self {
            surface,
            mode,
            simulator,
            interpreter: None,
            running: false,
            frame,
        }
    }

    /// Attaches a live interpreter.
    pub fn with_interpreter(mut self, interpreter: Box<dyn Interpreter>) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    pub fn mode(&self) -> &RenderingMode {
        &self.mode
    }

    /// The last simulated frame.
    pub fn frame(&self) -> &SimulationFrame {
        &self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Picks the rendering mode for newly loaded source.
    pub fn load_source(&mut self, source: &str) {
        if matches!(self.mode, RenderingMode::Error(_)) {
            return;
        }

        let next = if self.interpreter.is_some() && imports_pygame(source) {
            RenderingMode::Real
        } else {
            RenderingMode::Simulation
        };

        if next != self.mode {
            info!("Preview mode {:?} -> {:?}", self.mode, next);
            self.mode = next;
        }
    }

    /// Renders one frame if the preview is running.
    pub fn tick(&mut self, source: &str) {
        if !self.running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        if self.mode == RenderingMode::Real {
            let result = match self.interpreter.as_mut() {
                Some(interpreter) => interpreter.run_frame(source, surface),
                None => Err(GameLabError::Interpreter("no interpreter attached".to_string())),
            };
            match result {
                Ok(()) => return,
                Err(err) => {
                    warn!("Live preview failed, falling back to simulation: {}", err);
                    self.mode = RenderingMode::Simulation;
                }
            }
        }

        self.frame = self.simulator.simulate(source);
        draw_frame(surface, &self.frame, self.simulator.config());
    }

    /// Draws the last simulated frame again without rescanning.
    pub fn redraw(&mut self) {
        if self.mode != RenderingMode::Simulation {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            draw_frame(surface, &self.frame, self.simulator.config());
        }
    }
}

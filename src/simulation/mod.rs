//! # Simulation Module
//!
//! A canvas preview shim for pygame source text.
//!
//! This does not execute anything. It scans the text line by line for
//! `draw.circle(` and `draw.rect(` calls and turns each hit into an
//! approximate shape:
//!
//! - circles use the center and radius from a positional argument match, or a
//!   default circle when the arguments are not plain numbers;
//! - rectangles are always the fixed default rectangle;
//! - any `speed` or `velocity` token makes every shape sway with the clock.
//!
//! The result is a rough stand-in for real execution, suitable only for a
//! preview that updates while the user types.

pub mod clock;

pub use clock::*;

use crate::{config, Color, GameLabResult};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Geometry of an inferred shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

/// An inferred drawable shape. `x, y` is the center of a circle or the
/// top-left corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationObject {
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl SimulationObject {
    pub fn circle(x: f32, y: f32, radius: f32, color: Color) -> Self {
        Self {
            shape: Shape::Circle { radius },
            x,
            y,
            color,
        }
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            shape: Shape::Rect { width, height },
            x,
            y,
            color,
        }
    }

    /// Radius for circles, width for rectangles.
    pub fn size(&self) -> f32 {
        match self.shape {
            Shape::Circle { radius } => radius,
            Shape::Rect { width, .. } => width,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.shape {
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
        }
    }
}

/// One simulated tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationFrame {
    pub frame_rate: u32,
    pub objects: Vec<SimulationObject>,
}

impl SimulationFrame {
    /// An empty frame at the given rate.
    pub fn empty(frame_rate: u32) -> Self {
        Self {
            frame_rate,
            objects: Vec::new(),
        }
    }
}

impl Default for SimulationFrame {
    fn default() -> Self {
        Self::empty(config::TARGET_FPS)
    }
}

/// Fixed values used by the shim and the preview canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub default_frame_rate: u32,
    /// Radius of the fallback circle, drawn at the canvas center
    pub default_radius: f32,
    /// Color used when a circle call names no recognisable color
    pub default_color: Color,
    pub rect_x: f32,
    pub rect_y: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    pub rect_color: Color,
    /// Horizontal sway in pixels when motion keywords are present
    pub sway_x: f32,
    /// Vertical sway in pixels when motion keywords are present
    pub sway_y: f32,
    pub background: Color,
    pub grid_spacing: f32,
    pub grid_color: Color,
}

impl SimulationConfig {
    /// Defaults scaled to a canvas of the given size.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }

    pub fn canvas_center(&self) -> (f32, f32) {
        (self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            canvas_width: config::CANVAS_WIDTH as f32,
            canvas_height: config::CANVAS_HEIGHT as f32,
            default_frame_rate: config::TARGET_FPS,
            default_radius: 20.0,
            default_color: Color::new(59, 130, 246),
            rect_x: 50.0,
            rect_y: 50.0,
            rect_width: 100.0,
            rect_height: 50.0,
            rect_color: Color::new(34, 197, 94),
            sway_x: 50.0,
            sway_y: 30.0,
            background: Color::new(240, 240, 240),
            grid_spacing: 20.0,
            grid_color: Color::new(220, 220, 220),
        }
    }
}

/// The canvas simulation shim.
///
/// # Examples
///
/// ```
/// use gamelab::{SimulationConfig, Simulator};
///
/// let simulator = Simulator::new(SimulationConfig::default()).unwrap();
/// let frame = simulator.simulate("pygame.draw.circle(screen, RED, (100, 200), 30)");
/// assert_eq!(frame.objects.len(), 1);
/// assert_eq!(frame.objects[0].size(), 30.0);
/// ```
pub struct Simulator {
    config: SimulationConfig,
    clock: Box<dyn Clock>,
    circle_call: Regex,
    rgb_triple: Regex,
    word: Regex,
    frame_rate: Regex,
}

const NUMBER: &str = r"(-?\d+(?:\.\d+)?)";

impl Simulator {
    /// Creates a shim reading the wall clock.
    pub fn new(config: SimulationConfig) -> GameLabResult<Self> {
        let circle_call = format!(
            r"draw\.circle\(\s*[^,()]+,\s*[^,()]*(?:\([^()]*\))?\s*,\s*\(\s*{n}\s*,\s*{n}\s*\)\s*,\s*{n}",
            n = NUMBER
        );
        Ok(Self {
            config,
            clock: Box::new(SystemClock),
            circle_call: Regex::new(&circle_call)?,
            rgb_triple: Regex::new(r"\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)")?,
            word: Regex::new(r"[A-Za-z]+")?,
            frame_rate: Regex::new(r"(?m)\.tick\(\s*(\d+)\s*\)|^\s*FPS\s*=\s*(\d+)\s*$")?,
        })
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Infers one frame of shapes from source text. Never fails: text with no
    /// recognisable calls yields an empty frame at the default rate.
    pub fn simulate(&self, source: &str) -> SimulationFrame {
        let mut objects = Vec::new();

        for line in source.lines() {
            if line.contains("draw.circle(") {
                objects.push(self.circle_from(line));
            } else if line.contains("draw.rect(") {
                objects.push(self.default_rect());
            }
        }

        if source.contains("speed") || source.contains("velocity") {
            let t = self.clock.seconds();
            let dx = (t.sin() as f32) * self.config.sway_x;
            let dy = (t.cos() as f32) * self.config.sway_y;
            for object in &mut objects {
                object.x += dx;
                object.y += dy;
            }
        }

        debug!("Simulated {} object(s)", objects.len());

        SimulationFrame {
            frame_rate: self.frame_rate_of(source),
            objects,
        }
    }

    fn circle_from(&self, line: &str) -> SimulationObject {
        let color = self.color_of(line);
        let parsed = self.circle_call.captures(line).and_then(|captures| {
            let x = captures[1].parse::<f32>().ok()?;
            let y = captures[2].parse::<f32>().ok()?;
            let radius = captures[3].parse::<f32>().ok()?;
            Some((x, y, radius))
        });

        match parsed {
            Some((x, y, radius)) => SimulationObject::circle(x, y, radius, color),
            None => {
                let (cx, cy) = self.config.canvas_center();
                SimulationObject::circle(cx, cy, self.config.default_radius, color)
            }
        }
    }

    fn default_rect(&self) -> SimulationObject {
        SimulationObject::rect(
            self.config.rect_x,
            self.config.rect_y,
            self.config.rect_width,
            self.config.rect_height,
            self.config.rect_color,
        )
    }

    /// First in-range RGB triple, else first color name, else the default.
    fn color_of(&self, line: &str) -> Color {
        let triple = self.rgb_triple.captures_iter(line).find_map(|captures| {
            let r = captures[1].parse::<u8>().ok()?;
            let g = captures[2].parse::<u8>().ok()?;
            let b = captures[3].parse::<u8>().ok()?;
            Some(Color::new(r, g, b))
        });

        triple
            .or_else(|| {
                self.word
                    .find_iter(line)
                    .find_map(|word| Color::named(word.as_str()))
            })
            .unwrap_or(self.config.default_color)
    }

    /// Last positive `tick(N)` or `FPS = N`, else the default.
    fn frame_rate_of(&self, source: &str) -> u32 {
        self.frame_rate
            .captures_iter(source)
            .filter_map(|captures| {
                captures
                    .get(1)
                    .or_else(|| captures.get(2))
                    .and_then(|m| m.as_str().parse::<u32>().ok())
            })
            .filter(|&rate| rate > 0)
            .last()
            .unwrap_or(self.config.default_frame_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn simulator() -> Simulator {
        Simulator::new(SimulationConfig::default())
            .unwrap()
            .with_clock(Box::new(FixedClock::new(0.0)))
    }

    #[test]
    fn test_empty_source() {
        let frame = simulator().simulate("");
        assert_eq!(frame, SimulationFrame::empty(60));
    }

    #[test]
    fn test_unrecognised_source_is_empty() {
        let frame = simulator().simulate("def broken(:\n    ((((\nprint('hi')");
        assert!(frame.objects.is_empty());
        assert_eq!(frame.frame_rate, 60);
    }

    #[test]
    fn test_explicit_circle_with_default_color() {
        let frame = simulator().simulate("pygame.draw.circle(screen, BALL_COLOR, (100, 200), 30)");
        assert_eq!(frame.objects.len(), 1);
        let object = frame.objects[0];
        assert_eq!(object.kind(), "circle");
        assert_eq!((object.x, object.y), (100.0, 200.0));
        assert_eq!(object.size(), 30.0);
        assert_eq!(object.color, SimulationConfig::default().default_color);
    }

    #[test]
    fn test_circle_color_inference() {
        let sim = simulator();
        let named = sim.simulate("pygame.draw.circle(screen, RED, (10, 20), 5)");
        assert_eq!(named.objects[0].color, Color::new(255, 0, 0));

        let triple = sim.simulate("pygame.draw.circle(screen, (12, 34, 56), (10, 20), 5)");
        assert_eq!(triple.objects[0].color, Color::new(12, 34, 56));
        assert_eq!((triple.objects[0].x, triple.objects[0].y), (10.0, 20.0));

        let wrapped = sim.simulate("pygame.draw.circle(screen, pygame.Color(\"yellow\"), (1, 2), 3)");
        assert_eq!(wrapped.objects[0].color, Color::new(255, 255, 0));
        assert_eq!(wrapped.objects[0].size(), 3.0);

        let out_of_range = sim.simulate("pygame.draw.circle(screen, (300, 0, 0), (1, 2), 3)");
        assert_eq!(out_of_range.objects[0].color, SimulationConfig::default().default_color);
    }

    #[test]
    fn test_unparsable_circle_falls_back_to_default() {
        let frame = simulator().simulate("pygame.draw.circle(screen, color, (ball.x, ball.y), r)");
        let config = SimulationConfig::default();
        let object = frame.objects[0];
        assert_eq!((object.x, object.y), config.canvas_center());
        assert_eq!(object.size(), config.default_radius);
    }

    #[test]
    fn test_fallback_circle_centers_on_configured_canvas() {
        let simulator = Simulator::new(SimulationConfig::for_canvas(200.0, 100.0))
            .unwrap()
            .with_clock(Box::new(FixedClock::new(0.0)));
        let frame = simulator.simulate("pygame.draw.circle(screen, color, pos, r)");
        assert_eq!((frame.objects[0].x, frame.objects[0].y), (100.0, 50.0));
    }

    #[test]
    fn test_rect_is_always_default() {
        let frame = simulator().simulate(
            "pygame.draw.rect(screen, (255, 0, 0), (300, 10, 5, 5))\npygame.draw.rect(screen, BLUE, player)",
        );
        let config = SimulationConfig::default();
        assert_eq!(frame.objects.len(), 2);
        for object in &frame.objects {
            assert_eq!(object.kind(), "rect");
            assert_eq!((object.x, object.y), (config.rect_x, config.rect_y));
            assert_eq!(
                object.shape,
                Shape::Rect {
                    width: config.rect_width,
                    height: config.rect_height
                }
            );
            assert_eq!(object.color, config.rect_color);
        }
    }

    #[test]
    fn test_objects_keep_line_order() {
        let frame = simulator().simulate(
            "pygame.draw.rect(screen, RED, r)\npygame.draw.circle(screen, RED, (5, 5), 5)\n",
        );
        let kinds: Vec<_> = frame.objects.iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, vec!["rect", "circle"]);
    }

    #[test]
    fn test_motion_keywords_sway_with_time() {
        let clock = Rc::new(FixedClock::new(0.0));
        let sim = Simulator::new(SimulationConfig::default())
            .unwrap()
            .with_clock(Box::new(Rc::clone(&clock)));
        let source = "velocity = 3\npygame.draw.circle(screen, RED, (100, 100), 10)";

        let first = sim.simulate(source);
        // t = 0: sin 0 = 0, cos 0 = 1
        assert_eq!(first.objects[0].x, 100.0);
        assert_eq!(first.objects[0].y, 130.0);

        clock.advance(1.0);
        let second = sim.simulate(source);
        assert_ne!(first.objects[0], second.objects[0]);
    }

    #[test]
    fn test_static_source_ignores_time() {
        let clock = Rc::new(FixedClock::new(0.0));
        let sim = Simulator::new(SimulationConfig::default())
            .unwrap()
            .with_clock(Box::new(Rc::clone(&clock)));
        let source = "pygame.draw.circle(screen, RED, (100, 100), 10)";
        let first = sim.simulate(source);
        clock.advance(2.0);
        assert_eq!(first, sim.simulate(source));
    }

    #[test]
    fn test_frame_rate_detection() {
        let sim = simulator();
        assert_eq!(sim.simulate("clock.tick(30)").frame_rate, 30);
        assert_eq!(sim.simulate("FPS = 24\nclock.tick(FPS)").frame_rate, 24);
        assert_eq!(sim.simulate("FPS = 24\nclock.tick(50)").frame_rate, 50);
        assert_eq!(sim.simulate("clock.tick(0)").frame_rate, 60);
    }
}

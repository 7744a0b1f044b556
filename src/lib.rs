//! # GameLab
//!
//! The code-generation and preview core of a pygame learning platform.
//!
//! ## Architecture Overview
//!
//! GameLab is split into a few small pieces that feed into each other:
//!
//! - **Catalog**: the registry of reusable gameplay components and their variants
//! - **Assembler**: stitches selected variants into one runnable pygame script
//! - **Simulation**: a heuristic shim that scans source text for drawing calls
//! - **Rendering**: draws simulated frames onto a 2D surface and tracks the preview mode
//!
//! The registry is constructed once by the host and borrowed by the assembler.
//! Nothing here keeps ambient global state.

pub mod assembler;
pub mod catalog;
pub mod input;
pub mod rendering;
pub mod simulation;
pub mod utils;

pub use assembler::*;
pub use catalog::*;
pub use input::*;
pub use rendering::*;
pub use simulation::*;
pub use utils::*;

/// Core error type for the GameLab engine.
#[derive(thiserror::Error, Debug)]
pub enum GameLabError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A text pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// No component with this id is registered
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// The component exists but has no such variant
    #[error("Variant '{variant}' not found for component '{component}'")]
    VariantNotFound { component: String, variant: char },

    /// A component with this id is already registered
    #[error("Duplicate component: {0}")]
    DuplicateComponent(String),

    /// A selection overrides a parameter the variant does not declare
    #[error("Unknown parameter '{parameter}' for component '{component}'")]
    UnknownParameter { component: String, parameter: String },

    /// A selection overrides a parameter with a value of the wrong kind
    #[error("Parameter '{parameter}' of component '{component}' expects {expected}, got {found}")]
    ParameterType {
        component: String,
        parameter: String,
        expected: ParamKind,
        found: ParamKind,
    },

    /// A selection binds an asset slot the variant does not declare
    #[error("Unknown asset slot '{slot}' for component '{component}'")]
    UnknownAsset { component: String, slot: String },

    /// A placeholder survived substitution
    #[error("Unresolved placeholder ${{{0}}}")]
    UnresolvedPlaceholder(String),

    /// A template or parameter declaration is inconsistent
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// Scene configuration is invalid
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Color text could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The drawing surface could not be acquired
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A command-line selection or override could not be parsed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The live interpreter raised an error
    #[error("Interpreter error: {0}")]
    Interpreter(String),
}

/// Result type used throughout the GameLab codebase.
pub type GameLabResult<T> = Result<T, GameLabError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default generated window width in pixels
    pub const DEFAULT_SCENE_WIDTH: u32 = 800;

    /// Default generated window height in pixels
    pub const DEFAULT_SCENE_HEIGHT: u32 = 600;

    /// Default background of generated scenes
    pub const DEFAULT_BACKGROUND: &str = "#1e1e2e";

    /// Frames per second target for generated games and the preview loop
    pub const TARGET_FPS: u32 = 60;

    /// Interval between preview ticks in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Preview canvas width in pixels
    pub const CANVAS_WIDTH: u32 = 400;

    /// Preview canvas height in pixels
    pub const CANVAS_HEIGHT: u32 = 300;
}

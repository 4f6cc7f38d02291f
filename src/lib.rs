//! Flappy - a minimal Flappy Bird clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe queue, autopilot)
//! - `game_loop`: Render → advance → input sequencing at a fixed tick rate
//! - `renderer`: Frame description and the wgpu backend that draws it
//! - `input`: Discrete input events and their sources
//! - `platform`: Native window/event loop glue
//! - `settings`: Data-driven game options and asset paths
//! - `assets`: Image loading

pub mod assets;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AppError, AssetError, RenderError, SettingsError};
pub use game_loop::{FramePacer, GameLoop, LoopState};
pub use input::{EventQueue, InputEvent, InputSource, ScriptedInput};
pub use settings::{AssetPaths, Settings};

/// Game configuration constants
pub mod consts {
    /// Default window dimensions
    pub const SCREEN_WIDTH: u32 = 864;
    pub const SCREEN_HEIGHT: u32 = 936;

    /// Default simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Bird defaults
    pub const GRAVITY: f32 = 1.0;
    pub const FLAP_STRENGTH: f32 = -10.0;
    /// Bird is drawn at a fixed column
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_RADIUS: f32 = 15.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 70.0;
    pub const PIPE_GAP_SIZE: f32 = 200.0;
    pub const PIPE_SPEED: f32 = 4.0;
    /// Inclusive range for a pipe's gap top
    pub const GAP_TOP_MIN: i32 = 100;
    pub const GAP_TOP_MAX: i32 = 400;
    /// A new pipe spawns once the newest one is this far left of the right edge
    pub const PIPE_SPAWN_SPACING: f32 = 300.0;

    /// Ground scrolling
    pub const GROUND_SCROLL_SPEED: f32 = 4.0;
    /// Ground texture tiles every 35px; offset wraps past this
    pub const GROUND_WRAP: f32 = 35.0;
    pub const GROUND_Y: f32 = 768.0;
}

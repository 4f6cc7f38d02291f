//! Rendering module
//!
//! The game loop hands each tick's [`Frame`] to a [`Renderer`]. The wgpu backend
//! lives in `pipeline`; `HeadlessRenderer` only logs.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use crate::error::RenderError;
pub use frame::{DrawCommand, Frame};
pub use pipeline::RenderState;

/// Draws frames. Side effects only.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Renderer without a display: counts frames and logs a summary now and then
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    /// Log every n-th frame at debug level (0 = never)
    pub log_every: u64,
}

impl HeadlessRenderer {
    pub fn new(log_every: u64) -> Self {
        Self {
            frames: 0,
            log_every,
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frames += 1;
        if self.log_every > 0 && self.frames % self.log_every == 0 {
            let bird = frame.commands.iter().find_map(|cmd| match cmd {
                DrawCommand::Circle { center, .. } => Some(center.y),
                _ => None,
            });
            log::debug!(
                "Frame {}: {} commands, bird y = {:?}",
                self.frames,
                frame.len(),
                bird
            );
        }
        Ok(())
    }
}

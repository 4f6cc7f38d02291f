//! Frame description
//!
//! A frame is the ordered list of primitives to draw for one tick. Building it
//! is pure, so layout is testable without a GPU.

use glam::Vec2;

use super::vertex::colors;
use crate::assets::AssetId;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::GameState;

/// One primitive, in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// An image at its natural size
    Image { asset: AssetId, origin: Vec2 },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Everything drawn in one tick, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Lay out background, pipes, bird and ground for the current state.
    ///
    /// The bottom pipe is `screen_height` tall no matter where its gap ends;
    /// the part past the screen edge is clipped away by the viewport.
    pub fn build(state: &GameState, settings: &Settings) -> Self {
        let screen_height = settings.screen_height as f32;
        let mut commands = Vec::with_capacity(3 + state.pipes.len() * 2);

        commands.push(DrawCommand::Image {
            asset: AssetId::Background,
            origin: Vec2::ZERO,
        });

        for pipe in &state.pipes {
            commands.push(DrawCommand::Rect {
                origin: Vec2::new(pipe.x, 0.0),
                size: Vec2::new(settings.pipe_width, pipe.gap_top),
                color: colors::PIPE,
            });
            commands.push(DrawCommand::Rect {
                origin: Vec2::new(pipe.x, pipe.gap_top + settings.pipe_gap_size),
                size: Vec2::new(settings.pipe_width, screen_height),
                color: colors::PIPE,
            });
        }

        commands.push(DrawCommand::Circle {
            center: Vec2::new(BIRD_X, state.bird.y),
            radius: BIRD_RADIUS,
            color: colors::BIRD,
        });

        commands.push(DrawCommand::Image {
            asset: AssetId::Ground,
            origin: Vec2::new(state.ground_offset, GROUND_Y),
        });

        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

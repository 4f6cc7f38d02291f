//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Textured, tinted 2D vertex.
///
/// `position` is in screen pixels (y down) until [`Vertex::to_ndc`] maps it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(position: Vec2, uv: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: [position.x, position.y],
            uv: [uv.x, uv.y],
            color,
        }
    }

    /// Map pixel coordinates of a `screen`-sized play area to normalized device coordinates
    pub fn to_ndc(self, screen: Vec2) -> Self {
        let x = self.position[0] / screen.x * 2.0 - 1.0;
        let y = 1.0 - self.position[1] / screen.y * 2.0;
        Self {
            position: [x, y],
            ..self
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, uv) as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, color) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PIPE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BIRD: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Untinted texture
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Clear color behind the background image
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        let screen = Vec2::new(864.0, 936.0);
        let top_left = Vertex::new(Vec2::ZERO, Vec2::ZERO, colors::WHITE).to_ndc(screen);
        assert_eq!(top_left.position, [-1.0, 1.0]);

        let bottom_right = Vertex::new(screen, Vec2::ONE, colors::WHITE).to_ndc(screen);
        assert_eq!(bottom_right.position, [1.0, -1.0]);
        assert_eq!(bottom_right.uv, [1.0, 1.0]);

        let center = Vertex::new(screen / 2.0, Vec2::ZERO, colors::PIPE).to_ndc(screen);
        assert_eq!(center.position, [0.0, 0.0]);
        assert_eq!(center.color, colors::PIPE);
    }

    #[test]
    fn test_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride, 32);
        assert_eq!(desc.attributes[1].offset, 8);
        assert_eq!(desc.attributes[2].offset, 16);
        assert_eq!(
            desc.attributes[2].offset as usize,
            std::mem::size_of::<[f32; 2]>() * 2
        );
    }
}

//! Shape generation for 2D primitives
//!
//! Turns a [`Frame`] into one vertex list plus draw batches, one batch per run
//! of commands sharing a texture.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec2;

use super::frame::{DrawCommand, Frame};
use super::vertex::{Vertex, colors};
use crate::assets::AssetId;

/// Segments used for the bird circle
pub const CIRCLE_SEGMENTS: usize = 32;

/// Texture a batch samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    /// 1x1 white; vertex color shows through
    White,
    Asset(AssetId),
}

/// A contiguous vertex range drawn with one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: TextureSlot,
    pub vertices: Range<u32>,
}

/// Two triangles covering an axis-aligned rectangle
pub fn quad(origin: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = origin;
    let max = origin + size;
    let tl = Vertex::new(min, Vec2::new(0.0, 0.0), color);
    let tr = Vertex::new(Vec2::new(max.x, min.y), Vec2::new(1.0, 0.0), color);
    let bl = Vertex::new(Vec2::new(min.x, max.y), Vec2::new(0.0, 1.0), color);
    let br = Vertex::new(max, Vec2::new(1.0, 1.0), color);
    [tl, bl, tr, tr, bl, br]
}

/// Filled circle as a triangle fan unrolled into a list
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: usize) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments * 3);
    let uv = Vec2::splat(0.5);

    for i in 0..segments {
        let a1 = i as f32 / segments as f32 * TAU;
        let a2 = (i + 1) as f32 / segments as f32 * TAU;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
        let p2 = center + Vec2::new(a2.cos(), a2.sin()) * radius;

        vertices.push(Vertex::new(center, uv, color));
        vertices.push(Vertex::new(p1, uv, color));
        vertices.push(Vertex::new(p2, uv, color));
    }

    vertices
}

/// Tessellate a frame. `image_size` gives the natural pixel size of each asset.
pub fn tessellate(
    frame: &Frame,
    image_size: impl Fn(AssetId) -> Vec2,
) -> (Vec<Vertex>, Vec<Batch>) {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut batches: Vec<Batch> = Vec::new();

    for command in &frame.commands {
        let start = vertices.len() as u32;
        let texture = match *command {
            DrawCommand::Image { asset, origin } => {
                vertices.extend(quad(origin, image_size(asset), colors::WHITE));
                TextureSlot::Asset(asset)
            }
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => {
                vertices.extend(quad(origin, size, color));
                TextureSlot::White
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                vertices.extend(circle(center, radius, color, CIRCLE_SEGMENTS));
                TextureSlot::White
            }
        };
        let end = vertices.len() as u32;

        match batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.end = end,
            _ => batches.push(Batch {
                texture,
                vertices: start..end,
            }),
        }
    }

    (vertices, batches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_quad_covers_rect() {
        let verts = quad(Vec2::new(10.0, 20.0), Vec2::new(70.0, 30.0), colors::PIPE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 80.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 50.0);
        assert!(verts.iter().all(|v| v.color == colors::PIPE));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 468.0);
        let verts = circle(center, 15.0, colors::BIRD, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let p = Vec2::from(v.position);
            assert!(p.distance(center) <= 15.0 + 1e-3);
        }
        // Degenerate segment counts are bumped to a triangle
        assert_eq!(circle(center, 1.0, colors::BIRD, 0).len(), 9);
    }

    #[test]
    fn test_tessellate_batches_by_texture() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 3);
        let frame = Frame::build(&state, &settings);

        let (vertices, batches) = tessellate(&frame, |asset| match asset {
            AssetId::Background => Vec2::new(864.0, 936.0),
            AssetId::Ground => Vec2::new(900.0, 168.0),
        });

        // background | pipes + bird | ground
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].texture, TextureSlot::Asset(AssetId::Background));
        assert_eq!(batches[0].vertices, 0..6);
        assert_eq!(batches[1].texture, TextureSlot::White);
        assert_eq!(batches[1].vertices, 6..(6 + 12 + CIRCLE_SEGMENTS as u32 * 3));
        assert_eq!(batches[2].texture, TextureSlot::Asset(AssetId::Ground));
        assert_eq!(batches[2].vertices.end as usize, vertices.len());

        // Ground quad uses the image's natural size at y = 768
        let ground = &vertices[batches[2].vertices.start as usize..];
        let max_y = ground.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(max_y, 768.0 + 168.0);
    }

    #[test]
    fn test_empty_frame() {
        let (vertices, batches) = tessellate(&Frame::default(), |_| Vec2::ONE);
        assert!(vertices.is_empty());
        assert!(batches.is_empty());
    }
}

//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// 8-bit RGB to normalized RGBA
pub fn rgba(rgb: [u8; 3], alpha: f32) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha,
    ]
}

/// Colors for HUD and trail
pub mod colors {
    pub const TRAIL: [u8; 3] = [0, 255, 255];
    pub const SCORE: [u8; 3] = [255, 255, 255];
    pub const TIMER: [u8; 3] = [255, 255, 0];
    pub const GAME_OVER: [u8; 3] = [255, 0, 0];
    pub const FINAL_SCORE: [u8; 3] = [255, 255, 255];
    pub const RESTART_HINT: [u8; 3] = [0, 255, 0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_byte_layout() {
        let verts = [Vertex::new(1.0, 2.0, [0.0, 0.5, 1.0, 1.0]); 3];
        assert_eq!(as_bytes(&verts).len(), 3 * 6 * 4);
    }

    #[test]
    fn test_rgba() {
        assert_eq!(rgba([255, 0, 255], 0.5), [1.0, 0.0, 1.0, 0.5]);
    }
}

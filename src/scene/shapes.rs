//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for the fingertip trail as a constant-width ribbon
///
/// Points are oldest first. Fewer than two points draw nothing.
pub fn trail_ribbon(trail: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if trail.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((trail.len() - 1) * 6);

    for pair in trail.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        // Direction from p1 to p2
        let dir = (p2 - p1).normalize_or_zero();
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;

        // Quad corners
        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Segment count that keeps a circle's edge smooth at its size
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 0.8) as u32).clamp(12, 64)
}

//! Shape generation for 2D primitives
//!
//! Flattens a projected [`Frame`] into line-list and triangle-list vertices.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::Frame;

#[inline]
fn vertex(p: Vec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x, p.y, color)
}

/// Grid lines as a line list (two vertices per segment)
pub fn line_vertices(frame: &Frame) -> Vec<Vertex> {
    frame
        .lines
        .iter()
        .flat_map(|[a, b]| [vertex(*a, colors::GRID_LINE), vertex(*b, colors::GRID_LINE)])
        .collect()
}

/// Two triangles covering a quad given in winding order
pub fn quad(corners: &[Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = *corners;
    [
        vertex(a, color),
        vertex(b, color),
        vertex(c, color),
        vertex(a, color),
        vertex(c, color),
        vertex(d, color),
    ]
}

/// Tiles then the ship as a triangle list
pub fn triangle_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.tiles.len() * 6 + 3);

    for tile in &frame.tiles {
        vertices.extend(quad(tile, colors::TILE));
    }

    // Ship last so it draws over the track
    vertices.extend(frame.ship.iter().map(|p| vertex(*p, colors::SHIP)));

    vertices
}

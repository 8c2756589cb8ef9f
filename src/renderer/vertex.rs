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

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// View a vertex list as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const GRID_LINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TILE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}

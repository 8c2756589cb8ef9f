//! Rendering glue
//!
//! Turns projected geometry into vertex lists. No GPU backend lives here;
//! the host uploads the buffers however it draws.

pub mod shapes;
pub mod vertex;

pub use shapes::{line_vertices, quad, triangle_vertices};
pub use vertex::{Vertex, as_bytes, colors};

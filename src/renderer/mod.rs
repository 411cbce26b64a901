//! WebGPU rendering module
//!
//! Every shape is a colored square. Vertices are generated on the CPU in
//! normalized device coordinates and drawn by a single pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{background, gradient_color, scene, square};
pub use vertex::{Vertex, colors};

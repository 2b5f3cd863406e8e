//! WebGPU rendering module
//!
//! Flat-colored triangle lists built in screen space and mapped to NDC at
//! upload time.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::build_scene;
pub use vertex::Vertex;

//! Rendering module
//!
//! `scene` turns simulation + UI state into a vertex list; `pipeline` owns
//! the wgpu surface and uploads it. Shape tessellation lives in `shapes`.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;

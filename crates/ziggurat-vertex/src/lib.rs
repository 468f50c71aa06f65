//! Fixed-capacity vertex storage for a wgpu rendering pipeline.
//!
//! This crate owns the CPU side of vertex data: a bump-allocated,
//! fixed-capacity store of [`Vertex`] records ([`VertexStore`]) and the
//! pairing of that store with the GPU buffer mirroring it
//! ([`GpuVertexStore`]). Pipelines, uploads, and the render loop belong to
//! the embedding application; this crate hands out raw regions and the
//! buffer handle.

pub mod gpu;
pub mod logging;
pub mod store;
pub mod vertex;

pub use gpu::GpuVertexStore;
pub use store::{Arena, VertexStore, DEFAULT_VERTEX_CAPACITY};
pub use vertex::Vertex;

use std::ops::{Deref, DerefMut};

use anyhow::Result;

use crate::store::VertexStore;
use crate::vertex::Vertex;

/// A [`VertexStore`] paired with the `wgpu::Buffer` that mirrors it in
/// GPU-addressable memory.
///
/// The pairing is lifecycle-only: allocation and population happen on the
/// CPU side through the embedded store (available via deref), and the
/// buffer handle is exposed for the rendering code that performs uploads
/// and binds. This type never writes, resizes, or destroys the buffer;
/// keeping the two regions in sync is the uploader's job.
///
/// `wgpu::Buffer` is internally reference counted. The handle held here is
/// a shared reference: dropping the store releases nothing that the rest
/// of the renderer still holds, and the store never calls `destroy()`.
pub struct GpuVertexStore {
    store: VertexStore,
    buffer: wgpu::Buffer,
}

impl GpuVertexStore {
    /// Creates a store of `capacity` slots paired with `buffer`.
    ///
    /// The handle is recorded as-is. Provisioning a buffer of at least
    /// [`Self::buffer_size_for`]`(capacity)` bytes (usage
    /// `VERTEX | COPY_DST`) is the caller's responsibility, performed
    /// before or alongside construction; no size or usage check happens
    /// here.
    pub fn new(capacity: usize, buffer: wgpu::Buffer) -> Result<Self> {
        Ok(Self {
            store: VertexStore::new(capacity)?,
            buffer,
        })
    }

    /// The paired GPU buffer, for upload and bind calls.
    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Byte size a buffer paired with a `capacity`-slot store is expected
    /// to have.
    #[inline]
    pub fn buffer_size_for(capacity: usize) -> wgpu::BufferAddress {
        (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress
    }
}

impl Deref for GpuVertexStore {
    type Target = VertexStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for GpuVertexStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

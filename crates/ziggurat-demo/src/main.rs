//! Headless demo: plays the "external rendering collaborator" role.
//!
//! Acquires a device, provisions a vertex buffer of matching byte size,
//! populates a [`GpuVertexStore`] through bump allocation, and uploads the
//! populated prefix with `queue.write_buffer`. No window, no pipeline;
//! just the storage/upload path end to end.

use anyhow::{Context, Result};
use ziggurat_vertex::{logging, GpuVertexStore, Vertex, DEFAULT_VERTEX_CAPACITY};

fn main() -> Result<()> {
    logging::init();

    let (device, queue) = pollster::block_on(acquire_gpu())?;

    // Provision the GPU-side buffer. The store records the handle but never
    // manages the device memory behind it.
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ziggurat demo vbo"),
        size: GpuVertexStore::buffer_size_for(DEFAULT_VERTEX_CAPACITY),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let mut store = GpuVertexStore::new(DEFAULT_VERTEX_CAPACITY, buffer)
        .context("failed to create vertex store")?;

    // One red triangle.
    let triangle = store
        .alloc(3)
        .context("vertex store exhausted while building demo geometry")?;
    triangle[0] = Vertex::new([0.0, 0.5, 0.0], [255, 0, 0, 255]);
    triangle[1] = Vertex::new([-0.5, -0.5, 0.0], [255, 0, 0, 255]);
    triangle[2] = Vertex::new([0.5, -0.5, 0.0], [255, 0, 0, 255]);

    // A green quad, two triangles.
    let quad = store
        .alloc(6)
        .context("vertex store exhausted while building demo geometry")?;
    let green = [0, 255, 0, 255];
    quad[0] = Vertex::new([0.6, 0.6, 0.0], green);
    quad[1] = Vertex::new([0.9, 0.6, 0.0], green);
    quad[2] = Vertex::new([0.9, 0.9, 0.0], green);
    quad[3] = Vertex::new([0.6, 0.6, 0.0], green);
    quad[4] = Vertex::new([0.9, 0.9, 0.0], green);
    quad[5] = Vertex::new([0.6, 0.9, 0.0], green);

    queue.write_buffer(store.buffer(), 0, bytemuck::cast_slice(store.filled()));
    queue.submit(std::iter::empty());

    log::info!(
        "uploaded {} of {} vertex slots ({} bytes)",
        store.len(),
        store.capacity(),
        store.len() * std::mem::size_of::<Vertex>()
    );

    Ok(())
}

/// Headless adapter/device acquisition (no surface; any backend).
async fn acquire_gpu() -> Result<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .context("failed to find a suitable GPU adapter")?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("ziggurat demo device"),
            ..Default::default()
        })
        .await
        .context("failed to create wgpu device/queue")?;

    Ok((device, queue))
}

use bytemuck::{Pod, Zeroable};

/// Vertex record consumed by the pipeline: position + 8-bit RGBA color.
///
/// The layout is load-bearing: `#[repr(C)]` with `position` at offset 0 and
/// `color` at offset 12, 16-byte stride, no padding. Raw `[Vertex]` regions
/// are handed to buffer uploads as-is, so field order and widths must stay
/// in sync with [`Vertex::layout`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in whatever space the pipeline expects (commonly model space).
    pub position: [f32; 3],

    /// RGBA color, one byte per channel (0–255).
    ///
    /// Declared to the pipeline as `Unorm8x4`, so shaders see it normalized
    /// to [0, 1]. The type itself does not constrain channel values.
    pub color: [u8; 4],
}

impl Vertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [u8; 4]) -> Self {
        Self { position, color }
    }

    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Unorm8x4   // color
    ];

    /// Vertex buffer layout matching this record, for pipeline creation.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

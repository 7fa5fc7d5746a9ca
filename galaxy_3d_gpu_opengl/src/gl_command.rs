/// Command records - closed set of commands a command buffer can hold
///
/// Records carry plain OpenGL names and tokens captured at encode time, never
/// references to resources, so a command buffer has no borrow on them.
/// Labels are owned copies, dropped with the record.

use crate::gl_pipeline::PipelineState;
use galaxy_3d_gpu::galaxy3d::gpu::{IndexType, PrimitiveType, MAX_COLOR_ATTACHMENTS};

/// Size of the tag preceding every record in the byte accounting
pub const RECORD_TAG_SIZE: usize = 4;

/// One color slot of a render pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorTarget {
    /// Texture name, 0 leaves the slot unbound
    pub texture: u32,
    pub clear: Option<[f32; 4]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartRenderPass {
    pub colors: [ColorTarget; MAX_COLOR_ATTACHMENTS],
    pub color_count: usize,
    pub depth: u32,
    pub clear_depth: Option<f32>,
    pub stencil: u32,
    pub clear_stencil: Option<i32>,
    /// Attachments whose previous contents are discarded
    pub invalidate: Vec<u32>,
    pub label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SetPipeline {
    pub vertex_array: u32,
    pub program: u32,
    pub state: PipelineState,
    pub label: Option<String>,
}

/// Viewport, Y already flipped to a bottom-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub znear: f64,
    pub zfar: f64,
}

/// Scissor rectangle, Y already flipped to a bottom-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScissor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBuffer {
    pub index: u32,
    pub buffer: u32,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetMesh {
    pub buffer: u32,
    pub offset: usize,
    pub stride: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub primitive: PrimitiveType,
    pub first: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawIndexed {
    pub primitive: PrimitiveType,
    pub index_buffer: u32,
    pub index_type: IndexType,
    /// Byte offset into the index buffer
    pub offset: usize,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstanced {
    pub primitive: PrimitiveType,
    pub first: u32,
    pub count: u32,
    pub instance_count: u32,
    pub base_instance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawIndexedInstanced {
    pub primitive: PrimitiveType,
    pub index_buffer: u32,
    pub index_type: IndexType,
    pub offset: usize,
    pub count: u32,
    pub instance_count: u32,
    pub base_vertex: i32,
    pub base_instance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillBuffer {
    pub buffer: u32,
    pub offset: usize,
    pub size: usize,
    pub value: u8,
}

/// Texel region of one texture for `glCopyImageSubData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRegion {
    pub texture: u32,
    pub target: u32,
    pub level: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTexture {
    pub src: ImageRegion,
    pub dst: ImageRegion,
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyBuffer {
    pub src: u32,
    pub src_offset: usize,
    pub dst: u32,
    pub dst_offset: usize,
    pub size: usize,
}

/// Upload from a buffer bound as pixel unpack source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyBufferToTexture {
    pub buffer: u32,
    pub src_offset: usize,
    /// Bytes between two rows in the buffer
    pub src_pitch: u32,
    pub texture: u32,
    pub level: i32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub data_format: u32,
    pub data_type: u32,
}

#[derive(Debug, Clone)]
pub enum Command {
    StartRenderPass(StartRenderPass),
    SetPipeline(SetPipeline),
    SetViewport(SetViewport),
    SetScissor(SetScissor),
    SetBlendConstant([f32; 4]),
    SetBuffer(SetBuffer),
    SetSampler { unit: u32, sampler: u32 },
    SetTexture { unit: u32, texture: u32 },
    SetMesh(SetMesh),
    Draw(Draw),
    DrawIndexed(DrawIndexed),
    DrawInstanced(DrawInstanced),
    DrawIndexedInstanced(DrawIndexedInstanced),
    EndRenderPass,
    StartBlitPass { label: Option<String> },
    FillBuffer(FillBuffer),
    GenerateMipmaps { texture: u32 },
    CopyTexture(CopyTexture),
    CopyBuffer(CopyBuffer),
    CopyBufferToTexture1D(CopyBufferToTexture),
    CopyBufferToTexture2D(CopyBufferToTexture),
    EndBlitPass,
    /// End-of-stream marker appended at submit
    End,
}

impl Command {
    /// Bytes this record accounts for in its command buffer
    ///
    /// Tag plus fixed payload. Labels are separate heap copies and not counted.
    pub fn encoded_size(&self) -> usize {
        use std::mem::size_of;
        let payload = match self {
            Command::StartRenderPass(_) => size_of::<StartRenderPass>(),
            Command::SetPipeline(_) => size_of::<SetPipeline>(),
            Command::SetViewport(_) => size_of::<SetViewport>(),
            Command::SetScissor(_) => size_of::<SetScissor>(),
            Command::SetBlendConstant(_) => size_of::<[f32; 4]>(),
            Command::SetBuffer(_) => size_of::<SetBuffer>(),
            Command::SetSampler { .. } | Command::SetTexture { .. } => size_of::<[u32; 2]>(),
            Command::SetMesh(_) => size_of::<SetMesh>(),
            Command::Draw(_) => size_of::<Draw>(),
            Command::DrawIndexed(_) => size_of::<DrawIndexed>(),
            Command::DrawInstanced(_) => size_of::<DrawInstanced>(),
            Command::DrawIndexedInstanced(_) => size_of::<DrawIndexedInstanced>(),
            Command::StartBlitPass { .. } => size_of::<Option<String>>(),
            Command::FillBuffer(_) => size_of::<FillBuffer>(),
            Command::GenerateMipmaps { .. } => size_of::<u32>(),
            Command::CopyTexture(_) => size_of::<CopyTexture>(),
            Command::CopyBuffer(_) => size_of::<CopyBuffer>(),
            Command::CopyBufferToTexture1D(_) | Command::CopyBufferToTexture2D(_) => {
                size_of::<CopyBufferToTexture>()
            }
            Command::EndRenderPass | Command::EndBlitPass | Command::End => 0,
        };
        RECORD_TAG_SIZE + payload
    }

    /// Record name used in trace logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartRenderPass(_) => "start render pass",
            Command::SetPipeline(_) => "set pipeline",
            Command::SetViewport(_) => "set viewport",
            Command::SetScissor(_) => "set scissor",
            Command::SetBlendConstant(_) => "set blend constant",
            Command::SetBuffer(_) => "set buffer",
            Command::SetSampler { .. } => "set sampler",
            Command::SetTexture { .. } => "set texture",
            Command::SetMesh(_) => "set mesh",
            Command::Draw(_) => "draw",
            Command::DrawIndexed(_) => "draw indexed",
            Command::DrawInstanced(_) => "draw instanced",
            Command::DrawIndexedInstanced(_) => "draw indexed instanced",
            Command::EndRenderPass => "end render pass",
            Command::StartBlitPass { .. } => "start blit pass",
            Command::FillBuffer(_) => "fill buffer",
            Command::GenerateMipmaps { .. } => "generate mipmaps",
            Command::CopyTexture(_) => "copy texture",
            Command::CopyBuffer(_) => "copy buffer",
            Command::CopyBufferToTexture1D(_) => "copy buffer to texture 1d",
            Command::CopyBufferToTexture2D(_) => "copy buffer to texture 2d",
            Command::EndBlitPass => "end blit pass",
            Command::End => "end",
        }
    }
}

/// CommandBuffer - records commands for deferred replay at submit
///
/// Nothing reaches OpenGL while recording. Every encoder call appends one
/// `Command` to the command buffer's arena; the executor replays them in
/// order when the command buffer is submitted.
///
/// Render pass state needed while encoding (primitive, vertex stride,
/// target height for the Y flip) lives in the command buffer next to the
/// arena, so growing the arena never invalidates it.

use crate::gl_buffer::{Buffer, CpuBuffer};
use crate::gl_command::{
    ColorTarget, Command, CopyBuffer, CopyBufferToTexture, CopyTexture, Draw, DrawIndexed,
    DrawIndexedInstanced, DrawInstanced, FillBuffer, ImageRegion, SetBuffer, SetMesh, SetPipeline,
    SetScissor, SetViewport, StartRenderPass, RECORD_TAG_SIZE,
};
use crate::gl_format;
use crate::gl_pipeline::Pipeline;
use crate::gl_sampler::Sampler;
use crate::gl_texture::Texture;
use galaxy_3d_gpu::galaxy3d::gpu::{
    ColorAttachmentDesc, DepthAttachmentDesc, IndexType, LoadAction, PrimitiveType,
    StencilAttachmentDesc, TextureType, MAX_COLOR_ATTACHMENTS,
};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::glam::Vec4;

// ===== ARENA =====

/// Append-only command storage with byte accounting
///
/// `len` is the sum of the encoded sizes of all records. When a push
/// would exceed `capacity`, the capacity doubles until it fits. All size
/// arithmetic is checked; a failed push leaves the arena untouched.
#[derive(Debug)]
pub(crate) struct CommandArena {
    records: Vec<Command>,
    len: usize,
    capacity: usize,
}

impl CommandArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            len: 0,
            capacity,
        }
    }

    pub(crate) fn push(&mut self, command: Command) -> Result<()> {
        let new_len = self.len.checked_add(command.encoded_size()).ok_or(Error::OutOfMemory)?;

        let mut capacity = self.capacity;
        if new_len > capacity {
            capacity = capacity.max(RECORD_TAG_SIZE);
            while capacity < new_len {
                capacity = capacity.checked_mul(2).ok_or(Error::OutOfMemory)?;
            }
        }
        self.records.try_reserve(1).map_err(|_| Error::OutOfMemory)?;

        self.records.push(command);
        self.len = new_len;
        self.capacity = capacity;
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn records(&self) -> &[Command] {
        &self.records
    }

    pub(crate) fn into_records(self) -> Vec<Command> {
        self.records
    }
}

// ===== ENCODING STATE =====

/// Render pass state read by later calls of the same pass
#[derive(Debug, Clone, Copy)]
struct RenderPassState {
    /// Smallest height among the attachments, 0 without attachments
    target_height: u32,
    primitive: PrimitiveType,
    vertex_stride: u32,
    pipeline_set: bool,
}

#[derive(Debug, Clone, Copy)]
enum OpenPass {
    Render(RenderPassState),
    Blit,
}

// ===== COMMAND BUFFER =====

/// Recorded list of commands, consumed by submit or abandon
#[derive(Debug)]
pub struct CommandBuffer {
    arena: CommandArena,
    pass: Option<OpenPass>,
}

impl CommandBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            arena: CommandArena::with_capacity(capacity),
            pass: None,
        }
    }

    /// Bytes recorded so far
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.records().is_empty()
    }

    /// Current arena capacity in bytes
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Number of recorded commands
    pub fn command_count(&self) -> usize {
        self.arena.records().len()
    }

    /// Returns true while a render or blit pass is open
    pub fn has_open_pass(&self) -> bool {
        self.pass.is_some()
    }

    pub(crate) fn commands(&self) -> &[Command] {
        self.arena.records()
    }

    /// Append the end marker and hand the records to the executor
    pub(crate) fn finish(mut self) -> Result<Vec<Command>> {
        if self.pass.is_some() {
            return Err(Error::InvalidOperation(
                "command buffer submitted with a pass still open".to_string(),
            ));
        }
        self.arena.push(Command::End)?;
        Ok(self.arena.into_records())
    }

    fn check_no_open_pass(&self) -> Result<()> {
        if self.pass.is_some() {
            return Err(Error::InvalidOperation("a pass is already open".to_string()));
        }
        Ok(())
    }

    /// Open a render pass
    ///
    /// Attachment slots follow `colors` order; an unused slot keeps its
    /// position. Clears and invalidations happen when the pass starts at replay.
    pub fn start_render_pass(
        &mut self,
        label: Option<&str>,
        colors: &[ColorAttachmentDesc<'_, Texture>],
        depth: Option<DepthAttachmentDesc<'_, Texture>>,
        stencil: Option<StencilAttachmentDesc<'_, Texture>>,
    ) -> Result<RenderPass<'_>> {
        self.check_no_open_pass()?;
        if colors.len() > MAX_COLOR_ATTACHMENTS {
            return Err(Error::CapabilityExceeded(format!(
                "too many color attachments: {} > {}",
                colors.len(),
                MAX_COLOR_ATTACHMENTS
            )));
        }

        let mut target_height: Option<u32> = None;
        let mut shrink = |texture: &Texture| {
            target_height = Some(target_height.map_or(texture.height(), |h| h.min(texture.height())));
        };
        let mut record = StartRenderPass {
            colors: [ColorTarget::default(); MAX_COLOR_ATTACHMENTS],
            color_count: colors.len(),
            depth: 0,
            clear_depth: None,
            stencil: 0,
            clear_stencil: None,
            invalidate: Vec::new(),
            label: label.map(str::to_string),
        };

        for (slot, attachment) in colors.iter().enumerate() {
            let Some(texture) = attachment.texture else {
                continue;
            };
            live_texture(texture, "color attachment")?;
            record.colors[slot].texture = texture.handle;
            match attachment.load {
                LoadAction::Clear => record.colors[slot].clear = Some(attachment.clear_color.to_array()),
                LoadAction::DontCare => record.invalidate.push(glow::COLOR_ATTACHMENT0 + slot as u32),
                LoadAction::Load => {}
            }
            shrink(texture);
        }

        if let Some(depth) = depth {
            live_texture(depth.texture, "depth attachment")?;
            record.depth = depth.texture.handle;
            match depth.load {
                LoadAction::Clear => record.clear_depth = Some(depth.clear_depth),
                LoadAction::DontCare => record.invalidate.push(glow::DEPTH_ATTACHMENT),
                LoadAction::Load => {}
            }
            shrink(depth.texture);
        }

        if let Some(stencil) = stencil {
            live_texture(stencil.texture, "stencil attachment")?;
            record.stencil = stencil.texture.handle;
            match stencil.load {
                LoadAction::Clear => record.clear_stencil = Some(stencil.clear_stencil),
                LoadAction::DontCare => record.invalidate.push(glow::STENCIL_ATTACHMENT),
                LoadAction::Load => {}
            }
            shrink(stencil.texture);
        }

        self.arena.push(Command::StartRenderPass(record))?;
        self.pass = Some(OpenPass::Render(RenderPassState {
            target_height: target_height.unwrap_or(0),
            primitive: PrimitiveType::Triangle,
            vertex_stride: 0,
            pipeline_set: false,
        }));
        Ok(RenderPass { cmd: self })
    }

    /// Open a blit pass (copies, fills, mipmap generation)
    pub fn start_blit_pass(&mut self, label: Option<&str>) -> Result<BlitPass<'_>> {
        self.check_no_open_pass()?;
        self.arena.push(Command::StartBlitPass { label: label.map(str::to_string) })?;
        self.pass = Some(OpenPass::Blit);
        Ok(BlitPass { cmd: self })
    }
}

fn live_texture(texture: &Texture, what: &str) -> Result<()> {
    if texture.handle == 0 {
        return Err(Error::InvalidResource(format!("{} texture was destroyed", what)));
    }
    Ok(())
}

fn live_handle(handle: u32, what: &str) -> Result<()> {
    if handle == 0 {
        return Err(Error::InvalidResource(format!("{} was destroyed", what)));
    }
    Ok(())
}

/// OpenGL takes sizes and offsets as signed integers
fn gl_int(value: u32, what: &str) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| Error::InvalidOperation(format!("{} {} exceeds the OpenGL integer range", what, value)))
}

/// Checks `offset + length <= capacity`
fn check_range(what: &str, offset: usize, length: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(Error::InvalidOperation(format!(
            "{} range {}+{} exceeds {} bytes",
            what, offset, length, capacity
        ))),
    }
}

// ===== RENDER PASS =====

/// Open render pass of a command buffer
///
/// Dropping it without `end` leaves the pass open and the command buffer
/// can only be abandoned.
pub struct RenderPass<'a> {
    cmd: &'a mut CommandBuffer,
}

impl RenderPass<'_> {
    fn state(&self) -> RenderPassState {
        match self.cmd.pass {
            Some(OpenPass::Render(state)) => state,
            // Guard exists only while its render pass is open
            _ => RenderPassState {
                target_height: 0,
                primitive: PrimitiveType::Triangle,
                vertex_stride: 0,
                pipeline_set: false,
            },
        }
    }

    fn state_mut(&mut self) -> Option<&mut RenderPassState> {
        match &mut self.cmd.pass {
            Some(OpenPass::Render(state)) => Some(state),
            _ => None,
        }
    }

    fn require_pipeline(&self, what: &str) -> Result<RenderPassState> {
        let state = self.state();
        if !state.pipeline_set {
            return Err(Error::InvalidOperation(format!("{} before any pipeline was set", what)));
        }
        Ok(state)
    }

    /// Height the Y flip is computed against
    pub fn target_height(&self) -> u32 {
        self.state().target_height
    }

    pub fn set_pipeline(&mut self, pipeline: &Pipeline) -> Result<()> {
        live_handle(pipeline.program, "pipeline")?;
        self.cmd.arena.push(Command::SetPipeline(SetPipeline {
            vertex_array: pipeline.vertex_array,
            program: pipeline.program,
            state: pipeline.state,
            label: pipeline.label.clone(),
        }))?;
        if let Some(state) = self.state_mut() {
            state.primitive = pipeline.state.primitive;
            state.vertex_stride = pipeline.state.vertex_stride;
            state.pipeline_set = true;
        }
        Ok(())
    }

    /// Viewport in top-left origin coordinates
    pub fn set_viewport(&mut self, x: f32, y: f32, width: f32, height: f32, znear: f64, zfar: f64) -> Result<()> {
        let target_height = self.state().target_height as f32;
        self.cmd.arena.push(Command::SetViewport(SetViewport {
            x,
            y: target_height - y - height,
            width,
            height,
            znear,
            zfar,
        }))
    }

    /// Scissor rectangle in top-left origin coordinates
    pub fn set_scissor(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        let target_height = self.state().target_height as i64;
        let flipped = target_height - y as i64 - height as i64;
        let flipped = i32::try_from(flipped)
            .map_err(|_| Error::InvalidOperation(format!("scissor y {} out of range", flipped)))?;
        self.cmd.arena.push(Command::SetScissor(SetScissor {
            x: gl_int(x, "scissor x")?,
            y: flipped,
            width: gl_int(width, "scissor width")?,
            height: gl_int(height, "scissor height")?,
        }))
    }

    pub fn set_blend_constant(&mut self, color: Vec4) -> Result<()> {
        self.cmd.arena.push(Command::SetBlendConstant(color.to_array()))
    }

    /// Bind `buffer` from `offset` to its end as shader storage `index`
    pub fn set_vertex_buffer(&mut self, buffer: &Buffer, offset: usize, index: u32) -> Result<()> {
        live_handle(buffer.handle, "buffer")?;
        let size = buffer.length.checked_sub(offset).ok_or_else(|| {
            Error::InvalidOperation(format!("buffer offset {} past its {} bytes", offset, buffer.length))
        })?;
        self.cmd.arena.push(Command::SetBuffer(SetBuffer {
            index,
            buffer: buffer.handle,
            offset,
            size,
        }))
    }

    pub fn set_vertex_sampler(&mut self, sampler: &Sampler, index: u32) -> Result<()> {
        live_handle(sampler.handle, "sampler")?;
        self.cmd.arena.push(Command::SetSampler { unit: index, sampler: sampler.handle })
    }

    pub fn set_vertex_texture(&mut self, texture: &Texture, index: u32) -> Result<()> {
        live_texture(texture, "bound")?;
        self.cmd.arena.push(Command::SetTexture { unit: index, texture: texture.handle })
    }

    // OpenGL has one binding namespace for all stages

    pub fn set_fragment_buffer(&mut self, buffer: &Buffer, offset: usize, index: u32) -> Result<()> {
        self.set_vertex_buffer(buffer, offset, index)
    }

    pub fn set_fragment_sampler(&mut self, sampler: &Sampler, index: u32) -> Result<()> {
        self.set_vertex_sampler(sampler, index)
    }

    pub fn set_fragment_texture(&mut self, texture: &Texture, index: u32) -> Result<()> {
        self.set_vertex_texture(texture, index)
    }

    /// Bind the interleaved vertex stream, with the current pipeline's stride
    pub fn set_mesh_buffer(&mut self, buffer: &Buffer, offset: usize) -> Result<()> {
        live_handle(buffer.handle, "mesh buffer")?;
        let state = self.require_pipeline("set mesh buffer")?;
        self.cmd.arena.push(Command::SetMesh(SetMesh {
            buffer: buffer.handle,
            offset,
            stride: state.vertex_stride,
        }))
    }

    pub fn draw(&mut self, first_vertex: u32, vertex_count: u32) -> Result<()> {
        let state = self.require_pipeline("draw")?;
        self.cmd.arena.push(Command::Draw(Draw {
            primitive: state.primitive,
            first: first_vertex,
            count: vertex_count,
        }))
    }

    /// Indexed draw, `index_offset` in bytes into `index_buffer`
    pub fn draw_indexed(
        &mut self,
        index_count: u32,
        index_type: IndexType,
        index_buffer: &Buffer,
        index_offset: usize,
    ) -> Result<()> {
        live_handle(index_buffer.handle, "index buffer")?;
        let state = self.require_pipeline("draw indexed")?;
        self.cmd.arena.push(Command::DrawIndexed(DrawIndexed {
            primitive: state.primitive,
            index_buffer: index_buffer.handle,
            index_type,
            offset: index_offset,
            count: index_count,
        }))
    }

    /// Recorded, but skipped at replay: instancing is not implemented
    pub fn draw_instanced(
        &mut self,
        first_vertex: u32,
        vertex_count: u32,
        instance_count: u32,
        base_instance: u32,
    ) -> Result<()> {
        let state = self.require_pipeline("draw instanced")?;
        self.cmd.arena.push(Command::DrawInstanced(DrawInstanced {
            primitive: state.primitive,
            first: first_vertex,
            count: vertex_count,
            instance_count,
            base_instance,
        }))
    }

    /// Recorded, but skipped at replay: instancing is not implemented
    #[allow(clippy::too_many_arguments)]
    pub fn draw_indexed_instanced(
        &mut self,
        index_count: u32,
        index_type: IndexType,
        index_buffer: &Buffer,
        index_offset: usize,
        instance_count: u32,
        base_vertex: i32,
        base_instance: u32,
    ) -> Result<()> {
        live_handle(index_buffer.handle, "index buffer")?;
        let state = self.require_pipeline("draw indexed instanced")?;
        self.cmd.arena.push(Command::DrawIndexedInstanced(DrawIndexedInstanced {
            primitive: state.primitive,
            index_buffer: index_buffer.handle,
            index_type,
            offset: index_offset,
            count: index_count,
            instance_count,
            base_vertex,
            base_instance,
        }))
    }

    /// Close the pass
    ///
    /// If the end record cannot be stored the pass stays open.
    pub fn end(self) -> Result<()> {
        self.cmd.arena.push(Command::EndRenderPass)?;
        self.cmd.pass = None;
        Ok(())
    }
}

// ===== BLIT PASS =====

/// Texel location of a copy: mip level, array slice and offset
#[derive(Debug, Clone, Copy)]
pub struct TextureLocation<'a> {
    pub texture: &'a Texture,
    pub mip_level: u32,
    pub slice: u32,
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl<'a> TextureLocation<'a> {
    /// Origin of mip level 0, slice 0
    pub fn origin(texture: &'a Texture) -> Self {
        Self { texture, mip_level: 0, slice: 0, x: 0, y: 0, z: 0 }
    }
}

/// Open blit pass of a command buffer
pub struct BlitPass<'a> {
    cmd: &'a mut CommandBuffer,
}

impl BlitPass<'_> {
    /// Copy a `width x height x depth` texel box between two textures
    pub fn copy_texture(
        &mut self,
        src: TextureLocation<'_>,
        dst: TextureLocation<'_>,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Result<()> {
        live_texture(src.texture, "source")?;
        live_texture(dst.texture, "destination")?;
        self.cmd.arena.push(Command::CopyTexture(CopyTexture {
            src: image_region(&src)?,
            dst: image_region(&dst)?,
            width: gl_int(width, "copy width")?,
            height: gl_int(height, "copy height")?,
            depth: gl_int(depth, "copy depth")?,
        }))
    }

    /// Set `length` bytes of `buffer` from `offset` to `value`
    pub fn fill_buffer(&mut self, buffer: &Buffer, offset: usize, length: usize, value: u8) -> Result<()> {
        live_handle(buffer.handle, "buffer")?;
        check_range("fill", offset, length, buffer.length)?;
        self.cmd.arena.push(Command::FillBuffer(FillBuffer {
            buffer: buffer.handle,
            offset,
            size: length,
            value,
        }))
    }

    pub fn generate_mipmaps(&mut self, texture: &Texture) -> Result<()> {
        live_texture(texture, "mipmapped")?;
        self.cmd.arena.push(Command::GenerateMipmaps { texture: texture.handle })
    }

    pub fn copy_cpu_to_gpu(
        &mut self,
        src: &CpuBuffer,
        src_offset: usize,
        dst: &Buffer,
        dst_offset: usize,
        length: usize,
    ) -> Result<()> {
        self.copy_buffer((src.handle, src.length, src_offset), (dst.handle, dst.length, dst_offset), length)
    }

    pub fn copy_gpu_to_cpu(
        &mut self,
        src: &Buffer,
        src_offset: usize,
        dst: &CpuBuffer,
        dst_offset: usize,
        length: usize,
    ) -> Result<()> {
        self.copy_buffer((src.handle, src.length, src_offset), (dst.handle, dst.length, dst_offset), length)
    }

    pub fn copy_gpu_to_gpu(
        &mut self,
        src: &Buffer,
        src_offset: usize,
        dst: &Buffer,
        dst_offset: usize,
        length: usize,
    ) -> Result<()> {
        self.copy_buffer((src.handle, src.length, src_offset), (dst.handle, dst.length, dst_offset), length)
    }

    /// `(handle, buffer length, offset)` on each side
    fn copy_buffer(&mut self, src: (u32, usize, usize), dst: (u32, usize, usize), length: usize) -> Result<()> {
        live_handle(src.0, "source buffer")?;
        live_handle(dst.0, "destination buffer")?;
        check_range("copy source", src.2, length, src.1)?;
        check_range("copy destination", dst.2, length, dst.1)?;
        self.cmd.arena.push(Command::CopyBuffer(CopyBuffer {
            src: src.0,
            src_offset: src.2,
            dst: dst.0,
            dst_offset: dst.2,
            size: length,
        }))
    }

    /// Upload texels from a buffer, rows `src_pitch` bytes apart
    ///
    /// 1D and 2D textures (including 1D arrays, `dst.slice` selects the
    /// layer) only.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_buffer_to_texture(
        &mut self,
        src: &Buffer,
        src_offset: usize,
        src_pitch: u32,
        _src_image_pitch: u32,
        width: u32,
        height: u32,
        _depth: u32,
        dst: TextureLocation<'_>,
    ) -> Result<()> {
        live_handle(src.handle, "source buffer")?;
        live_texture(dst.texture, "destination")?;

        let desc = dst.texture.desc();
        let y = if desc.texture_type == TextureType::Tex1DArray { dst.slice } else { dst.y };
        let record = CopyBufferToTexture {
            buffer: src.handle,
            src_offset,
            src_pitch,
            texture: dst.texture.handle,
            level: gl_int(dst.mip_level, "mip level")?,
            x: gl_int(dst.x, "texture x")?,
            y: gl_int(y, "texture y")?,
            width: gl_int(width, "upload width")?,
            height: gl_int(height, "upload height")?,
            data_format: gl_format::data_format(desc.pixel_format),
            data_type: gl_format::data_type(desc.pixel_format),
        };

        match desc.texture_type.dimension() {
            1 => self.cmd.arena.push(Command::CopyBufferToTexture1D(record)),
            2 => self.cmd.arena.push(Command::CopyBufferToTexture2D(record)),
            _ => Err(Error::Unsupported(format!(
                "buffer to {:?} texture copy",
                desc.texture_type
            ))),
        }
    }

    /// Texture readback has no OpenGL path in this backend
    #[allow(clippy::too_many_arguments)]
    pub fn copy_texture_to_buffer(
        &mut self,
        _src: TextureLocation<'_>,
        _width: u32,
        _height: u32,
        _depth: u32,
        _dst: &Buffer,
        _dst_offset: usize,
        _dst_pitch: u32,
        _dst_image_pitch: u32,
    ) -> Result<()> {
        Err(Error::Unsupported("texture to buffer copy".to_string()))
    }

    pub fn end(self) -> Result<()> {
        self.cmd.arena.push(Command::EndBlitPass)?;
        self.cmd.pass = None;
        Ok(())
    }
}

/// Layers and cube faces come from `slice`: 1D arrays through y, the
/// other layered types through z
fn image_region(location: &TextureLocation<'_>) -> Result<ImageRegion> {
    let (y, z) = match location.texture.desc().texture_type {
        TextureType::Tex1D | TextureType::Tex2D | TextureType::Tex3D => (location.y, location.z),
        TextureType::Tex1DArray => (location.slice, 0),
        TextureType::Tex2DArray | TextureType::Cube | TextureType::CubeArray => (location.y, location.slice),
    };
    Ok(ImageRegion {
        texture: location.texture.handle,
        target: location.texture.target,
        level: gl_int(location.mip_level, "mip level")?,
        x: gl_int(location.x, "texture x")?,
        y: gl_int(y, "texture y")?,
        z: gl_int(z, "texture z")?,
    })
}

#[cfg(test)]
#[path = "gl_command_buffer_tests.rs"]
mod tests;

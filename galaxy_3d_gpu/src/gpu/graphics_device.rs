/// GraphicsDevice trait - backend-agnostic GPU device interface

use crate::error::Result;
use crate::gpu::{
    BufferDesc, DeviceLimits, PipelineDesc, SamplerDesc, ShaderDesc, TextureDesc,
};

/// GPU device interface implemented by each backend
///
/// Every resource owns exactly one native handle from `create_*` until
/// `destroy_*`. Destroying a resource twice, or one whose creation failed,
/// is a no-op.
///
/// Recording happens on the backend's command buffer type; this trait only
/// covers the command buffer lifecycle (create, submit, abandon).
///
/// All calls must happen on the thread that owns the native context.
pub trait GraphicsDevice {
    type CpuBuffer;
    type Buffer;
    type Texture;
    type Sampler;
    type Shader;
    type Pipeline;
    type Fence;
    type CommandBuffer;

    /// Capability limits queried at creation
    fn limits(&self) -> &DeviceLimits;

    // ===== BUFFERS =====

    /// Create a CPU-visible buffer, optionally initialized with `data`
    fn create_cpu_buffer(&mut self, desc: &BufferDesc, data: Option<&[u8]>) -> Result<Self::CpuBuffer>;

    fn destroy_cpu_buffer(&mut self, buffer: &mut Self::CpuBuffer);

    /// Map a CPU buffer for reading and writing
    ///
    /// The returned slice borrows the buffer until it is unlocked.
    fn lock_cpu_buffer<'b>(&mut self, buffer: &'b mut Self::CpuBuffer) -> Result<&'b mut [u8]>;

    fn unlock_cpu_buffer(&mut self, buffer: &mut Self::CpuBuffer) -> Result<()>;

    /// Create a GPU-only buffer
    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Self::Buffer>;

    fn destroy_buffer(&mut self, buffer: &mut Self::Buffer);

    // ===== TEXTURES / SAMPLERS =====

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Self::Texture>;

    fn destroy_texture(&mut self, texture: &mut Self::Texture);

    fn create_sampler(&mut self, desc: &SamplerDesc) -> Result<Self::Sampler>;

    fn destroy_sampler(&mut self, sampler: &mut Self::Sampler);

    // ===== SHADERS / PIPELINES =====

    /// Create a shader from a source blob (see [`ShaderStage::detect`](crate::gpu::ShaderStage::detect))
    fn create_shader(&mut self, desc: &ShaderDesc, source: &[u8]) -> Result<Self::Shader>;

    fn destroy_shader(&mut self, shader: &mut Self::Shader);

    fn create_pipeline(&mut self, desc: &PipelineDesc<'_, Self::Shader>) -> Result<Self::Pipeline>;

    fn destroy_pipeline(&mut self, pipeline: &mut Self::Pipeline);

    // ===== FENCES =====

    fn create_fence(&mut self) -> Result<Self::Fence>;

    fn destroy_fence(&mut self, fence: &mut Self::Fence);

    /// Returns true once the work guarded by the fence has completed
    fn query_fence(&self, fence: &Self::Fence) -> bool;

    fn reset_fence(&mut self, fence: &mut Self::Fence);

    fn wait_fence(&self, fence: &Self::Fence) -> Result<()>;

    // ===== COMMAND BUFFERS =====

    /// Create an empty command buffer
    fn create_command_buffer(&mut self) -> Result<Self::CommandBuffer>;

    /// Execute every recorded command, in order, then signal `fence`
    ///
    /// The command buffer is consumed whatever the outcome.
    fn submit_command_buffer(
        &mut self,
        command_buffer: Self::CommandBuffer,
        fence: Option<&mut Self::Fence>,
    ) -> Result<()>;

    /// Drop a command buffer without executing it
    fn abandon_command_buffer(&mut self, command_buffer: Self::CommandBuffer);

    // ===== PRESENTATION =====

    /// Texture standing in for the window's back buffer
    ///
    /// Recreated first if the window changed size or format since the last call.
    fn backbuffer(&mut self) -> Result<Self::Texture>;

    /// Copy the back buffer texture to the window and swap
    fn present(&mut self, backbuffer: &Self::Texture, swap_interval: i32) -> Result<()>;
}

/*!
# Galaxy 3D GPU - OpenGL Backend

OpenGL 4.6 implementation of the galaxy_3d_gpu `GraphicsDevice` trait.

Rendering and copy work is recorded into command buffers and replayed on
the context thread when the buffer is submitted. All entry points are
resolved at device creation through the window's context (glutin), and
every native call goes through the [`GlApi`] trait.

The window's default framebuffer is never rendered to directly: the device
keeps an offscreen backbuffer texture, recreated when the window is
resized, and blits it to the window on present.

# Example

```no_run
use std::sync::Arc;
use galaxy_3d_gpu::galaxy3d::GraphicsDevice;
use galaxy_3d_gpu::galaxy3d::gpu::{ColorAttachmentDesc, DeviceConfig};
use galaxy_3d_gpu::glam::Vec4;
use galaxy_3d_gpu_opengl::{GlutinSurface, OpenGlDevice};
# fn run(window: Arc<winit::window::Window>) -> galaxy_3d_gpu::galaxy3d::Result<()> {
let surface = GlutinSurface::new(window, true)?;
let mut device = OpenGlDevice::new(surface, DeviceConfig::default())?;

let backbuffer = device.backbuffer()?;
let mut cmd = device.create_command_buffer()?;
let colors = [ColorAttachmentDesc::clear(&backbuffer, Vec4::new(0.1, 0.1, 0.1, 1.0))];
cmd.start_render_pass(Some("clear"), &colors, None, None)?.end()?;
device.submit_command_buffer(cmd, None)?;
device.present(&backbuffer, 1)?;
# Ok(())
# }
```
*/

mod gl_api;
mod gl_functions;
mod gl_debug;
mod gl_format;
mod gl_surface;

// Resources
mod gl_buffer;
mod gl_texture;
mod gl_sampler;
mod gl_shader;
mod gl_pipeline;
mod gl_fence;

// Recording and replay
mod gl_command;
mod gl_command_buffer;
mod gl_executor;

mod gl_device;

#[cfg(test)]
mod mock_gl;

pub use gl_api::GlApi;
pub use gl_functions::{DebugProc, GlFunctions, REQUIRED_ENTRY_POINTS};
pub use gl_surface::{GlutinSurface, Surface};
pub use gl_device::OpenGlDevice;

pub use gl_buffer::{Buffer, CpuBuffer};
pub use gl_texture::Texture;
pub use gl_sampler::Sampler;
pub use gl_shader::Shader;
pub use gl_pipeline::{Pipeline, PipelineState};
pub use gl_fence::Fence;
pub use gl_command_buffer::{BlitPass, CommandBuffer, RenderPass, TextureLocation};

pub use gl_debug::MAX_DEBUG_GROUP_MESSAGE;

// Debug output statistics
#[cfg(feature = "gl-debug-output")]
pub use gl_debug::{debug_output_stats, print_debug_output_report, reset_debug_output_stats, DebugOutputStats};

/// Backend types under the engine's `galaxy3d` namespace
pub mod galaxy3d {
    pub use crate::OpenGlDevice;
    pub use crate::{GlutinSurface, Surface};

    pub mod opengl {
        pub use crate::{
            BlitPass, Buffer, CommandBuffer, CpuBuffer, Fence, Pipeline, RenderPass, Sampler, Shader, Texture,
            TextureLocation,
        };
    }
}

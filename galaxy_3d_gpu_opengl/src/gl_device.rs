/// OpenGlDevice - OpenGL 4.6 implementation of `GraphicsDevice`
///
/// Owns the function table, the window surface and the backbuffer: an
/// offscreen RGBA8 texture attached to a framebuffer, rendered to like any
/// other texture and blitted to the window on present. Command buffers are
/// replayed synchronously on submit, so fences are signalled by the time
/// submit returns.

use crate::gl_api::GlApi;
use crate::gl_buffer::{self, Buffer, CpuBuffer};
use crate::gl_command_buffer::CommandBuffer;
use crate::gl_debug::{check_gl_error, label_object, push_debug_group};
use crate::gl_executor;
use crate::gl_fence::Fence;
use crate::gl_format;
use crate::gl_functions::GlFunctions;
use crate::gl_pipeline::{self, Pipeline};
use crate::gl_sampler::{self, Sampler};
use crate::gl_shader::{self, Shader};
use crate::gl_surface::{GlutinSurface, Surface};
use crate::gl_texture::{self, Texture};
use galaxy_3d_gpu::galaxy3d::gpu::{
    BufferDesc, DeviceConfig, DeviceLimits, GraphicsDevice, PipelineDesc, PixelFormat, ResizeNotifier,
    SamplerDesc, ShaderDesc, SurfacePixelFormat, TextureDesc, TextureUsage,
};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::{engine_bail, engine_debug, engine_error, engine_info, engine_warn};

const SOURCE: &str = "galaxy3d::opengl";

/// Lowest context version the backend runs on
const REQUIRED_VERSION: (i32, i32) = (4, 6);

/// Offscreen color target standing in for the default framebuffer
#[derive(Debug, Default)]
struct Backbuffer {
    framebuffer: u32,
    texture: u32,
    width: u32,
    height: u32,
    window_format: Option<SurfacePixelFormat>,
    pixel_format: Option<PixelFormat>,
}

/// OpenGL 4.6 graphics device
///
/// `G` is the OpenGL function table and `S` the window surface; both are
/// only replaced in tests.
pub struct OpenGlDevice<G: GlApi = GlFunctions, S: Surface = GlutinSurface> {
    gl: G,
    surface: S,
    config: DeviceConfig,
    limits: DeviceLimits,
    backbuffer: Backbuffer,
    swap_interval: i32,
    resize: ResizeNotifier,
}

impl<S: Surface> OpenGlDevice<GlFunctions, S> {
    /// Load OpenGL through `surface` and bootstrap the device
    ///
    /// The surface's context must be current on this thread and stay
    /// current for the whole life of the device.
    pub fn new(surface: S, config: DeviceConfig) -> Result<Self> {
        // SAFETY: the surface resolves names in its own current context.
        let gl = unsafe { GlFunctions::load(|name| surface.proc_address(name)) }.map_err(|e| {
            engine_error!(SOURCE, "Failed to load OpenGL: {}", e);
            e
        })?;
        Self::with_gl(gl, surface, config)
    }
}

impl<G: GlApi, S: Surface> OpenGlDevice<G, S> {
    /// Bootstrap a device on an already loaded function table
    pub fn with_gl(gl: G, surface: S, config: DeviceConfig) -> Result<Self> {
        let major = gl.get_integer(glow::MAJOR_VERSION);
        let minor = gl.get_integer(glow::MINOR_VERSION);
        if (major, minor) < REQUIRED_VERSION {
            engine_error!(SOURCE, "OpenGL version {}.{} < 4.6", major, minor);
            return Err(Error::InitializationFailed(format!("OpenGL version {}.{} < 4.6", major, minor)));
        }

        let vendor = gl.get_string(glow::VENDOR).unwrap_or_default();
        let renderer = gl.get_string(glow::RENDERER).unwrap_or_default();
        let glsl = gl.get_string(glow::SHADING_LANGUAGE_VERSION).unwrap_or_default();
        engine_debug!(SOURCE, "OpenGL {}.{} vendor: {}", major, minor, vendor);
        engine_debug!(SOURCE, "OpenGL renderer: {}", renderer);
        engine_debug!(SOURCE, "GLSL version: {}", glsl);

        #[cfg(feature = "gl-debug-output")]
        {
            gl.debug_message_callback(crate::gl_debug::debug_output_callback);
            if config.debug {
                gl.enable(glow::DEBUG_OUTPUT);
                gl.debug_message_control_all(true);
            }
        }

        // Fixed state every pass relies on, toggled per pass afterwards
        gl.enable(glow::BLEND);
        gl.enable(glow::DEPTH_TEST);
        gl.enable(glow::SCISSOR_TEST);
        gl.enable(glow::STENCIL_TEST);

        let limits = DeviceLimits {
            max_anisotropy: positive(gl.get_integer(glow::MAX_TEXTURE_MAX_ANISOTROPY)),
            max_vertex_attributes: positive(gl.get_integer(glow::MAX_VERTEX_ATTRIBS)),
            max_texture_size: positive(gl.get_integer(glow::MAX_TEXTURE_SIZE)),
            max_texture_depth: positive(gl.get_integer(glow::MAX_3D_TEXTURE_SIZE)),
            max_buffer_size: config.max_buffer_size,
        };
        engine_debug!(SOURCE, "{:?}", limits);

        // Direct3D-style clip space: y down in framebuffer space, depth in [0, 1]
        gl.clip_control(glow::UPPER_LEFT, glow::ZERO_TO_ONE);
        check_gl_error!(gl, "device bootstrap");

        let swap_interval = config.swap_interval;
        let mut device = Self {
            gl,
            surface,
            config,
            limits,
            backbuffer: Backbuffer::default(),
            swap_interval,
            resize: ResizeNotifier::new(),
        };
        device.apply_swap_interval(swap_interval);

        // From here on Drop releases whatever was created
        device.create_backbuffer_framebuffer()?;
        device.recreate_backbuffer().map_err(|e| {
            Error::InitializationFailed(format!("could not create the backbuffer: {}", e))
        })?;

        engine_info!(SOURCE, "OpenGL device ready ({})", renderer);
        Ok(device)
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Swap interval last requested (at creation or by `present`)
    pub fn swap_interval(&self) -> i32 {
        self.swap_interval
    }

    /// Handle the event loop uses to report window resizes
    pub fn resize_notifier(&self) -> ResizeNotifier {
        self.resize.clone()
    }

    // ===== BACKBUFFER =====

    fn create_backbuffer_framebuffer(&mut self) -> Result<()> {
        let framebuffer = self.gl.create_framebuffer();
        if framebuffer == 0 {
            engine_error!(SOURCE, "could not create the backbuffer framebuffer");
            return Err(Error::InitializationFailed("could not create the backbuffer framebuffer".to_string()));
        }
        self.backbuffer.framebuffer = framebuffer;
        label_object(&self.gl, glow::FRAMEBUFFER, framebuffer, Some("backbuffer framebuffer"));
        self.gl.named_framebuffer_draw_buffers(framebuffer, &[glow::COLOR_ATTACHMENT0]);
        self.gl.named_framebuffer_read_buffer(framebuffer, glow::COLOR_ATTACHMENT0);
        Ok(())
    }

    /// Match the backbuffer texture to the window's current size and format
    ///
    /// The previous texture stays attached if anything fails.
    fn recreate_backbuffer(&mut self) -> Result<()> {
        let (width, height) = self.surface.drawable_size();
        let window_format = self.surface.pixel_format();
        let Some((internal_format, pixel_format)) = gl_format::backbuffer_format(window_format) else {
            engine_error!(SOURCE, "unsupported window pixel format {:?}", window_format);
            return Err(Error::Unsupported(format!("window pixel format {:?}", window_format)));
        };

        let bb = &self.backbuffer;
        if bb.texture != 0 && bb.width == width && bb.height == height && bb.window_format == Some(window_format) {
            return Ok(());
        }
        if width == 0 || height == 0 {
            // Minimized: keep the old texture and look again on the next access
            self.resize.notify();
            return Ok(());
        }
        self.surface.resize(width, height);

        let texture = self.gl.create_texture(glow::TEXTURE_2D);
        if texture == 0 {
            engine_bail!(SOURCE, "could not create the backbuffer texture");
        }
        let framebuffer = self.backbuffer.framebuffer;
        self.gl.texture_storage_2d(texture, 1, internal_format, width as i32, height as i32);
        self.gl.named_framebuffer_texture(framebuffer, glow::COLOR_ATTACHMENT0, texture, 0);

        let status = self.gl.check_named_framebuffer_status(framebuffer, glow::READ_FRAMEBUFFER);
        if status != glow::FRAMEBUFFER_COMPLETE {
            self.gl
                .named_framebuffer_texture(framebuffer, glow::COLOR_ATTACHMENT0, self.backbuffer.texture, 0);
            self.gl.delete_texture(texture);
            engine_bail!(SOURCE, "backbuffer framebuffer incomplete (0x{:04x})", status);
        }

        if self.backbuffer.texture != 0 {
            self.gl.delete_texture(self.backbuffer.texture);
        }
        label_object(&self.gl, glow::TEXTURE, texture, Some("backbuffer"));
        self.backbuffer.texture = texture;
        self.backbuffer.width = width;
        self.backbuffer.height = height;
        self.backbuffer.window_format = Some(window_format);
        self.backbuffer.pixel_format = Some(pixel_format);
        engine_debug!(SOURCE, "backbuffer recreated {}x{} ({:?})", width, height, window_format);
        Ok(())
    }

    /// Set the swap interval, falling back to vsync when adaptive is refused
    fn apply_swap_interval(&self, interval: i32) {
        match self.surface.set_swap_interval(interval) {
            Ok(()) => {}
            Err(e) if interval == -1 => {
                engine_warn!(SOURCE, "adaptive vsync unavailable ({}), using vsync", e);
                if let Err(e) = self.surface.set_swap_interval(1) {
                    engine_warn!(SOURCE, "could not enable vsync: {}", e);
                }
            }
            Err(e) => engine_warn!(SOURCE, "could not set swap interval {}: {}", interval, e),
        }
    }
}

fn positive(value: i32) -> u32 {
    value.max(0) as u32
}

impl<G: GlApi, S: Surface> GraphicsDevice for OpenGlDevice<G, S> {
    type CpuBuffer = CpuBuffer;
    type Buffer = Buffer;
    type Texture = Texture;
    type Sampler = Sampler;
    type Shader = Shader;
    type Pipeline = Pipeline;
    type Fence = Fence;
    type CommandBuffer = CommandBuffer;

    fn limits(&self) -> &DeviceLimits {
        &self.limits
    }

    // ===== BUFFERS =====

    fn create_cpu_buffer(&mut self, desc: &BufferDesc, data: Option<&[u8]>) -> Result<CpuBuffer> {
        gl_buffer::create_cpu_buffer(&self.gl, &self.limits, desc, data)
    }

    fn destroy_cpu_buffer(&mut self, buffer: &mut CpuBuffer) {
        gl_buffer::destroy_cpu_buffer(&self.gl, buffer);
    }

    fn lock_cpu_buffer<'b>(&mut self, buffer: &'b mut CpuBuffer) -> Result<&'b mut [u8]> {
        gl_buffer::lock_cpu_buffer(&self.gl, buffer)
    }

    fn unlock_cpu_buffer(&mut self, buffer: &mut CpuBuffer) -> Result<()> {
        gl_buffer::unlock_cpu_buffer(&self.gl, buffer)
    }

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Buffer> {
        gl_buffer::create_buffer(&self.gl, &self.limits, desc)
    }

    fn destroy_buffer(&mut self, buffer: &mut Buffer) {
        gl_buffer::destroy_buffer(&self.gl, buffer);
    }

    // ===== TEXTURES / SAMPLERS =====

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Texture> {
        gl_texture::create_texture(&self.gl, &self.limits, desc)
    }

    fn destroy_texture(&mut self, texture: &mut Texture) {
        gl_texture::destroy_texture(&self.gl, texture);
    }

    fn create_sampler(&mut self, desc: &SamplerDesc) -> Result<Sampler> {
        gl_sampler::create_sampler(&self.gl, &self.limits, desc)
    }

    fn destroy_sampler(&mut self, sampler: &mut Sampler) {
        gl_sampler::destroy_sampler(&self.gl, sampler);
    }

    // ===== SHADERS / PIPELINES =====

    fn create_shader(&mut self, desc: &ShaderDesc, source: &[u8]) -> Result<Shader> {
        gl_shader::create_shader(&self.gl, desc, source)
    }

    fn destroy_shader(&mut self, shader: &mut Shader) {
        gl_shader::destroy_shader(&self.gl, shader);
    }

    fn create_pipeline(&mut self, desc: &PipelineDesc<'_, Shader>) -> Result<Pipeline> {
        gl_pipeline::create_pipeline(&self.gl, &self.limits, desc)
    }

    fn destroy_pipeline(&mut self, pipeline: &mut Pipeline) {
        gl_pipeline::destroy_pipeline(&self.gl, pipeline);
    }

    // ===== FENCES =====

    fn create_fence(&mut self) -> Result<Fence> {
        Ok(Fence::default())
    }

    fn destroy_fence(&mut self, fence: &mut Fence) {
        fence.signalled = false;
    }

    fn query_fence(&self, fence: &Fence) -> bool {
        fence.signalled
    }

    fn reset_fence(&mut self, fence: &mut Fence) {
        fence.signalled = false;
    }

    fn wait_fence(&self, _fence: &Fence) -> Result<()> {
        // Submitted work has already run
        Ok(())
    }

    // ===== COMMAND BUFFERS =====

    fn create_command_buffer(&mut self) -> Result<CommandBuffer> {
        Ok(CommandBuffer::new(self.config.command_buffer_capacity))
    }

    fn submit_command_buffer(&mut self, command_buffer: CommandBuffer, fence: Option<&mut Fence>) -> Result<()> {
        let commands = command_buffer.finish()?;
        let result = gl_executor::execute(&self.gl, &commands);
        // Nothing stays in flight, even after a failed replay
        if let Some(fence) = fence {
            fence.signalled = true;
        }
        result
    }

    fn abandon_command_buffer(&mut self, command_buffer: CommandBuffer) {
        drop(command_buffer);
    }

    // ===== PRESENTATION =====

    fn backbuffer(&mut self) -> Result<Texture> {
        if self.resize.take() {
            if let Err(e) = self.recreate_backbuffer() {
                self.resize.notify();
                return Err(e);
            }
        }

        let bb = &self.backbuffer;
        let pixel_format = bb.pixel_format.unwrap_or(PixelFormat::RGBA8);
        let mut desc = TextureDesc::new_2d(bb.width, bb.height, pixel_format, TextureUsage::RENDER_TARGET);
        desc.label = Some("backbuffer".to_string());
        Ok(Texture {
            handle: bb.texture,
            target: glow::TEXTURE_2D,
            desc,
            is_backbuffer: true,
        })
    }

    fn present(&mut self, backbuffer: &Texture, swap_interval: i32) -> Result<()> {
        if !backbuffer.is_backbuffer || backbuffer.handle != self.backbuffer.texture {
            return Err(Error::InvalidResource("present needs the current backbuffer texture".to_string()));
        }

        let label = self.config.label.clone();
        if let Some(label) = &label {
            push_debug_group(&self.gl, "Present device: ", label);
        }

        if swap_interval != self.swap_interval {
            self.apply_swap_interval(swap_interval);
            self.swap_interval = swap_interval;
        }

        let rect = [0, 0, self.backbuffer.width as i32, self.backbuffer.height as i32];
        self.gl.viewport(rect[0], rect[1], rect[2], rect[3]);
        self.gl.disable(glow::SCISSOR_TEST);
        self.gl.blit_named_framebuffer(
            self.backbuffer.framebuffer,
            0,
            rect,
            rect,
            glow::COLOR_BUFFER_BIT,
            glow::NEAREST,
        );
        self.gl.enable(glow::SCISSOR_TEST);
        check_gl_error!(self.gl, "present blit");

        let result = self.surface.swap_buffers();
        if label.is_some() {
            self.gl.pop_debug_group();
        }
        result
    }
}

impl<G: GlApi, S: Surface> Drop for OpenGlDevice<G, S> {
    fn drop(&mut self) {
        if self.backbuffer.framebuffer != 0 {
            self.gl.delete_framebuffer(self.backbuffer.framebuffer);
            self.backbuffer.framebuffer = 0;
        }
        if self.backbuffer.texture != 0 {
            self.gl.delete_texture(self.backbuffer.texture);
            self.backbuffer.texture = 0;
        }
        engine_debug!(SOURCE, "OpenGL device destroyed");
    }
}

#[cfg(test)]
#[path = "gl_device_tests.rs"]
mod tests;

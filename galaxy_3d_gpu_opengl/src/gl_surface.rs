/// Surface - the window side of an OpenGL device
///
/// The device only needs a handful of things from the window system: the
/// drawable size and format, buffer swap, swap interval, and entry point
/// lookup. `GlutinSurface` provides them for a winit window.

use galaxy_3d_gpu::galaxy3d::gpu::SurfacePixelFormat;
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::{engine_debug, engine_info};
use glutin::config::{ColorBufferType, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use glutin::prelude::*;
use glutin::surface::{Surface as WindowGlSurface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::ffi::{c_void, CString};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::window::Window;

const SOURCE: &str = "galaxy3d::opengl";

/// Window system services the device relies on
///
/// The context must be current on the calling thread for every call.
pub trait Surface {
    /// Drawable size in pixels
    fn drawable_size(&self) -> (u32, u32);

    /// Pixel format of the default framebuffer
    fn pixel_format(&self) -> SurfacePixelFormat;

    /// Resize the drawable after the window changed size
    fn resize(&self, width: u32, height: u32);

    /// 0 = immediate, n > 0 = wait for n vblanks, -1 = adaptive
    fn set_swap_interval(&self, interval: i32) -> Result<()>;

    fn swap_buffers(&self) -> Result<()>;

    /// Address of an OpenGL entry point, null if unknown
    fn proc_address(&self, name: &str) -> *const c_void;
}

/// OpenGL 4.6 core context on a winit window, created with glutin
///
/// Fields drop in declaration order: the context and surface go before
/// the display, and the window that owns the native handle goes last.
pub struct GlutinSurface {
    context: PossiblyCurrentContext,
    surface: WindowGlSurface<WindowSurface>,
    display: Display,
    pixel_format: SurfacePixelFormat,
    window: Arc<Window>,
}

fn init_error(what: &str, error: impl std::fmt::Display) -> Error {
    Error::InitializationFailed(format!("{}: {}", what, error))
}

impl GlutinSurface {
    /// Create a context on `window` and make it current
    ///
    /// `debug` requests a debug context.
    pub fn new(window: Arc<Window>, debug: bool) -> Result<Self> {
        let raw_display = window
            .display_handle()
            .map_err(|e| init_error("no display handle", e))?
            .as_raw();
        let raw_window = window
            .window_handle()
            .map_err(|e| init_error("no window handle", e))?
            .as_raw();

        #[cfg(target_os = "windows")]
        let preference = DisplayApiPreference::Wgl(Some(raw_window));
        #[cfg(target_os = "macos")]
        let preference = DisplayApiPreference::Cgl;
        #[cfg(all(unix, not(target_os = "macos")))]
        let preference = DisplayApiPreference::Egl;

        // SAFETY: the handles come from a live winit window kept alive by `self.window`.
        let display = unsafe { Display::new(raw_display, preference) }
            .map_err(|e| init_error("could not open GL display", e))?;

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(0)
            .with_stencil_size(0)
            .with_transparency(false)
            .build();
        // SAFETY: the display is valid for the duration of the call.
        let config = unsafe { display.find_configs(template) }
            .map_err(|e| init_error("no GL config", e))?
            .next()
            .ok_or_else(|| Error::InitializationFailed("no suitable GL config".to_string()))?;
        let pixel_format = surface_format(config.color_buffer_type(), config.alpha_size());

        let (width, height) = non_zero_size(window.inner_size().into());
        let surface_attributes =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
        // SAFETY: `raw_window` outlives the surface, both are owned by `self`.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(|e| init_error("could not create window surface", e))?;

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 6))))
            .with_profile(GlProfile::Core)
            .with_debug(debug)
            .build(Some(raw_window));
        // SAFETY: `raw_window` is the window the surface was created for.
        let context = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(|e| init_error("could not create OpenGL 4.6 context", e))?
            .make_current(&surface)
            .map_err(|e| init_error("could not make the context current", e))?;

        engine_info!(SOURCE, "OpenGL context created ({:?})", pixel_format);
        Ok(Self { context, surface, display, pixel_format, window })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl Surface for GlutinSurface {
    fn drawable_size(&self) -> (u32, u32) {
        self.window.inner_size().into()
    }

    fn pixel_format(&self) -> SurfacePixelFormat {
        self.pixel_format
    }

    fn resize(&self, width: u32, height: u32) {
        // Minimized windows report 0x0; the surface keeps its last size
        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, width, height);
        }
    }

    fn set_swap_interval(&self, interval: i32) -> Result<()> {
        let interval = match interval {
            0 => SwapInterval::DontWait,
            n if n > 0 => match NonZeroU32::new(n as u32) {
                Some(n) => SwapInterval::Wait(n),
                None => SwapInterval::DontWait,
            },
            _ => return Err(Error::Unsupported("adaptive swap interval".to_string())),
        };
        self.surface
            .set_swap_interval(&self.context, interval)
            .map_err(|e| Error::BackendError(format!("could not set swap interval: {}", e)))?;
        engine_debug!(SOURCE, "swap interval set to {:?}", interval);
        Ok(())
    }

    fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| Error::BackendError(format!("swap buffers failed: {}", e)))
    }

    fn proc_address(&self, name: &str) -> *const c_void {
        match CString::new(name) {
            Ok(name) => self.display.get_proc_address(&name),
            Err(_) => std::ptr::null(),
        }
    }
}

fn non_zero_size((width, height): (u32, u32)) -> (NonZeroU32, NonZeroU32) {
    (
        NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
        NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
    )
}

/// Window format from the chosen config's channel sizes
fn surface_format(color: Option<ColorBufferType>, alpha: u8) -> SurfacePixelFormat {
    match color {
        Some(ColorBufferType::Rgb { r_size: 5, g_size: 6, b_size: 5 }) => SurfacePixelFormat::Rgb565,
        Some(ColorBufferType::Rgb { r_size: 8, g_size: 8, b_size: 8 }) if alpha <= 8 => SurfacePixelFormat::Rgba8,
        Some(ColorBufferType::Rgb { r_size: 10, g_size: 10, b_size: 10 }) => SurfacePixelFormat::Rgb10A2,
        _ => SurfacePixelFormat::Unknown,
    }
}

#[cfg(test)]
#[path = "gl_surface_tests.rs"]
mod tests;

/// Texture - immutable-storage OpenGL texture

use crate::gl_api::GlApi;
use crate::gl_debug::{check_gl_error, label_object};
use crate::gl_format;
use galaxy_3d_gpu::engine_bail;
use galaxy_3d_gpu::galaxy3d::gpu::{DeviceLimits, TextureDesc, TextureUsage};
use galaxy_3d_gpu::galaxy3d::{Error, Result};

/// OpenGL texture
///
/// Size, format and mip count are fixed at creation.
#[derive(Debug)]
pub struct Texture {
    /// OpenGL texture name (0 once destroyed)
    pub(crate) handle: u32,
    /// OpenGL texture target
    pub(crate) target: u32,
    pub(crate) desc: TextureDesc,
    /// Owned by the device, destroy is a no-op
    pub(crate) is_backbuffer: bool,
}

impl Texture {
    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn desc(&self) -> &TextureDesc {
        &self.desc
    }

    pub fn width(&self) -> u32 {
        self.desc.width
    }

    pub fn height(&self) -> u32 {
        self.desc.height
    }

    pub fn is_backbuffer(&self) -> bool {
        self.is_backbuffer
    }
}

pub(crate) fn create_texture<G: GlApi>(gl: &G, limits: &DeviceLimits, desc: &TextureDesc) -> Result<Texture> {
    // No image load/store path
    if desc.usage.contains(TextureUsage::SHADER_WRITE) {
        return Err(Error::Unsupported("shader-writable textures".to_string()));
    }
    limits.check_texture_extent(desc)?;
    let internal_format = gl_format::internal_format(desc.pixel_format).ok_or_else(|| {
        Error::Unsupported(format!("pixel format {:?} has no OpenGL storage", desc.pixel_format))
    })?;
    let target = gl_format::texture_target(desc.texture_type);

    let handle = gl.create_texture(target);
    if handle == 0 {
        engine_bail!("galaxy3d::opengl", "could not create texture");
    }
    check_gl_error!(gl, "glCreateTextures");

    label_object(gl, glow::TEXTURE, handle, desc.label.as_deref());
    gl.bind_buffer(glow::PIXEL_UNPACK_BUFFER, 0);

    let levels = desc.mipmap_levels.max(1) as i32;
    let (width, height, depth) = (desc.width as i32, desc.height as i32, desc.depth_or_slices as i32);
    gl.texture_parameter_i(handle, glow::TEXTURE_BASE_LEVEL, 0);
    gl.texture_parameter_i(handle, glow::TEXTURE_MAX_LEVEL, levels - 1);
    gl.texture_parameter_i(handle, glow::TEXTURE_COMPARE_MODE, glow::NONE as i32);
    match desc.texture_type.dimension() {
        1 => gl.texture_storage_1d(handle, levels, internal_format, width),
        2 => gl.texture_storage_2d(handle, levels, internal_format, width, height),
        _ => gl.texture_storage_3d(handle, levels, internal_format, width, height, depth),
    }
    check_gl_error!(gl, "glTextureStorage");

    Ok(Texture {
        handle,
        target,
        desc: desc.clone(),
        is_backbuffer: false,
    })
}

pub(crate) fn destroy_texture<G: GlApi>(gl: &G, texture: &mut Texture) {
    if texture.is_backbuffer {
        return;
    }
    if texture.handle != 0 {
        gl.delete_texture(texture.handle);
        texture.handle = 0;
    }
}

#[cfg(test)]
#[path = "gl_texture_tests.rs"]
mod tests;

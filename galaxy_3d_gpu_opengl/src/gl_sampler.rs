/// Sampler - OpenGL sampler object

use crate::gl_api::GlApi;
use crate::gl_debug::{check_gl_error, label_object};
use crate::gl_format;
use galaxy_3d_gpu::engine_bail;
use galaxy_3d_gpu::galaxy3d::gpu::{AddressMode, BorderColor, DeviceLimits, SamplerDesc};
use galaxy_3d_gpu::galaxy3d::Result;

#[derive(Debug)]
pub struct Sampler {
    /// OpenGL sampler name (0 once destroyed)
    pub(crate) handle: u32,
}

impl Sampler {
    pub fn handle(&self) -> u32 {
        self.handle
    }
}

pub(crate) fn create_sampler<G: GlApi>(gl: &G, limits: &DeviceLimits, desc: &SamplerDesc) -> Result<Sampler> {
    let handle = gl.create_sampler();
    if handle == 0 {
        engine_bail!("galaxy3d::opengl", "could not create sampler");
    }
    check_gl_error!(gl, "glCreateSamplers");
    label_object(gl, glow::SAMPLER, handle, desc.label.as_deref());

    let min = gl_format::min_filter(desc.min_filter, desc.mip_filter);
    gl.sampler_parameter_i(handle, glow::TEXTURE_MIN_FILTER, min as i32);
    gl.sampler_parameter_i(handle, glow::TEXTURE_MAG_FILTER, gl_format::mag_filter(desc.mag_filter) as i32);
    gl.sampler_parameter_i(handle, glow::TEXTURE_WRAP_S, gl_format::wrap_mode(desc.address_mode_u) as i32);
    gl.sampler_parameter_i(handle, glow::TEXTURE_WRAP_T, gl_format::wrap_mode(desc.address_mode_v) as i32);
    gl.sampler_parameter_i(handle, glow::TEXTURE_WRAP_R, gl_format::wrap_mode(desc.address_mode_r) as i32);

    // Clamp-to-zero borrows the border with transparent black
    let clamps_to_zero = [desc.address_mode_u, desc.address_mode_v, desc.address_mode_r]
        .contains(&AddressMode::ClampToZero);
    let border = if clamps_to_zero {
        BorderColor::TransparentBlack
    } else {
        desc.border_color
    };
    gl.sampler_parameter_fv(handle, glow::TEXTURE_BORDER_COLOR, &border.rgba());

    let anisotropy = limits.clamp_anisotropy(desc.max_anisotropy);
    gl.sampler_parameter_f(handle, glow::TEXTURE_MAX_ANISOTROPY, anisotropy as f32);
    check_gl_error!(gl, "glSamplerParameter");

    Ok(Sampler { handle })
}

pub(crate) fn destroy_sampler<G: GlApi>(gl: &G, sampler: &mut Sampler) {
    if sampler.handle != 0 {
        gl.delete_sampler(sampler.handle);
        sampler.handle = 0;
    }
}

#[cfg(test)]
#[path = "gl_sampler_tests.rs"]
mod tests;

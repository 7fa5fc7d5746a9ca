/// Shader - OpenGL shader object compiled from tagged GLSL source

use crate::gl_api::GlApi;
use crate::gl_debug::{check_gl_error, label_object, push_debug_group};
use galaxy_3d_gpu::galaxy3d::gpu::{ShaderDesc, ShaderStage};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::{engine_bail, engine_info};

const SOURCE: &str = "galaxy3d::opengl";

#[derive(Debug)]
pub struct Shader {
    /// OpenGL shader name (0 once destroyed)
    pub(crate) handle: u32,
    pub(crate) stage: ShaderStage,
}

impl Shader {
    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

pub(crate) fn create_shader<G: GlApi>(gl: &G, desc: &ShaderDesc, source: &[u8]) -> Result<Shader> {
    let label = desc.label.as_deref();
    if let Some(label) = label {
        push_debug_group(gl, "create shader: ", label);
    }
    let result = compile(gl, label, source);
    if label.is_some() {
        gl.pop_debug_group();
    }
    result
}

fn compile<G: GlApi>(gl: &G, label: Option<&str>, source: &[u8]) -> Result<Shader> {
    let stage = ShaderStage::detect(source)?;
    let text = std::str::from_utf8(source)
        .map_err(|_| Error::InvalidResource("shader source is not UTF-8".to_string()))?;

    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let handle = gl.create_shader(kind);
    if handle == 0 {
        engine_bail!(SOURCE, "could not create {:?} shader", stage);
    }

    gl.shader_source(handle, text);
    gl.compile_shader(handle);
    check_gl_error!(gl, "glCompileShader");

    if gl.get_shader_iv(handle, glow::INFO_LOG_LENGTH) > 0 {
        let log = gl.get_shader_info_log(handle);
        if !log.is_empty() {
            engine_info!(SOURCE, "shader compile log {}:\n{}", label.unwrap_or(""), log);
        }
    }
    if gl.get_shader_iv(handle, glow::COMPILE_STATUS) == 0 {
        gl.delete_shader(handle);
        engine_bail!(SOURCE, "failed to compile {:?} shader {}", stage, label.unwrap_or(""));
    }

    label_object(gl, glow::SHADER, handle, label);
    Ok(Shader { handle, stage })
}

pub(crate) fn destroy_shader<G: GlApi>(gl: &G, shader: &mut Shader) {
    if shader.handle != 0 {
        gl.delete_shader(shader.handle);
        shader.handle = 0;
    }
}

#[cfg(test)]
#[path = "gl_shader_tests.rs"]
mod tests;

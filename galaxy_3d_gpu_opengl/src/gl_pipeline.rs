/// Pipeline - vertex array + linked program, plus the draw state snapshot
/// reapplied every time the pipeline is set in a render pass

use crate::gl_api::GlApi;
use crate::gl_debug::{check_gl_error, label_object, push_debug_group};
use crate::gl_format;
use crate::gl_shader::Shader;
use galaxy_3d_gpu::galaxy3d::gpu::{
    ColorAttachmentBlend, CompareFunction, CullFace, DeviceLimits, FillMode, FrontFace,
    PipelineDesc, PrimitiveType, ShaderStage, StencilState, MAX_COLOR_ATTACHMENTS,
};
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::{engine_bail, engine_err, engine_info};

const SOURCE: &str = "galaxy3d::opengl";

/// Draw state that is global in OpenGL and has no native object
#[derive(Debug, Clone, Copy)]
pub struct PipelineState {
    pub primitive: PrimitiveType,
    pub vertex_stride: u32,
    pub color_attachments: [ColorAttachmentBlend; MAX_COLOR_ATTACHMENTS],
    pub color_count: usize,
    pub depth_write_enabled: bool,
    pub depth_function: CompareFunction,
    pub depth_bias_scale: f32,
    pub depth_bias: f32,
    pub depth_bias_clamp: f32,
    pub stencil_front: StencilState,
    pub stencil_back: StencilState,
    pub fill_mode: FillMode,
    pub cull_face: CullFace,
    pub front_face: FrontFace,
}

impl PipelineState {
    pub(crate) fn from_desc<S>(desc: &PipelineDesc<'_, S>) -> Self {
        let mut color_attachments = [ColorAttachmentBlend::default(); MAX_COLOR_ATTACHMENTS];
        for (slot, blend) in color_attachments.iter_mut().zip(&desc.color_attachments) {
            *slot = *blend;
        }
        Self {
            primitive: desc.primitive,
            vertex_stride: desc.vertex_stride,
            color_attachments,
            color_count: desc.color_attachments.len(),
            depth_write_enabled: desc.depth_write_enabled,
            depth_function: desc.depth_function,
            depth_bias_scale: desc.depth_bias_scale,
            depth_bias: desc.depth_bias,
            depth_bias_clamp: desc.depth_bias_clamp,
            stencil_front: desc.stencil_front,
            stencil_back: desc.stencil_back,
            fill_mode: desc.fill_mode,
            cull_face: desc.cull_face,
            front_face: desc.front_face,
        }
    }
}

#[derive(Debug)]
pub struct Pipeline {
    /// OpenGL vertex array name (0 once destroyed)
    pub(crate) vertex_array: u32,
    /// OpenGL program name (0 once destroyed)
    pub(crate) program: u32,
    pub(crate) state: PipelineState,
    pub(crate) label: Option<String>,
}

impl Pipeline {
    pub fn vertex_array(&self) -> u32 {
        self.vertex_array
    }

    pub fn program(&self) -> u32 {
        self.program
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

pub(crate) fn create_pipeline<G: GlApi>(
    gl: &G,
    limits: &DeviceLimits,
    desc: &PipelineDesc<'_, Shader>,
) -> Result<Pipeline> {
    limits.check_vertex_attributes(desc.vertex_attributes.len())?;
    if !desc.has_valid_attachment_count() {
        return Err(Error::CapabilityExceeded(format!(
            "too many color attachments: {} > {}",
            desc.color_attachments.len(),
            MAX_COLOR_ATTACHMENTS
        )));
    }
    check_shader(desc.vertex_shader, ShaderStage::Vertex)?;
    check_shader(desc.fragment_shader, ShaderStage::Fragment)?;

    let label = desc.label.as_deref();
    if let Some(label) = label {
        push_debug_group(gl, "create pipeline: ", label);
    }
    let result = build(gl, desc, label);
    if label.is_some() {
        gl.pop_debug_group();
    }
    result
}

fn check_shader(shader: &Shader, stage: ShaderStage) -> Result<()> {
    if shader.handle == 0 {
        return Err(Error::InvalidResource(format!("{:?} shader was destroyed", stage)));
    }
    if shader.stage != stage {
        return Err(Error::InvalidResource(format!(
            "expected a {:?} shader, got a {:?} shader",
            stage, shader.stage
        )));
    }
    Ok(())
}

fn build<G: GlApi>(gl: &G, desc: &PipelineDesc<'_, Shader>, label: Option<&str>) -> Result<Pipeline> {
    let vertex_array = gl.create_vertex_array();
    if vertex_array == 0 {
        engine_bail!(SOURCE, "could not create vertex array");
    }
    label_object(gl, glow::VERTEX_ARRAY, vertex_array, label);

    for attribute in &desc.vertex_attributes {
        let format = attribute.format;
        let size = format.component_count() as i32;
        let data_type = gl_format::vertex_type(format);
        gl.enable_vertex_array_attrib(vertex_array, attribute.index);
        if format.is_integer() {
            gl.vertex_array_attrib_i_format(vertex_array, attribute.index, size, data_type, attribute.offset);
        } else {
            gl.vertex_array_attrib_format(
                vertex_array,
                attribute.index,
                size,
                data_type,
                format.is_normalized(),
                attribute.offset,
            );
        }
        gl.vertex_array_attrib_binding(vertex_array, attribute.index, 0);
    }
    check_gl_error!(gl, "vertex array setup");

    let program = match link_program(gl, desc, label) {
        Ok(program) => program,
        Err(e) => {
            gl.delete_vertex_array(vertex_array);
            return Err(e);
        }
    };
    label_object(gl, glow::PROGRAM, program, label);

    Ok(Pipeline {
        vertex_array,
        program,
        state: PipelineState::from_desc(desc),
        label: desc.label.clone(),
    })
}

fn link_program<G: GlApi>(gl: &G, desc: &PipelineDesc<'_, Shader>, label: Option<&str>) -> Result<u32> {
    let program = gl.create_program();
    if program == 0 {
        engine_bail!(SOURCE, "could not create program");
    }
    gl.attach_shader(program, desc.vertex_shader.handle);
    gl.attach_shader(program, desc.fragment_shader.handle);

    gl.link_program(program);
    log_program_info(gl, program, "link", label);
    if gl.get_program_iv(program, glow::LINK_STATUS) == 0 {
        gl.delete_program(program);
        return Err(engine_err!(SOURCE, "failed to link program {}", label.unwrap_or("")));
    }

    gl.validate_program(program);
    log_program_info(gl, program, "validate", label);
    if gl.get_program_iv(program, glow::VALIDATE_STATUS) == 0 {
        gl.delete_program(program);
        return Err(engine_err!(SOURCE, "failed to validate program {}", label.unwrap_or("")));
    }
    check_gl_error!(gl, "glLinkProgram");
    Ok(program)
}

fn log_program_info<G: GlApi>(gl: &G, program: u32, step: &str, label: Option<&str>) {
    if gl.get_program_iv(program, glow::INFO_LOG_LENGTH) > 0 {
        let log = gl.get_program_info_log(program);
        if !log.is_empty() {
            engine_info!(SOURCE, "program {} log {}:\n{}", step, label.unwrap_or(""), log);
        }
    }
}

pub(crate) fn destroy_pipeline<G: GlApi>(gl: &G, pipeline: &mut Pipeline) {
    if pipeline.program != 0 {
        gl.delete_program(pipeline.program);
        pipeline.program = 0;
    }
    if pipeline.vertex_array != 0 {
        gl.delete_vertex_array(pipeline.vertex_array);
        pipeline.vertex_array = 0;
    }
}

#[cfg(test)]
#[path = "gl_pipeline_tests.rs"]
mod tests;

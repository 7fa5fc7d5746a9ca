/// Executor - replays a finished command buffer against OpenGL
///
/// Replay is strictly in recording order and stops at the end marker.
/// The only state carried between records is the render pass framebuffer,
/// its color count, and which debug groups are open.

use crate::gl_api::GlApi;
use crate::gl_command::{
    Command, CopyBufferToTexture, CopyTexture, SetPipeline, StartRenderPass,
};
use crate::gl_debug::{check_gl_error, label_object, push_debug_group};
use crate::gl_format;
use crate::gl_pipeline::PipelineState;
use galaxy_3d_gpu::galaxy3d::gpu::{ColorWriteMask, MAX_COLOR_ATTACHMENTS};
use galaxy_3d_gpu::galaxy3d::Result;
use galaxy_3d_gpu::{engine_err, engine_trace, engine_warn};

const SOURCE: &str = "galaxy3d::opengl";

/// State shared by the records of one pass
#[derive(Debug, Default)]
struct ExecutionState {
    /// Transient framebuffer of the open render pass (0 outside one)
    framebuffer: u32,
    color_count: usize,
    /// A labelled pass pushed a debug group
    pass_group: bool,
    /// A labelled pipeline pushed a debug group
    pipeline_group: bool,
}

impl ExecutionState {
    fn pop_pipeline_group<G: GlApi>(&mut self, gl: &G) {
        if self.pipeline_group {
            gl.pop_debug_group();
            self.pipeline_group = false;
        }
    }

    fn pop_pass_group<G: GlApi>(&mut self, gl: &G) {
        if self.pass_group {
            gl.pop_debug_group();
            self.pass_group = false;
        }
    }
}

/// Replay `commands` in order
///
/// Fails, leaving the rest unexecuted, if a render pass framebuffer cannot
/// be created or is incomplete.
pub(crate) fn execute<G: GlApi>(gl: &G, commands: &[Command]) -> Result<()> {
    let mut state = ExecutionState::default();

    for command in commands {
        engine_trace!(SOURCE, "replay {}", command.name());
        match command {
            Command::StartRenderPass(pass) => start_render_pass(gl, &mut state, pass)?,
            Command::SetPipeline(pipeline) => set_pipeline(gl, &mut state, pipeline),
            Command::SetViewport(viewport) => {
                gl.viewport(
                    viewport.x as i32,
                    viewport.y as i32,
                    viewport.width as i32,
                    viewport.height as i32,
                );
                gl.depth_range(viewport.znear, viewport.zfar);
            }
            Command::SetScissor(scissor) => {
                gl.scissor(scissor.x, scissor.y, scissor.width, scissor.height);
            }
            Command::SetBlendConstant([r, g, b, a]) => gl.blend_color(*r, *g, *b, *a),
            Command::SetBuffer(binding) => {
                gl.bind_buffer_range(
                    glow::SHADER_STORAGE_BUFFER,
                    binding.index,
                    binding.buffer,
                    binding.offset,
                    binding.size,
                );
            }
            Command::SetSampler { unit, sampler } => gl.bind_sampler(*unit, *sampler),
            Command::SetTexture { unit, texture } => gl.bind_texture_unit(*unit, *texture),
            Command::SetMesh(mesh) => {
                gl.bind_vertex_buffer(0, mesh.buffer, mesh.offset, mesh.stride as i32);
            }
            Command::Draw(draw) => {
                gl.draw_arrays(gl_format::primitive(draw.primitive), draw.first as i32, draw.count as i32);
                check_gl_error!(gl, "glDrawArrays");
            }
            Command::DrawIndexed(draw) => {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, draw.index_buffer);
                gl.draw_elements(
                    gl_format::primitive(draw.primitive),
                    draw.count as i32,
                    gl_format::index_type(draw.index_type),
                    draw.offset,
                );
                check_gl_error!(gl, "glDrawElements");
            }
            Command::DrawInstanced(_) | Command::DrawIndexedInstanced(_) => {
                engine_warn!(SOURCE, "{} is not supported, draw skipped", command.name());
            }
            Command::EndRenderPass => end_render_pass(gl, &mut state),
            Command::StartBlitPass { label } => {
                if let Some(label) = label {
                    push_debug_group(gl, "Start blit Pass: ", label);
                    state.pass_group = true;
                }
            }
            Command::FillBuffer(fill) => {
                gl.clear_named_buffer_sub_data(
                    fill.buffer,
                    glow::R8,
                    fill.offset,
                    fill.size,
                    glow::RED,
                    glow::UNSIGNED_BYTE,
                    &[fill.value],
                );
            }
            Command::GenerateMipmaps { texture } => gl.generate_texture_mipmap(*texture),
            Command::CopyTexture(copy) => copy_texture(gl, copy),
            Command::CopyBuffer(copy) => {
                gl.copy_named_buffer_sub_data(copy.src, copy.dst, copy.src_offset, copy.dst_offset, copy.size);
            }
            Command::CopyBufferToTexture1D(copy) => {
                gl.bind_buffer(glow::PIXEL_UNPACK_BUFFER, copy.buffer);
                gl.texture_sub_image_1d(
                    copy.texture,
                    copy.level,
                    copy.x,
                    copy.width,
                    copy.data_format,
                    copy.data_type,
                    copy.src_offset,
                );
                gl.bind_buffer(glow::PIXEL_UNPACK_BUFFER, 0);
            }
            Command::CopyBufferToTexture2D(copy) => copy_buffer_to_texture_2d(gl, copy),
            Command::EndBlitPass => state.pop_pass_group(gl),
            Command::End => break,
        }
    }
    Ok(())
}

fn start_render_pass<G: GlApi>(gl: &G, state: &mut ExecutionState, pass: &StartRenderPass) -> Result<()> {
    let label = pass.label.as_deref();
    if let Some(label) = label {
        push_debug_group(gl, "Start Render Pass: ", label);
        state.pass_group = true;
    }

    let framebuffer = gl.create_framebuffer();
    if framebuffer == 0 {
        state.pop_pass_group(gl);
        return Err(engine_err!(SOURCE, "could not create render pass framebuffer"));
    }
    label_object(gl, glow::FRAMEBUFFER, framebuffer, label);
    gl.bind_framebuffer(glow::DRAW_FRAMEBUFFER, framebuffer);

    // Clears honour the scissor test
    gl.disable(glow::SCISSOR_TEST);

    let mut draw_buffers = [glow::NONE; MAX_COLOR_ATTACHMENTS];
    for (slot, color) in pass.colors.iter().enumerate().take(pass.color_count) {
        if color.texture != 0 {
            draw_buffers[slot] = glow::COLOR_ATTACHMENT0 + slot as u32;
        }
    }
    gl.named_framebuffer_draw_buffers(framebuffer, &draw_buffers);

    for (slot, color) in pass.colors.iter().enumerate().take(pass.color_count) {
        if color.texture == 0 {
            continue;
        }
        gl.color_mask_i(slot as u32, true, true, true, true);
        gl.named_framebuffer_texture(framebuffer, glow::COLOR_ATTACHMENT0 + slot as u32, color.texture, 0);
        if let Some(clear) = color.clear {
            gl.clear_named_framebuffer_fv(framebuffer, glow::COLOR, slot as i32, &clear);
        }
    }

    if pass.depth != 0 {
        gl.named_framebuffer_texture(framebuffer, glow::DEPTH_ATTACHMENT, pass.depth, 0);
        if let Some(depth) = pass.clear_depth {
            gl.depth_mask(true);
            gl.clear_named_framebuffer_fv(framebuffer, glow::DEPTH, 0, &[depth]);
        }
    }

    if pass.stencil != 0 {
        gl.named_framebuffer_texture(framebuffer, glow::STENCIL_ATTACHMENT, pass.stencil, 0);
        if let Some(stencil) = pass.clear_stencil {
            gl.stencil_mask_separate(glow::FRONT_AND_BACK, !0);
            gl.clear_named_framebuffer_iv(framebuffer, glow::STENCIL, 0, &[stencil]);
        }
        gl.enable(glow::STENCIL_TEST);
    } else {
        gl.disable(glow::STENCIL_TEST);
    }

    if !pass.invalidate.is_empty() {
        gl.invalidate_named_framebuffer_data(framebuffer, &pass.invalidate);
    }
    gl.enable(glow::SCISSOR_TEST);

    let status = gl.check_named_framebuffer_status(framebuffer, glow::DRAW_FRAMEBUFFER);
    if status != glow::FRAMEBUFFER_COMPLETE {
        gl.delete_framebuffer(framebuffer);
        state.pop_pass_group(gl);
        return Err(engine_err!(
            SOURCE,
            "render pass framebuffer incomplete: 0x{:04X} {}",
            status,
            label.unwrap_or("")
        ));
    }
    check_gl_error!(gl, "start render pass");

    state.framebuffer = framebuffer;
    state.color_count = pass.color_count;
    Ok(())
}

fn set_pipeline<G: GlApi>(gl: &G, state: &mut ExecutionState, pipeline: &SetPipeline) {
    state.pop_pipeline_group(gl);
    if let Some(label) = pipeline.label.as_deref() {
        push_debug_group(gl, "Pipeline: ", label);
        state.pipeline_group = true;
    }

    gl.bind_vertex_array(pipeline.vertex_array);
    gl.use_program(pipeline.program);
    apply_draw_state(gl, &pipeline.state, state.color_count);
    check_gl_error!(gl, "set pipeline");
}

/// Apply blend, depth, stencil and rasterizer state for the first
/// `color_count` attachments of the current pass
fn apply_draw_state<G: GlApi>(gl: &G, pipeline: &PipelineState, color_count: usize) {
    for (slot, blend) in pipeline.color_attachments.iter().enumerate().take(color_count) {
        let slot = slot as u32;
        if blend.blending_enabled {
            gl.enable_i(glow::BLEND, slot);
            gl.blend_equation_separate_i(
                slot,
                gl_format::blend_operation(blend.rgb_blend_op),
                gl_format::blend_operation(blend.alpha_blend_op),
            );
            gl.blend_func_separate_i(
                slot,
                gl_format::blend_factor(blend.rgb_src_blend_factor),
                gl_format::blend_factor(blend.rgb_dst_blend_factor),
                gl_format::blend_factor(blend.alpha_src_blend_factor),
                gl_format::blend_factor(blend.alpha_dst_blend_factor),
            );
        } else {
            gl.disable_i(glow::BLEND, slot);
        }
        let ColorWriteMask { red, green, blue, alpha } = blend.write_mask;
        gl.color_mask_i(slot, red, green, blue, alpha);
    }

    gl.depth_mask(pipeline.depth_write_enabled);
    gl.depth_func(gl_format::compare_function(pipeline.depth_function));
    gl.polygon_offset_clamp(pipeline.depth_bias_scale, pipeline.depth_bias, pipeline.depth_bias_clamp);

    for (face, stencil) in [(glow::FRONT, &pipeline.stencil_front), (glow::BACK, &pipeline.stencil_back)] {
        gl.stencil_func_separate(
            face,
            gl_format::compare_function(stencil.function),
            stencil.reference,
            stencil.read_mask,
        );
        gl.stencil_mask_separate(face, stencil.write_mask);
        gl.stencil_op_separate(
            face,
            gl_format::stencil_operation(stencil.stencil_fail),
            gl_format::stencil_operation(stencil.depth_fail),
            gl_format::stencil_operation(stencil.depth_and_stencil_pass),
        );
    }

    gl.polygon_mode(glow::FRONT_AND_BACK, gl_format::polygon_mode(pipeline.fill_mode));
    match gl_format::cull_face(pipeline.cull_face) {
        Some(face) => {
            gl.enable(glow::CULL_FACE);
            gl.front_face(gl_format::front_face(pipeline.front_face));
            gl.cull_face(face);
        }
        None => gl.disable(glow::CULL_FACE),
    }
}

fn end_render_pass<G: GlApi>(gl: &G, state: &mut ExecutionState) {
    state.pop_pipeline_group(gl);
    if state.framebuffer != 0 {
        gl.delete_framebuffer(state.framebuffer);
    }
    state.pop_pass_group(gl);
    state.framebuffer = 0;
    state.color_count = 0;
}

fn copy_texture<G: GlApi>(gl: &G, copy: &CopyTexture) {
    let (src, dst) = (&copy.src, &copy.dst);
    gl.copy_image_sub_data(
        src.texture, src.target, src.level, src.x, src.y, src.z,
        dst.texture, dst.target, dst.level, dst.x, dst.y, dst.z,
        copy.width, copy.height, copy.depth,
    );
    check_gl_error!(gl, "glCopyImageSubData");
}

/// Rows go up in one call when the pitch keeps the default 4-byte unpack
/// alignment, one call per row otherwise
fn copy_buffer_to_texture_2d<G: GlApi>(gl: &G, copy: &CopyBufferToTexture) {
    gl.bind_buffer(glow::PIXEL_UNPACK_BUFFER, copy.buffer);
    if copy.src_pitch % 4 == 0 {
        gl.texture_sub_image_2d(
            copy.texture,
            copy.level,
            copy.x,
            copy.y,
            copy.width,
            copy.height,
            copy.data_format,
            copy.data_type,
            copy.src_offset,
        );
    } else {
        for row in 0..copy.height {
            gl.texture_sub_image_2d(
                copy.texture,
                copy.level,
                copy.x,
                copy.y + row,
                copy.width,
                1,
                copy.data_format,
                copy.data_type,
                copy.src_offset + row as usize * copy.src_pitch as usize,
            );
        }
    }
    gl.bind_buffer(glow::PIXEL_UNPACK_BUFFER, 0);
    check_gl_error!(gl, "glTextureSubImage2D");
}

#[cfg(test)]
#[path = "gl_executor_tests.rs"]
mod tests;

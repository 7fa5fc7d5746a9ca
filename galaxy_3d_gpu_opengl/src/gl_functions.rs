/// GlFunctions - OpenGL entry points resolved by name at device creation
///
/// Every entry point the backend calls is listed once in the table below.
/// Loading fails if any of them is missing, and the error names all the
/// missing ones at once.

use galaxy_3d_gpu::galaxy3d::{Error, Result};
use std::ffi::{c_char, c_void};

/// `GLDEBUGPROC`
pub type DebugProc = extern "system" fn(
    source: u32,
    gltype: u32,
    id: u32,
    severity: u32,
    length: i32,
    message: *const c_char,
    user_param: *mut c_void,
);

macro_rules! gl_functions {
    ($( $field:ident = $name:literal : fn($($arg:ty),*) $(-> $ret:ty)? ; )*) => {
        /// Table of resolved OpenGL 4.6 entry points
        ///
        /// The pointers are only valid while the context they were loaded
        /// from is current on the calling thread.
        pub struct GlFunctions {
            $( pub(crate) $field: unsafe extern "system" fn($($arg),*) $(-> $ret)?, )*
        }

        /// Names of every entry point `GlFunctions::load` resolves
        pub const REQUIRED_ENTRY_POINTS: &[&str] = &[$($name),*];

        impl GlFunctions {
            /// Resolve every entry point through `loader`
            ///
            /// `loader` returns a null pointer for unknown names.
            ///
            /// # Safety
            ///
            /// Every non-null address returned by `loader` must be the entry
            /// point of that name, and the context it belongs to must be
            /// current whenever a function of the table is called.
            pub unsafe fn load<F>(mut loader: F) -> Result<Self>
            where
                F: FnMut(&str) -> *const c_void,
            {
                let mut missing: Vec<&'static str> = Vec::new();
                $(
                    let $field = loader($name);
                    if $field.is_null() {
                        missing.push($name);
                    }
                )*

                if !missing.is_empty() {
                    let message = format!("missing OpenGL entry points: {}", missing.join(", "));
                    galaxy_3d_gpu::engine_error!("galaxy3d::opengl", "{}", message);
                    return Err(Error::InitializationFailed(message));
                }

                // SAFETY: every pointer is non-null and, per the caller's
                // contract, matches the signature declared in the table.
                unsafe {
                    Ok(Self {
                        $(
                            $field: std::mem::transmute::<
                                *const c_void,
                                unsafe extern "system" fn($($arg),*) $(-> $ret)?,
                            >($field),
                        )*
                    })
                }
            }
        }
    };
}

gl_functions! {
    // ===== BOOTSTRAP / GLOBAL STATE =====
    get_error = "glGetError": fn() -> u32;
    get_integerv = "glGetIntegerv": fn(u32, *mut i32);
    get_string = "glGetString": fn(u32) -> *const u8;
    enable = "glEnable": fn(u32);
    disable = "glDisable": fn(u32);
    enablei = "glEnablei": fn(u32, u32);
    disablei = "glDisablei": fn(u32, u32);
    clip_control = "glClipControl": fn(u32, u32);
    debug_message_callback = "glDebugMessageCallback": fn(Option<DebugProc>, *const c_void);
    debug_message_control = "glDebugMessageControl": fn(u32, u32, u32, i32, *const u32, u8);

    // ===== FRAMEBUFFERS =====
    create_framebuffers = "glCreateFramebuffers": fn(i32, *mut u32);
    delete_framebuffers = "glDeleteFramebuffers": fn(i32, *const u32);
    bind_framebuffer = "glBindFramebuffer": fn(u32, u32);
    named_framebuffer_texture = "glNamedFramebufferTexture": fn(u32, u32, u32, i32);
    named_framebuffer_draw_buffers = "glNamedFramebufferDrawBuffers": fn(u32, i32, *const u32);
    named_framebuffer_read_buffer = "glNamedFramebufferReadBuffer": fn(u32, u32);
    check_named_framebuffer_status = "glCheckNamedFramebufferStatus": fn(u32, u32) -> u32;
    clear_named_framebufferfv = "glClearNamedFramebufferfv": fn(u32, u32, i32, *const f32);
    clear_named_framebufferiv = "glClearNamedFramebufferiv": fn(u32, u32, i32, *const i32);
    invalidate_named_framebuffer_data = "glInvalidateNamedFramebufferData": fn(u32, i32, *const u32);
    blit_named_framebuffer = "glBlitNamedFramebuffer": fn(u32, u32, i32, i32, i32, i32, i32, i32, i32, i32, u32, u32);

    // ===== BUFFERS =====
    create_buffers = "glCreateBuffers": fn(i32, *mut u32);
    delete_buffers = "glDeleteBuffers": fn(i32, *const u32);
    named_buffer_storage = "glNamedBufferStorage": fn(u32, isize, *const c_void, u32);
    map_named_buffer = "glMapNamedBuffer": fn(u32, u32) -> *mut c_void;
    unmap_named_buffer = "glUnmapNamedBuffer": fn(u32) -> u8;
    bind_buffer = "glBindBuffer": fn(u32, u32);
    bind_buffer_range = "glBindBufferRange": fn(u32, u32, u32, isize, isize);
    bind_vertex_buffer = "glBindVertexBuffer": fn(u32, u32, isize, i32);
    clear_named_buffer_sub_data = "glClearNamedBufferSubData": fn(u32, u32, isize, isize, u32, u32, *const c_void);
    copy_named_buffer_sub_data = "glCopyNamedBufferSubData": fn(u32, u32, isize, isize, isize);

    // ===== TEXTURES =====
    create_textures = "glCreateTextures": fn(u32, i32, *mut u32);
    delete_textures = "glDeleteTextures": fn(i32, *const u32);
    texture_parameteri = "glTextureParameteri": fn(u32, u32, i32);
    texture_storage1d = "glTextureStorage1D": fn(u32, i32, u32, i32);
    texture_storage2d = "glTextureStorage2D": fn(u32, i32, u32, i32, i32);
    texture_storage3d = "glTextureStorage3D": fn(u32, i32, u32, i32, i32, i32);
    texture_sub_image1d = "glTextureSubImage1D": fn(u32, i32, i32, i32, u32, u32, *const c_void);
    texture_sub_image2d = "glTextureSubImage2D": fn(u32, i32, i32, i32, i32, i32, u32, u32, *const c_void);
    bind_texture_unit = "glBindTextureUnit": fn(u32, u32);
    generate_texture_mipmap = "glGenerateTextureMipmap": fn(u32);
    copy_image_sub_data = "glCopyImageSubData": fn(u32, u32, i32, i32, i32, i32, u32, u32, i32, i32, i32, i32, i32, i32, i32);

    // ===== SAMPLERS =====
    create_samplers = "glCreateSamplers": fn(i32, *mut u32);
    delete_samplers = "glDeleteSamplers": fn(i32, *const u32);
    sampler_parameteri = "glSamplerParameteri": fn(u32, u32, i32);
    sampler_parameterf = "glSamplerParameterf": fn(u32, u32, f32);
    sampler_parameterfv = "glSamplerParameterfv": fn(u32, u32, *const f32);
    bind_sampler = "glBindSampler": fn(u32, u32);

    // ===== SHADERS / PROGRAMS =====
    create_shader = "glCreateShader": fn(u32) -> u32;
    delete_shader = "glDeleteShader": fn(u32);
    shader_source = "glShaderSource": fn(u32, i32, *const *const c_char, *const i32);
    compile_shader = "glCompileShader": fn(u32);
    get_shaderiv = "glGetShaderiv": fn(u32, u32, *mut i32);
    get_shader_info_log = "glGetShaderInfoLog": fn(u32, i32, *mut i32, *mut c_char);
    create_program = "glCreateProgram": fn() -> u32;
    delete_program = "glDeleteProgram": fn(u32);
    attach_shader = "glAttachShader": fn(u32, u32);
    link_program = "glLinkProgram": fn(u32);
    validate_program = "glValidateProgram": fn(u32);
    get_programiv = "glGetProgramiv": fn(u32, u32, *mut i32);
    get_program_info_log = "glGetProgramInfoLog": fn(u32, i32, *mut i32, *mut c_char);
    use_program = "glUseProgram": fn(u32);

    // ===== VERTEX ARRAYS =====
    create_vertex_arrays = "glCreateVertexArrays": fn(i32, *mut u32);
    delete_vertex_arrays = "glDeleteVertexArrays": fn(i32, *const u32);
    bind_vertex_array = "glBindVertexArray": fn(u32);
    enable_vertex_array_attrib = "glEnableVertexArrayAttrib": fn(u32, u32);
    vertex_array_attrib_format = "glVertexArrayAttribFormat": fn(u32, u32, i32, u32, u8, u32);
    vertex_array_attrib_i_format = "glVertexArrayAttribIFormat": fn(u32, u32, i32, u32, u32);
    vertex_array_attrib_binding = "glVertexArrayAttribBinding": fn(u32, u32, u32);

    // ===== PIPELINE STATE =====
    blend_color = "glBlendColor": fn(f32, f32, f32, f32);
    blend_equation_separatei = "glBlendEquationSeparatei": fn(u32, u32, u32);
    blend_func_separatei = "glBlendFuncSeparatei": fn(u32, u32, u32, u32, u32);
    color_maski = "glColorMaski": fn(u32, u8, u8, u8, u8);
    depth_mask = "glDepthMask": fn(u8);
    depth_func = "glDepthFunc": fn(u32);
    polygon_offset_clamp = "glPolygonOffsetClamp": fn(f32, f32, f32);
    stencil_func_separate = "glStencilFuncSeparate": fn(u32, u32, i32, u32);
    stencil_mask_separate = "glStencilMaskSeparate": fn(u32, u32);
    stencil_op_separate = "glStencilOpSeparate": fn(u32, u32, u32, u32);
    polygon_mode = "glPolygonMode": fn(u32, u32);
    cull_face = "glCullFace": fn(u32);
    front_face = "glFrontFace": fn(u32);
    viewport = "glViewport": fn(i32, i32, i32, i32);
    depth_range = "glDepthRange": fn(f64, f64);
    scissor = "glScissor": fn(i32, i32, i32, i32);

    // ===== DRAWS / DEBUG =====
    draw_arrays = "glDrawArrays": fn(u32, i32, i32);
    draw_elements = "glDrawElements": fn(u32, i32, u32, *const c_void);
    object_label = "glObjectLabel": fn(u32, u32, i32, *const c_char);
    push_debug_group = "glPushDebugGroup": fn(u32, u32, i32, *const c_char);
    pop_debug_group = "glPopDebugGroup": fn();
}

#[cfg(test)]
#[path = "gl_functions_tests.rs"]
mod tests;

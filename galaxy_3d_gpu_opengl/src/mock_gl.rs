/// RecordingGl - GlApi implementation for tests
///
/// Appends one line per native call (`"glDrawArrays(4, 0, 3)"`), hands out
/// increasing object names and answers queries like a conforming 4.6 driver.
/// Failures are injected per test: zero names from a given create call,
/// incomplete framebuffers, low version, compile/link errors, unmap errors.

use crate::gl_api::GlApi;
use crate::gl_functions::DebugProc;
use crate::gl_surface::Surface;
use galaxy_3d_gpu::galaxy3d::gpu::SurfacePixelFormat;
use galaxy_3d_gpu::galaxy3d::{Error, Result};
use galaxy_3d_gpu::galaxy3d::log::{LogEntry, LogSeverity, Logger};
use galaxy_3d_gpu::galaxy3d::Engine;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::ffi::c_void;
use std::sync::{Arc, Mutex};

// ===== LOG CAPTURE =====

/// Engine logger collecting `(severity, message)` pairs
///
/// Installing it replaces the global logger; callers must be `#[serial]`.
pub(crate) struct LogCapture {
    entries: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((entry.severity, entry.message.clone()));
    }
}

impl LogCapture {
    pub(crate) fn install() -> Self {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(CaptureLogger { entries: entries.clone() });
        Self { entries }
    }

    pub(crate) fn entries(&self) -> Vec<(LogSeverity, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages logged at `severity`
    pub(crate) fn messages(&self, severity: LogSeverity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Drop for LogCapture {
    fn drop(&mut self) {
        Engine::reset_logger();
    }
}

pub(crate) struct RecordingGl {
    calls: RefCell<Vec<String>>,
    next_name: Cell<u32>,
    zero_names_from: RefCell<Vec<&'static str>>,
    incomplete_framebuffer: Cell<bool>,
    version: Cell<(i32, i32)>,
    compile_fails: Cell<bool>,
    link_fails: Cell<bool>,
    unmap_fails: Cell<bool>,
    info_log: RefCell<String>,
    buffers: RefCell<FxHashMap<u32, Vec<u8>>>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            zero_names_from: RefCell::new(Vec::new()),
            incomplete_framebuffer: Cell::new(false),
            version: Cell::new((4, 6)),
            compile_fails: Cell::new(false),
            link_fails: Cell::new(false),
            unmap_fails: Cell::new(false),
            info_log: RefCell::new(String::new()),
            buffers: RefCell::new(FxHashMap::default()),
        }
    }

    // ===== FAILURE INJECTION =====

    /// Make `call` (e.g. "glCreateTextures") return 0
    pub(crate) fn fail_create(&self, call: &'static str) {
        self.zero_names_from.borrow_mut().push(call);
    }

    pub(crate) fn set_framebuffer_incomplete(&self, incomplete: bool) {
        self.incomplete_framebuffer.set(incomplete);
    }

    pub(crate) fn set_version(&self, major: i32, minor: i32) {
        self.version.set((major, minor));
    }

    pub(crate) fn set_compile_fails(&self, fails: bool) {
        self.compile_fails.set(fails);
    }

    pub(crate) fn set_link_fails(&self, fails: bool) {
        self.link_fails.set(fails);
    }

    pub(crate) fn set_unmap_fails(&self, fails: bool) {
        self.unmap_fails.set(fails);
    }

    /// Info log returned for every shader and program
    pub(crate) fn set_info_log(&self, log: &str) {
        *self.info_log.borrow_mut() = log.to_string();
    }

    // ===== INSPECTION =====

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Function names only, in call order
    pub(crate) fn names(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.split('(').next().unwrap_or_default().to_string())
            .collect()
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.names().iter().filter(|n| *n == name).count()
    }

    /// Index of the first call starting with `prefix`
    pub(crate) fn position(&self, prefix: &str) -> Option<usize> {
        self.calls.borrow().iter().position(|call| call.starts_with(prefix))
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Bytes currently stored in `buffer`
    pub(crate) fn buffer_contents(&self, buffer: u32) -> Option<Vec<u8>> {
        self.buffers.borrow().get(&buffer).cloned()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn new_name(&self, call: &'static str) -> u32 {
        if self.zero_names_from.borrow().contains(&call) {
            return 0;
        }
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }
}

impl GlApi for RecordingGl {
    fn get_error(&self) -> u32 {
        glow::NO_ERROR
    }

    fn get_integer(&self, pname: u32) -> i32 {
        self.record(format!("glGetIntegerv({})", pname));
        match pname {
            glow::MAJOR_VERSION => self.version.get().0,
            glow::MINOR_VERSION => self.version.get().1,
            glow::MAX_TEXTURE_SIZE => 16384,
            glow::MAX_3D_TEXTURE_SIZE => 2048,
            glow::MAX_VERTEX_ATTRIBS => 16,
            glow::MAX_TEXTURE_MAX_ANISOTROPY => 16,
            _ => 0,
        }
    }

    fn get_string(&self, name: u32) -> Option<String> {
        self.record(format!("glGetString({})", name));
        match name {
            glow::VENDOR => Some("Recording".to_string()),
            glow::RENDERER => Some("RecordingGl".to_string()),
            glow::VERSION => Some("4.6 (recording)".to_string()),
            glow::SHADING_LANGUAGE_VERSION => Some("4.60".to_string()),
            _ => None,
        }
    }

    fn enable(&self, cap: u32) {
        self.record(format!("glEnable({})", cap));
    }

    fn disable(&self, cap: u32) {
        self.record(format!("glDisable({})", cap));
    }

    fn enable_i(&self, cap: u32, index: u32) {
        self.record(format!("glEnablei({}, {})", cap, index));
    }

    fn disable_i(&self, cap: u32, index: u32) {
        self.record(format!("glDisablei({}, {})", cap, index));
    }

    fn clip_control(&self, origin: u32, depth: u32) {
        self.record(format!("glClipControl({}, {})", origin, depth));
    }

    fn debug_message_callback(&self, _callback: DebugProc) {
        self.record("glDebugMessageCallback()".to_string());
    }

    fn debug_message_control_all(&self, enabled: bool) {
        self.record(format!("glDebugMessageControl({})", enabled));
    }

    fn create_framebuffer(&self) -> u32 {
        let name = self.new_name("glCreateFramebuffers");
        self.record(format!("glCreateFramebuffers() -> {}", name));
        name
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        self.record(format!("glDeleteFramebuffers({})", framebuffer));
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: u32) {
        self.record(format!("glBindFramebuffer({}, {})", target, framebuffer));
    }

    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: u32, texture: u32, level: i32) {
        self.record(format!("glNamedFramebufferTexture({}, {}, {}, {})", framebuffer, attachment, texture, level));
    }

    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, buffers: &[u32]) {
        self.record(format!("glNamedFramebufferDrawBuffers({}, {:?})", framebuffer, buffers));
    }

    fn named_framebuffer_read_buffer(&self, framebuffer: u32, source: u32) {
        self.record(format!("glNamedFramebufferReadBuffer({}, {})", framebuffer, source));
    }

    fn check_named_framebuffer_status(&self, framebuffer: u32, target: u32) -> u32 {
        self.record(format!("glCheckNamedFramebufferStatus({}, {})", framebuffer, target));
        if self.incomplete_framebuffer.get() {
            glow::FRAMEBUFFER_INCOMPLETE_ATTACHMENT
        } else {
            glow::FRAMEBUFFER_COMPLETE
        }
    }

    fn clear_named_framebuffer_fv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[f32]) {
        self.record(format!("glClearNamedFramebufferfv({}, {}, {}, {:?})", framebuffer, buffer, draw_buffer, value));
    }

    fn clear_named_framebuffer_iv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[i32]) {
        self.record(format!("glClearNamedFramebufferiv({}, {}, {}, {:?})", framebuffer, buffer, draw_buffer, value));
    }

    fn invalidate_named_framebuffer_data(&self, framebuffer: u32, attachments: &[u32]) {
        self.record(format!("glInvalidateNamedFramebufferData({}, {:?})", framebuffer, attachments));
    }

    fn blit_named_framebuffer(&self, read: u32, draw: u32, src: [i32; 4], dst: [i32; 4], mask: u32, filter: u32) {
        self.record(format!(
            "glBlitNamedFramebuffer({}, {}, {:?}, {:?}, {}, {})",
            read, draw, src, dst, mask, filter
        ));
    }

    fn create_buffer(&self) -> u32 {
        let name = self.new_name("glCreateBuffers");
        self.record(format!("glCreateBuffers() -> {}", name));
        name
    }

    fn delete_buffer(&self, buffer: u32) {
        self.buffers.borrow_mut().remove(&buffer);
        self.record(format!("glDeleteBuffers({})", buffer));
    }

    fn named_buffer_storage(&self, buffer: u32, size: usize, data: Option<&[u8]>, flags: u32) {
        let contents = match data {
            Some(bytes) => bytes[..size.min(bytes.len())].to_vec(),
            None => vec![0; size],
        };
        self.buffers.borrow_mut().insert(buffer, contents);
        self.record(format!("glNamedBufferStorage({}, {}, {}, {})", buffer, size, data.is_some(), flags));
    }

    fn map_named_buffer(&self, buffer: u32, access: u32) -> *mut c_void {
        self.record(format!("glMapNamedBuffer({}, {})", buffer, access));
        match self.buffers.borrow_mut().get_mut(&buffer) {
            Some(bytes) => bytes.as_mut_ptr() as *mut c_void,
            None => std::ptr::null_mut(),
        }
    }

    fn unmap_named_buffer(&self, buffer: u32) -> bool {
        self.record(format!("glUnmapNamedBuffer({})", buffer));
        !self.unmap_fails.get()
    }

    fn bind_buffer(&self, target: u32, buffer: u32) {
        self.record(format!("glBindBuffer({}, {})", target, buffer));
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: u32, offset: usize, size: usize) {
        self.record(format!("glBindBufferRange({}, {}, {}, {}, {})", target, index, buffer, offset, size));
    }

    fn bind_vertex_buffer(&self, binding: u32, buffer: u32, offset: usize, stride: i32) {
        self.record(format!("glBindVertexBuffer({}, {}, {}, {})", binding, buffer, offset, stride));
    }

    fn clear_named_buffer_sub_data(
        &self,
        buffer: u32,
        internal_format: u32,
        offset: usize,
        size: usize,
        format: u32,
        data_type: u32,
        value: &[u8],
    ) {
        self.record(format!(
            "glClearNamedBufferSubData({}, {}, {}, {}, {}, {}, {:?})",
            buffer, internal_format, offset, size, format, data_type, value
        ));
    }

    fn copy_named_buffer_sub_data(&self, src: u32, dst: u32, src_offset: usize, dst_offset: usize, size: usize) {
        self.record(format!("glCopyNamedBufferSubData({}, {}, {}, {}, {})", src, dst, src_offset, dst_offset, size));
    }

    fn create_texture(&self, target: u32) -> u32 {
        let name = self.new_name("glCreateTextures");
        self.record(format!("glCreateTextures({}) -> {}", target, name));
        name
    }

    fn delete_texture(&self, texture: u32) {
        self.record(format!("glDeleteTextures({})", texture));
    }

    fn texture_parameter_i(&self, texture: u32, pname: u32, param: i32) {
        self.record(format!("glTextureParameteri({}, {}, {})", texture, pname, param));
    }

    fn texture_storage_1d(&self, texture: u32, levels: i32, internal_format: u32, width: i32) {
        self.record(format!("glTextureStorage1D({}, {}, {}, {})", texture, levels, internal_format, width));
    }

    fn texture_storage_2d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32) {
        self.record(format!(
            "glTextureStorage2D({}, {}, {}, {}, {})",
            texture, levels, internal_format, width, height
        ));
    }

    fn texture_storage_3d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32, depth: i32) {
        self.record(format!(
            "glTextureStorage3D({}, {}, {}, {}, {}, {})",
            texture, levels, internal_format, width, height, depth
        ));
    }

    fn texture_sub_image_1d(&self, texture: u32, level: i32, x: i32, width: i32, format: u32, data_type: u32, offset: usize) {
        self.record(format!(
            "glTextureSubImage1D({}, {}, {}, {}, {}, {}, {})",
            texture, level, x, width, format, data_type, offset
        ));
    }

    fn texture_sub_image_2d(
        &self,
        texture: u32,
        level: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        data_type: u32,
        offset: usize,
    ) {
        self.record(format!(
            "glTextureSubImage2D({}, {}, {}, {}, {}, {}, {}, {}, {})",
            texture, level, x, y, width, height, format, data_type, offset
        ));
    }

    fn bind_texture_unit(&self, unit: u32, texture: u32) {
        self.record(format!("glBindTextureUnit({}, {})", unit, texture));
    }

    fn generate_texture_mipmap(&self, texture: u32) {
        self.record(format!("glGenerateTextureMipmap({})", texture));
    }

    fn copy_image_sub_data(
        &self,
        src: u32,
        src_target: u32,
        src_level: i32,
        src_x: i32,
        src_y: i32,
        src_z: i32,
        dst: u32,
        dst_target: u32,
        dst_level: i32,
        dst_x: i32,
        dst_y: i32,
        dst_z: i32,
        width: i32,
        height: i32,
        depth: i32,
    ) {
        self.record(format!(
            "glCopyImageSubData({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
            src, src_target, src_level, src_x, src_y, src_z,
            dst, dst_target, dst_level, dst_x, dst_y, dst_z,
            width, height, depth
        ));
    }

    fn create_sampler(&self) -> u32 {
        let name = self.new_name("glCreateSamplers");
        self.record(format!("glCreateSamplers() -> {}", name));
        name
    }

    fn delete_sampler(&self, sampler: u32) {
        self.record(format!("glDeleteSamplers({})", sampler));
    }

    fn sampler_parameter_i(&self, sampler: u32, pname: u32, param: i32) {
        self.record(format!("glSamplerParameteri({}, {}, {})", sampler, pname, param));
    }

    fn sampler_parameter_f(&self, sampler: u32, pname: u32, param: f32) {
        self.record(format!("glSamplerParameterf({}, {}, {})", sampler, pname, param));
    }

    fn sampler_parameter_fv(&self, sampler: u32, pname: u32, params: &[f32]) {
        self.record(format!("glSamplerParameterfv({}, {}, {:?})", sampler, pname, params));
    }

    fn bind_sampler(&self, unit: u32, sampler: u32) {
        self.record(format!("glBindSampler({}, {})", unit, sampler));
    }

    fn create_shader(&self, kind: u32) -> u32 {
        let name = self.new_name("glCreateShader");
        self.record(format!("glCreateShader({}) -> {}", kind, name));
        name
    }

    fn delete_shader(&self, shader: u32) {
        self.record(format!("glDeleteShader({})", shader));
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(format!("glShaderSource({}, {} bytes)", shader, source.len()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(format!("glCompileShader({})", shader));
    }

    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32 {
        self.record(format!("glGetShaderiv({}, {})", shader, pname));
        match pname {
            glow::COMPILE_STATUS => i32::from(!self.compile_fails.get()),
            glow::INFO_LOG_LENGTH => self.info_log.borrow().len() as i32,
            _ => 0,
        }
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        self.record(format!("glGetShaderInfoLog({})", shader));
        self.info_log.borrow().clone()
    }

    fn create_program(&self) -> u32 {
        let name = self.new_name("glCreateProgram");
        self.record(format!("glCreateProgram() -> {}", name));
        name
    }

    fn delete_program(&self, program: u32) {
        self.record(format!("glDeleteProgram({})", program));
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(format!("glAttachShader({}, {})", program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(format!("glLinkProgram({})", program));
    }

    fn validate_program(&self, program: u32) {
        self.record(format!("glValidateProgram({})", program));
    }

    fn get_program_iv(&self, program: u32, pname: u32) -> i32 {
        self.record(format!("glGetProgramiv({}, {})", program, pname));
        match pname {
            glow::LINK_STATUS | glow::VALIDATE_STATUS => i32::from(!self.link_fails.get()),
            glow::INFO_LOG_LENGTH => self.info_log.borrow().len() as i32,
            _ => 0,
        }
    }

    fn get_program_info_log(&self, program: u32) -> String {
        self.record(format!("glGetProgramInfoLog({})", program));
        self.info_log.borrow().clone()
    }

    fn use_program(&self, program: u32) {
        self.record(format!("glUseProgram({})", program));
    }

    fn create_vertex_array(&self) -> u32 {
        let name = self.new_name("glCreateVertexArrays");
        self.record(format!("glCreateVertexArrays() -> {}", name));
        name
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(format!("glDeleteVertexArrays({})", vertex_array));
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        self.record(format!("glBindVertexArray({})", vertex_array));
    }

    fn enable_vertex_array_attrib(&self, vertex_array: u32, index: u32) {
        self.record(format!("glEnableVertexArrayAttrib({}, {})", vertex_array, index));
    }

    fn vertex_array_attrib_format(
        &self,
        vertex_array: u32,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        offset: u32,
    ) {
        self.record(format!(
            "glVertexArrayAttribFormat({}, {}, {}, {}, {}, {})",
            vertex_array, index, size, data_type, normalized, offset
        ));
    }

    fn vertex_array_attrib_i_format(&self, vertex_array: u32, index: u32, size: i32, data_type: u32, offset: u32) {
        self.record(format!(
            "glVertexArrayAttribIFormat({}, {}, {}, {}, {})",
            vertex_array, index, size, data_type, offset
        ));
    }

    fn vertex_array_attrib_binding(&self, vertex_array: u32, index: u32, binding: u32) {
        self.record(format!("glVertexArrayAttribBinding({}, {}, {})", vertex_array, index, binding));
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(format!("glBlendColor({}, {}, {}, {})", red, green, blue, alpha));
    }

    fn blend_equation_separate_i(&self, buffer: u32, mode_rgb: u32, mode_alpha: u32) {
        self.record(format!("glBlendEquationSeparatei({}, {}, {})", buffer, mode_rgb, mode_alpha));
    }

    fn blend_func_separate_i(&self, buffer: u32, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.record(format!(
            "glBlendFuncSeparatei({}, {}, {}, {}, {})",
            buffer, src_rgb, dst_rgb, src_alpha, dst_alpha
        ));
    }

    fn color_mask_i(&self, buffer: u32, red: bool, green: bool, blue: bool, alpha: bool) {
        self.record(format!("glColorMaski({}, {}, {}, {}, {})", buffer, red, green, blue, alpha));
    }

    fn depth_mask(&self, enabled: bool) {
        self.record(format!("glDepthMask({})", enabled));
    }

    fn depth_func(&self, func: u32) {
        self.record(format!("glDepthFunc({})", func));
    }

    fn polygon_offset_clamp(&self, factor: f32, units: f32, clamp: f32) {
        self.record(format!("glPolygonOffsetClamp({}, {}, {})", factor, units, clamp));
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        self.record(format!("glStencilFuncSeparate({}, {}, {}, {})", face, func, reference, mask));
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        self.record(format!("glStencilMaskSeparate({}, {})", face, mask));
    }

    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, depth_pass: u32) {
        self.record(format!(
            "glStencilOpSeparate({}, {}, {}, {})",
            face, stencil_fail, depth_fail, depth_pass
        ));
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        self.record(format!("glPolygonMode({}, {})", face, mode));
    }

    fn cull_face(&self, mode: u32) {
        self.record(format!("glCullFace({})", mode));
    }

    fn front_face(&self, mode: u32) {
        self.record(format!("glFrontFace({})", mode));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("glViewport({}, {}, {}, {})", x, y, width, height));
    }

    fn depth_range(&self, near: f64, far: f64) {
        self.record(format!("glDepthRange({}, {})", near, far));
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(format!("glScissor({}, {}, {}, {})", x, y, width, height));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(format!("glDrawArrays({}, {}, {})", mode, first, count));
    }

    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: usize) {
        self.record(format!("glDrawElements({}, {}, {}, {})", mode, count, index_type, offset));
    }

    fn object_label(&self, identifier: u32, name: u32, label: &str) {
        self.record(format!("glObjectLabel({}, {}, {:?})", identifier, name, label));
    }

    fn push_debug_group(&self, message: &str) {
        self.record(format!("glPushDebugGroup({:?})", message));
    }

    fn pop_debug_group(&self) {
        self.record("glPopDebugGroup()".to_string());
    }
}

// ===== TEST SURFACE =====

/// Window stand-in with a settable size and format
///
/// Counts swaps and resizes, records every swap interval request and can
/// be told to reject them.
pub(crate) struct TestSurface {
    size: Cell<(u32, u32)>,
    format: Cell<SurfacePixelFormat>,
    swaps: Cell<u32>,
    resizes: RefCell<Vec<(u32, u32)>>,
    intervals: RefCell<Vec<i32>>,
    interval_fails: Cell<bool>,
}

impl TestSurface {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: Cell::new((width, height)),
            format: Cell::new(SurfacePixelFormat::Rgba8),
            swaps: Cell::new(0),
            resizes: RefCell::new(Vec::new()),
            intervals: RefCell::new(Vec::new()),
            interval_fails: Cell::new(false),
        }
    }

    pub(crate) fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }

    pub(crate) fn set_format(&self, format: SurfacePixelFormat) {
        self.format.set(format);
    }

    pub(crate) fn set_interval_fails(&self, fails: bool) {
        self.interval_fails.set(fails);
    }

    pub(crate) fn swaps(&self) -> u32 {
        self.swaps.get()
    }

    pub(crate) fn resizes(&self) -> Vec<(u32, u32)> {
        self.resizes.borrow().clone()
    }

    pub(crate) fn intervals(&self) -> Vec<i32> {
        self.intervals.borrow().clone()
    }
}

impl Surface for TestSurface {
    fn drawable_size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn pixel_format(&self) -> SurfacePixelFormat {
        self.format.get()
    }

    fn resize(&self, width: u32, height: u32) {
        self.resizes.borrow_mut().push((width, height));
    }

    fn set_swap_interval(&self, interval: i32) -> Result<()> {
        self.intervals.borrow_mut().push(interval);
        if self.interval_fails.get() {
            return Err(Error::BackendError(format!("swap interval {} rejected", interval)));
        }
        Ok(())
    }

    fn swap_buffers(&self) -> Result<()> {
        self.swaps.set(self.swaps.get() + 1);
        Ok(())
    }

    fn proc_address(&self, _name: &str) -> *const c_void {
        std::ptr::null()
    }
}

/// GlApi - safe seam over the OpenGL entry points
///
/// Everything above this module talks to OpenGL through `GlApi`, with
/// object names as plain `u32` and slices instead of pointer/count pairs.
/// `GlFunctions` is the real implementation; tests use a recording one.

use crate::gl_functions::{DebugProc, GlFunctions};
use std::ffi::{c_char, c_void, CStr};

/// OpenGL calls used by the backend
///
/// All methods require the owning context to be current on the calling thread.
#[allow(clippy::too_many_arguments)]
pub trait GlApi {
    // ===== BOOTSTRAP / GLOBAL STATE =====

    fn get_error(&self) -> u32;
    fn get_integer(&self, pname: u32) -> i32;
    /// `None` if the driver returns a null string
    fn get_string(&self, name: u32) -> Option<String>;
    fn enable(&self, cap: u32);
    fn disable(&self, cap: u32);
    fn enable_i(&self, cap: u32, index: u32);
    fn disable_i(&self, cap: u32, index: u32);
    fn clip_control(&self, origin: u32, depth: u32);
    fn debug_message_callback(&self, callback: DebugProc);
    /// Enable or disable every debug message (any source, type and severity)
    fn debug_message_control_all(&self, enabled: bool);

    // ===== FRAMEBUFFERS =====

    /// Returns 0 on failure
    fn create_framebuffer(&self) -> u32;
    fn delete_framebuffer(&self, framebuffer: u32);
    fn bind_framebuffer(&self, target: u32, framebuffer: u32);
    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: u32, texture: u32, level: i32);
    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, buffers: &[u32]);
    fn named_framebuffer_read_buffer(&self, framebuffer: u32, source: u32);
    fn check_named_framebuffer_status(&self, framebuffer: u32, target: u32) -> u32;
    fn clear_named_framebuffer_fv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[f32]);
    fn clear_named_framebuffer_iv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[i32]);
    fn invalidate_named_framebuffer_data(&self, framebuffer: u32, attachments: &[u32]);
    fn blit_named_framebuffer(
        &self,
        read_framebuffer: u32,
        draw_framebuffer: u32,
        src: [i32; 4],
        dst: [i32; 4],
        mask: u32,
        filter: u32,
    );

    // ===== BUFFERS =====

    fn create_buffer(&self) -> u32;
    fn delete_buffer(&self, buffer: u32);
    fn named_buffer_storage(&self, buffer: u32, size: usize, data: Option<&[u8]>, flags: u32);
    /// Null on failure
    fn map_named_buffer(&self, buffer: u32, access: u32) -> *mut c_void;
    /// False if the contents were corrupted while mapped
    fn unmap_named_buffer(&self, buffer: u32) -> bool;
    fn bind_buffer(&self, target: u32, buffer: u32);
    fn bind_buffer_range(&self, target: u32, index: u32, buffer: u32, offset: usize, size: usize);
    fn bind_vertex_buffer(&self, binding: u32, buffer: u32, offset: usize, stride: i32);
    fn clear_named_buffer_sub_data(
        &self,
        buffer: u32,
        internal_format: u32,
        offset: usize,
        size: usize,
        format: u32,
        data_type: u32,
        value: &[u8],
    );
    fn copy_named_buffer_sub_data(&self, src: u32, dst: u32, src_offset: usize, dst_offset: usize, size: usize);

    // ===== TEXTURES =====

    fn create_texture(&self, target: u32) -> u32;
    fn delete_texture(&self, texture: u32);
    fn texture_parameter_i(&self, texture: u32, pname: u32, param: i32);
    fn texture_storage_1d(&self, texture: u32, levels: i32, internal_format: u32, width: i32);
    fn texture_storage_2d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32);
    fn texture_storage_3d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32, depth: i32);
    /// Upload from the bound pixel unpack buffer, `offset` bytes in
    fn texture_sub_image_1d(&self, texture: u32, level: i32, x: i32, width: i32, format: u32, data_type: u32, offset: usize);
    /// Upload from the bound pixel unpack buffer, `offset` bytes in
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
    );
    fn bind_texture_unit(&self, unit: u32, texture: u32);
    fn generate_texture_mipmap(&self, texture: u32);
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
    );

    // ===== SAMPLERS =====

    fn create_sampler(&self) -> u32;
    fn delete_sampler(&self, sampler: u32);
    fn sampler_parameter_i(&self, sampler: u32, pname: u32, param: i32);
    fn sampler_parameter_f(&self, sampler: u32, pname: u32, param: f32);
    fn sampler_parameter_fv(&self, sampler: u32, pname: u32, params: &[f32]);
    fn bind_sampler(&self, unit: u32, sampler: u32);

    // ===== SHADERS / PROGRAMS =====

    fn create_shader(&self, kind: u32) -> u32;
    fn delete_shader(&self, shader: u32);
    fn shader_source(&self, shader: u32, source: &str);
    fn compile_shader(&self, shader: u32);
    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32;
    fn get_shader_info_log(&self, shader: u32) -> String;
    fn create_program(&self) -> u32;
    fn delete_program(&self, program: u32);
    fn attach_shader(&self, program: u32, shader: u32);
    fn link_program(&self, program: u32);
    fn validate_program(&self, program: u32);
    fn get_program_iv(&self, program: u32, pname: u32) -> i32;
    fn get_program_info_log(&self, program: u32) -> String;
    fn use_program(&self, program: u32);

    // ===== VERTEX ARRAYS =====

    fn create_vertex_array(&self) -> u32;
    fn delete_vertex_array(&self, vertex_array: u32);
    fn bind_vertex_array(&self, vertex_array: u32);
    fn enable_vertex_array_attrib(&self, vertex_array: u32, index: u32);
    fn vertex_array_attrib_format(
        &self,
        vertex_array: u32,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        offset: u32,
    );
    fn vertex_array_attrib_i_format(&self, vertex_array: u32, index: u32, size: i32, data_type: u32, offset: u32);
    fn vertex_array_attrib_binding(&self, vertex_array: u32, index: u32, binding: u32);

    // ===== PIPELINE STATE =====

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn blend_equation_separate_i(&self, buffer: u32, mode_rgb: u32, mode_alpha: u32);
    fn blend_func_separate_i(&self, buffer: u32, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    fn color_mask_i(&self, buffer: u32, red: bool, green: bool, blue: bool, alpha: bool);
    fn depth_mask(&self, enabled: bool);
    fn depth_func(&self, func: u32);
    fn polygon_offset_clamp(&self, factor: f32, units: f32, clamp: f32);
    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32);
    fn stencil_mask_separate(&self, face: u32, mask: u32);
    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, depth_pass: u32);
    fn polygon_mode(&self, face: u32, mode: u32);
    fn cull_face(&self, mode: u32);
    fn front_face(&self, mode: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn depth_range(&self, near: f64, far: f64);
    fn scissor(&self, x: i32, y: i32, width: i32, height: i32);

    // ===== DRAWS / DEBUG =====

    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    /// `offset` is a byte offset into the bound element array buffer
    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: usize);
    fn object_label(&self, identifier: u32, name: u32, label: &str);
    fn push_debug_group(&self, message: &str);
    fn pop_debug_group(&self);
}

fn gl_bool(value: bool) -> u8 {
    if value { 1 } else { 0 }
}

fn create_one(create: unsafe extern "system" fn(i32, *mut u32)) -> u32 {
    let mut name = 0;
    unsafe { create(1, &mut name) };
    name
}

fn delete_one(delete: unsafe extern "system" fn(i32, *const u32), name: u32) {
    unsafe { delete(1, &name) };
}

fn read_info_log(
    object: u32,
    length: i32,
    get_log: unsafe extern "system" fn(u32, i32, *mut i32, *mut c_char),
) -> String {
    if length <= 0 {
        return String::new();
    }
    let mut bytes = vec![0u8; length as usize];
    let mut written = 0;
    unsafe { get_log(object, length, &mut written, bytes.as_mut_ptr() as *mut c_char) };
    bytes.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&bytes).into_owned()
}

// SAFETY (whole impl): `GlFunctions::load` guarantees every pointer matches
// its signature; slices passed with their own lengths stay alive for the call.
#[allow(clippy::too_many_arguments)]
impl GlApi for GlFunctions {
    fn get_error(&self) -> u32 {
        unsafe { (self.get_error)() }
    }

    fn get_integer(&self, pname: u32) -> i32 {
        let mut value = 0;
        unsafe { (self.get_integerv)(pname, &mut value) };
        value
    }

    fn get_string(&self, name: u32) -> Option<String> {
        let ptr = unsafe { (self.get_string)(name) };
        if ptr.is_null() {
            return None;
        }
        let text = unsafe { CStr::from_ptr(ptr as *const c_char) };
        Some(text.to_string_lossy().into_owned())
    }

    fn enable(&self, cap: u32) {
        unsafe { (self.enable)(cap) }
    }

    fn disable(&self, cap: u32) {
        unsafe { (self.disable)(cap) }
    }

    fn enable_i(&self, cap: u32, index: u32) {
        unsafe { (self.enablei)(cap, index) }
    }

    fn disable_i(&self, cap: u32, index: u32) {
        unsafe { (self.disablei)(cap, index) }
    }

    fn clip_control(&self, origin: u32, depth: u32) {
        unsafe { (self.clip_control)(origin, depth) }
    }

    fn debug_message_callback(&self, callback: DebugProc) {
        unsafe { (self.debug_message_callback)(Some(callback), std::ptr::null()) }
    }

    fn debug_message_control_all(&self, enabled: bool) {
        unsafe {
            (self.debug_message_control)(
                glow::DONT_CARE,
                glow::DONT_CARE,
                glow::DONT_CARE,
                0,
                std::ptr::null(),
                gl_bool(enabled),
            )
        }
    }

    fn create_framebuffer(&self) -> u32 {
        create_one(self.create_framebuffers)
    }

    fn delete_framebuffer(&self, framebuffer: u32) {
        delete_one(self.delete_framebuffers, framebuffer)
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: u32) {
        unsafe { (self.bind_framebuffer)(target, framebuffer) }
    }

    fn named_framebuffer_texture(&self, framebuffer: u32, attachment: u32, texture: u32, level: i32) {
        unsafe { (self.named_framebuffer_texture)(framebuffer, attachment, texture, level) }
    }

    fn named_framebuffer_draw_buffers(&self, framebuffer: u32, buffers: &[u32]) {
        unsafe { (self.named_framebuffer_draw_buffers)(framebuffer, buffers.len() as i32, buffers.as_ptr()) }
    }

    fn named_framebuffer_read_buffer(&self, framebuffer: u32, source: u32) {
        unsafe { (self.named_framebuffer_read_buffer)(framebuffer, source) }
    }

    fn check_named_framebuffer_status(&self, framebuffer: u32, target: u32) -> u32 {
        unsafe { (self.check_named_framebuffer_status)(framebuffer, target) }
    }

    fn clear_named_framebuffer_fv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[f32]) {
        unsafe { (self.clear_named_framebufferfv)(framebuffer, buffer, draw_buffer, value.as_ptr()) }
    }

    fn clear_named_framebuffer_iv(&self, framebuffer: u32, buffer: u32, draw_buffer: i32, value: &[i32]) {
        unsafe { (self.clear_named_framebufferiv)(framebuffer, buffer, draw_buffer, value.as_ptr()) }
    }

    fn invalidate_named_framebuffer_data(&self, framebuffer: u32, attachments: &[u32]) {
        unsafe {
            (self.invalidate_named_framebuffer_data)(framebuffer, attachments.len() as i32, attachments.as_ptr())
        }
    }

    fn blit_named_framebuffer(
        &self,
        read_framebuffer: u32,
        draw_framebuffer: u32,
        src: [i32; 4],
        dst: [i32; 4],
        mask: u32,
        filter: u32,
    ) {
        unsafe {
            (self.blit_named_framebuffer)(
                read_framebuffer, draw_framebuffer,
                src[0], src[1], src[2], src[3],
                dst[0], dst[1], dst[2], dst[3],
                mask, filter,
            )
        }
    }

    fn create_buffer(&self) -> u32 {
        create_one(self.create_buffers)
    }

    fn delete_buffer(&self, buffer: u32) {
        delete_one(self.delete_buffers, buffer)
    }

    fn named_buffer_storage(&self, buffer: u32, size: usize, data: Option<&[u8]>, flags: u32) {
        let ptr = data.map_or(std::ptr::null(), |bytes| bytes.as_ptr() as *const c_void);
        unsafe { (self.named_buffer_storage)(buffer, size as isize, ptr, flags) }
    }

    fn map_named_buffer(&self, buffer: u32, access: u32) -> *mut c_void {
        unsafe { (self.map_named_buffer)(buffer, access) }
    }

    fn unmap_named_buffer(&self, buffer: u32) -> bool {
        unsafe { (self.unmap_named_buffer)(buffer) != 0 }
    }

    fn bind_buffer(&self, target: u32, buffer: u32) {
        unsafe { (self.bind_buffer)(target, buffer) }
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: u32, offset: usize, size: usize) {
        unsafe { (self.bind_buffer_range)(target, index, buffer, offset as isize, size as isize) }
    }

    fn bind_vertex_buffer(&self, binding: u32, buffer: u32, offset: usize, stride: i32) {
        unsafe { (self.bind_vertex_buffer)(binding, buffer, offset as isize, stride) }
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
        unsafe {
            (self.clear_named_buffer_sub_data)(
                buffer,
                internal_format,
                offset as isize,
                size as isize,
                format,
                data_type,
                value.as_ptr() as *const c_void,
            )
        }
    }

    fn copy_named_buffer_sub_data(&self, src: u32, dst: u32, src_offset: usize, dst_offset: usize, size: usize) {
        unsafe {
            (self.copy_named_buffer_sub_data)(src, dst, src_offset as isize, dst_offset as isize, size as isize)
        }
    }

    fn create_texture(&self, target: u32) -> u32 {
        let mut name = 0;
        unsafe { (self.create_textures)(target, 1, &mut name) };
        name
    }

    fn delete_texture(&self, texture: u32) {
        delete_one(self.delete_textures, texture)
    }

    fn texture_parameter_i(&self, texture: u32, pname: u32, param: i32) {
        unsafe { (self.texture_parameteri)(texture, pname, param) }
    }

    fn texture_storage_1d(&self, texture: u32, levels: i32, internal_format: u32, width: i32) {
        unsafe { (self.texture_storage1d)(texture, levels, internal_format, width) }
    }

    fn texture_storage_2d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32) {
        unsafe { (self.texture_storage2d)(texture, levels, internal_format, width, height) }
    }

    fn texture_storage_3d(&self, texture: u32, levels: i32, internal_format: u32, width: i32, height: i32, depth: i32) {
        unsafe { (self.texture_storage3d)(texture, levels, internal_format, width, height, depth) }
    }

    fn texture_sub_image_1d(&self, texture: u32, level: i32, x: i32, width: i32, format: u32, data_type: u32, offset: usize) {
        unsafe { (self.texture_sub_image1d)(texture, level, x, width, format, data_type, offset as *const c_void) }
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
        unsafe {
            (self.texture_sub_image2d)(texture, level, x, y, width, height, format, data_type, offset as *const c_void)
        }
    }

    fn bind_texture_unit(&self, unit: u32, texture: u32) {
        unsafe { (self.bind_texture_unit)(unit, texture) }
    }

    fn generate_texture_mipmap(&self, texture: u32) {
        unsafe { (self.generate_texture_mipmap)(texture) }
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
        unsafe {
            (self.copy_image_sub_data)(
                src, src_target, src_level, src_x, src_y, src_z,
                dst, dst_target, dst_level, dst_x, dst_y, dst_z,
                width, height, depth,
            )
        }
    }

    fn create_sampler(&self) -> u32 {
        create_one(self.create_samplers)
    }

    fn delete_sampler(&self, sampler: u32) {
        delete_one(self.delete_samplers, sampler)
    }

    fn sampler_parameter_i(&self, sampler: u32, pname: u32, param: i32) {
        unsafe { (self.sampler_parameteri)(sampler, pname, param) }
    }

    fn sampler_parameter_f(&self, sampler: u32, pname: u32, param: f32) {
        unsafe { (self.sampler_parameterf)(sampler, pname, param) }
    }

    fn sampler_parameter_fv(&self, sampler: u32, pname: u32, params: &[f32]) {
        unsafe { (self.sampler_parameterfv)(sampler, pname, params.as_ptr()) }
    }

    fn bind_sampler(&self, unit: u32, sampler: u32) {
        unsafe { (self.bind_sampler)(unit, sampler) }
    }

    fn create_shader(&self, kind: u32) -> u32 {
        unsafe { (self.create_shader)(kind) }
    }

    fn delete_shader(&self, shader: u32) {
        unsafe { (self.delete_shader)(shader) }
    }

    fn shader_source(&self, shader: u32, source: &str) {
        let ptr = source.as_ptr() as *const c_char;
        let length = source.len() as i32;
        unsafe { (self.shader_source)(shader, 1, &ptr, &length) }
    }

    fn compile_shader(&self, shader: u32) {
        unsafe { (self.compile_shader)(shader) }
    }

    fn get_shader_iv(&self, shader: u32, pname: u32) -> i32 {
        let mut value = 0;
        unsafe { (self.get_shaderiv)(shader, pname, &mut value) };
        value
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        let length = self.get_shader_iv(shader, glow::INFO_LOG_LENGTH);
        read_info_log(shader, length, self.get_shader_info_log)
    }

    fn create_program(&self) -> u32 {
        unsafe { (self.create_program)() }
    }

    fn delete_program(&self, program: u32) {
        unsafe { (self.delete_program)(program) }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        unsafe { (self.attach_shader)(program, shader) }
    }

    fn link_program(&self, program: u32) {
        unsafe { (self.link_program)(program) }
    }

    fn validate_program(&self, program: u32) {
        unsafe { (self.validate_program)(program) }
    }

    fn get_program_iv(&self, program: u32, pname: u32) -> i32 {
        let mut value = 0;
        unsafe { (self.get_programiv)(program, pname, &mut value) };
        value
    }

    fn get_program_info_log(&self, program: u32) -> String {
        let length = self.get_program_iv(program, glow::INFO_LOG_LENGTH);
        read_info_log(program, length, self.get_program_info_log)
    }

    fn use_program(&self, program: u32) {
        unsafe { (self.use_program)(program) }
    }

    fn create_vertex_array(&self) -> u32 {
        create_one(self.create_vertex_arrays)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        delete_one(self.delete_vertex_arrays, vertex_array)
    }

    fn bind_vertex_array(&self, vertex_array: u32) {
        unsafe { (self.bind_vertex_array)(vertex_array) }
    }

    fn enable_vertex_array_attrib(&self, vertex_array: u32, index: u32) {
        unsafe { (self.enable_vertex_array_attrib)(vertex_array, index) }
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
        unsafe { (self.vertex_array_attrib_format)(vertex_array, index, size, data_type, gl_bool(normalized), offset) }
    }

    fn vertex_array_attrib_i_format(&self, vertex_array: u32, index: u32, size: i32, data_type: u32, offset: u32) {
        unsafe { (self.vertex_array_attrib_i_format)(vertex_array, index, size, data_type, offset) }
    }

    fn vertex_array_attrib_binding(&self, vertex_array: u32, index: u32, binding: u32) {
        unsafe { (self.vertex_array_attrib_binding)(vertex_array, index, binding) }
    }

    fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { (self.blend_color)(red, green, blue, alpha) }
    }

    fn blend_equation_separate_i(&self, buffer: u32, mode_rgb: u32, mode_alpha: u32) {
        unsafe { (self.blend_equation_separatei)(buffer, mode_rgb, mode_alpha) }
    }

    fn blend_func_separate_i(&self, buffer: u32, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe { (self.blend_func_separatei)(buffer, src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn color_mask_i(&self, buffer: u32, red: bool, green: bool, blue: bool, alpha: bool) {
        unsafe { (self.color_maski)(buffer, gl_bool(red), gl_bool(green), gl_bool(blue), gl_bool(alpha)) }
    }

    fn depth_mask(&self, enabled: bool) {
        unsafe { (self.depth_mask)(gl_bool(enabled)) }
    }

    fn depth_func(&self, func: u32) {
        unsafe { (self.depth_func)(func) }
    }

    fn polygon_offset_clamp(&self, factor: f32, units: f32, clamp: f32) {
        unsafe { (self.polygon_offset_clamp)(factor, units, clamp) }
    }

    fn stencil_func_separate(&self, face: u32, func: u32, reference: i32, mask: u32) {
        unsafe { (self.stencil_func_separate)(face, func, reference, mask) }
    }

    fn stencil_mask_separate(&self, face: u32, mask: u32) {
        unsafe { (self.stencil_mask_separate)(face, mask) }
    }

    fn stencil_op_separate(&self, face: u32, stencil_fail: u32, depth_fail: u32, depth_pass: u32) {
        unsafe { (self.stencil_op_separate)(face, stencil_fail, depth_fail, depth_pass) }
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        unsafe { (self.polygon_mode)(face, mode) }
    }

    fn cull_face(&self, mode: u32) {
        unsafe { (self.cull_face)(mode) }
    }

    fn front_face(&self, mode: u32) {
        unsafe { (self.front_face)(mode) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { (self.viewport)(x, y, width, height) }
    }

    fn depth_range(&self, near: f64, far: f64) {
        unsafe { (self.depth_range)(near, far) }
    }

    fn scissor(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { (self.scissor)(x, y, width, height) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        unsafe { (self.draw_arrays)(mode, first, count) }
    }

    fn draw_elements(&self, mode: u32, count: i32, index_type: u32, offset: usize) {
        unsafe { (self.draw_elements)(mode, count, index_type, offset as *const c_void) }
    }

    fn object_label(&self, identifier: u32, name: u32, label: &str) {
        unsafe { (self.object_label)(identifier, name, label.len() as i32, label.as_ptr() as *const c_char) }
    }

    fn push_debug_group(&self, message: &str) {
        unsafe {
            (self.push_debug_group)(
                glow::DEBUG_SOURCE_APPLICATION,
                0,
                message.len() as i32,
                message.as_ptr() as *const c_char,
            )
        }
    }

    fn pop_debug_group(&self) {
        unsafe { (self.pop_debug_group)() }
    }
}

/// Buffers - CPU-visible (mappable) and GPU-only OpenGL buffer objects
///
/// Both use immutable storage: the length is fixed at creation, contents
/// stay mutable through mapping or copy commands.

use crate::gl_api::GlApi;
use crate::gl_debug::{check_gl_error, label_object};
use galaxy_3d_gpu::engine_bail;
use galaxy_3d_gpu::galaxy3d::gpu::{BufferDesc, DeviceLimits};
use galaxy_3d_gpu::galaxy3d::{Error, Result};

const SOURCE: &str = "galaxy3d::opengl";

/// Buffer the CPU can map for reading and writing
#[derive(Debug)]
pub struct CpuBuffer {
    /// OpenGL buffer name (0 once destroyed)
    pub(crate) handle: u32,
    pub(crate) length: usize,
    pub(crate) mapped: bool,
}

/// Buffer only the GPU accesses
#[derive(Debug)]
pub struct Buffer {
    /// OpenGL buffer name (0 once destroyed)
    pub(crate) handle: u32,
    pub(crate) length: usize,
}

impl CpuBuffer {
    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_mapped(&self) -> bool {
        self.mapped
    }
}

impl Buffer {
    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Validate, create and allocate storage for a buffer, returning its name
fn create_storage<G: GlApi>(
    gl: &G,
    limits: &DeviceLimits,
    what: &str,
    desc: &BufferDesc,
    data: Option<&[u8]>,
    flags: u32,
) -> Result<u32> {
    limits.check_buffer_length(what, desc.length)?;
    if let Some(data) = data {
        if data.len() < desc.length {
            return Err(Error::InvalidResource(format!(
                "{} initial data too short: {} < {} bytes",
                what,
                data.len(),
                desc.length
            )));
        }
    }

    let handle = gl.create_buffer();
    if handle == 0 {
        engine_bail!(SOURCE, "could not create {}", what);
    }
    check_gl_error!(gl, "glCreateBuffers");

    gl.named_buffer_storage(handle, desc.length, data, flags);
    check_gl_error!(gl, "glNamedBufferStorage");
    label_object(gl, glow::BUFFER, handle, desc.label.as_deref());
    Ok(handle)
}

pub(crate) fn create_cpu_buffer<G: GlApi>(
    gl: &G,
    limits: &DeviceLimits,
    desc: &BufferDesc,
    data: Option<&[u8]>,
) -> Result<CpuBuffer> {
    let handle = create_storage(
        gl,
        limits,
        "cpu buffer",
        desc,
        data,
        glow::MAP_READ_BIT | glow::MAP_WRITE_BIT,
    )?;
    Ok(CpuBuffer { handle, length: desc.length, mapped: false })
}

pub(crate) fn create_buffer<G: GlApi>(gl: &G, limits: &DeviceLimits, desc: &BufferDesc) -> Result<Buffer> {
    let handle = create_storage(gl, limits, "buffer", desc, None, 0)?;
    Ok(Buffer { handle, length: desc.length })
}

pub(crate) fn lock_cpu_buffer<'b, G: GlApi>(gl: &G, buffer: &'b mut CpuBuffer) -> Result<&'b mut [u8]> {
    if buffer.handle == 0 {
        return Err(Error::InvalidResource("cpu buffer was destroyed".to_string()));
    }
    if buffer.mapped {
        return Err(Error::InvalidOperation("cpu buffer is already locked".to_string()));
    }

    let ptr = gl.map_named_buffer(buffer.handle, glow::READ_WRITE);
    if ptr.is_null() {
        engine_bail!(SOURCE, "could not map cpu buffer {}", buffer.handle);
    }
    buffer.mapped = true;

    // SAFETY: the driver maps the whole buffer, `length` bytes, and keeps
    // the mapping valid until unmap. The slice borrows `buffer` mutably,
    // so unlock cannot run while it is alive.
    Ok(unsafe { std::slice::from_raw_parts_mut(ptr as *mut u8, buffer.length) })
}

pub(crate) fn unlock_cpu_buffer<G: GlApi>(gl: &G, buffer: &mut CpuBuffer) -> Result<()> {
    if !buffer.mapped {
        return Err(Error::InvalidOperation("cpu buffer is not locked".to_string()));
    }
    buffer.mapped = false;
    if !gl.unmap_named_buffer(buffer.handle) {
        engine_bail!(SOURCE, "cpu buffer {} contents were lost while mapped", buffer.handle);
    }
    Ok(())
}

pub(crate) fn destroy_cpu_buffer<G: GlApi>(gl: &G, buffer: &mut CpuBuffer) {
    if buffer.handle != 0 {
        gl.delete_buffer(buffer.handle);
        buffer.handle = 0;
        buffer.mapped = false;
    }
}

pub(crate) fn destroy_buffer<G: GlApi>(gl: &G, buffer: &mut Buffer) {
    if buffer.handle != 0 {
        gl.delete_buffer(buffer.handle);
        buffer.handle = 0;
    }
}

#[cfg(test)]
#[path = "gl_buffer_tests.rs"]
mod tests;

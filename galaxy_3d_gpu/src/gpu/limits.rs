/// Device capability limits
///
/// Resource creation is validated against these values before any native
/// object is created, so a rejected request never leaks native state.

use crate::error::{Error, Result};
use crate::gpu::TextureDesc;

/// Capability limits queried at device creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLimits {
    /// Maximum width/height of a texture
    pub max_texture_size: u32,
    /// Maximum depth (or slice count) of a texture
    pub max_texture_depth: u32,
    /// Maximum buffer length in bytes
    pub max_buffer_size: usize,
    /// Maximum number of vertex attributes per pipeline
    pub max_vertex_attributes: u32,
    /// Maximum sampler anisotropy
    pub max_anisotropy: u32,
}

impl DeviceLimits {
    /// Fails with `CapabilityExceeded` if `length` exceeds the buffer limit
    ///
    /// `what` names the buffer kind in the error ("Cpu buffer", "Gpu buffer").
    pub fn check_buffer_length(&self, what: &str, length: usize) -> Result<()> {
        if length > self.max_buffer_size {
            return Err(Error::CapabilityExceeded(format!(
                "{} too large: {} > {} bytes",
                what, length, self.max_buffer_size
            )));
        }
        Ok(())
    }

    /// Fails with `CapabilityExceeded` if any texture extent exceeds the limits
    pub fn check_texture_extent(&self, desc: &TextureDesc) -> Result<()> {
        if desc.width > self.max_texture_size
            || desc.height > self.max_texture_size
            || desc.depth_or_slices > self.max_texture_depth
        {
            return Err(Error::CapabilityExceeded(format!(
                "texture too big: {}x{}x{} (max {}x{}x{})",
                desc.width, desc.height, desc.depth_or_slices,
                self.max_texture_size, self.max_texture_size, self.max_texture_depth
            )));
        }
        Ok(())
    }

    /// Fails with `CapabilityExceeded` if `count` exceeds the vertex attribute limit
    pub fn check_vertex_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_vertex_attributes as usize {
            return Err(Error::CapabilityExceeded(format!(
                "too many vertex attributes: {} > {}",
                count, self.max_vertex_attributes
            )));
        }
        Ok(())
    }

    /// Clamp a requested anisotropy to [1, max_anisotropy]
    pub fn clamp_anisotropy(&self, requested: u32) -> u32 {
        requested.max(1).min(self.max_anisotropy.max(1))
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod tests;

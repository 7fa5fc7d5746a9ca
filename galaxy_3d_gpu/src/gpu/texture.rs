/// Texture descriptor

use crate::gpu::{PixelFormat, TextureType, TextureUsage};

/// Descriptor for creating a texture
///
/// Texture storage is immutable: size, format and mip count are fixed at creation.
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug label attached to the native object
    pub label: Option<String>,
    /// Texture type
    pub texture_type: TextureType,
    /// Pixel format
    pub pixel_format: PixelFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels (1 for 1D textures)
    pub height: u32,
    /// Depth for 3D textures, slice count for arrays
    pub depth_or_slices: u32,
    /// Number of mip levels (at least 1)
    pub mipmap_levels: u32,
}

impl TextureDesc {
    /// Single-level 2D texture
    pub fn new_2d(width: u32, height: u32, pixel_format: PixelFormat, usage: TextureUsage) -> Self {
        Self {
            label: None,
            texture_type: TextureType::Tex2D,
            pixel_format,
            usage,
            width,
            height,
            depth_or_slices: 1,
            mipmap_levels: 1,
        }
    }
}

//! Unit tests for texture creation and destruction

use crate::gl_texture::*;
use crate::mock_gl::RecordingGl;
use galaxy_3d_gpu::galaxy3d::gpu::{DeviceLimits, PixelFormat, TextureDesc, TextureType, TextureUsage};
use galaxy_3d_gpu::galaxy3d::Error;

fn limits() -> DeviceLimits {
    DeviceLimits {
        max_texture_size: 4096,
        max_texture_depth: 256,
        max_buffer_size: 1 << 20,
        max_vertex_attributes: 16,
        max_anisotropy: 16,
    }
}

fn desc(texture_type: TextureType, width: u32, height: u32, depth: u32) -> TextureDesc {
    TextureDesc {
        texture_type,
        depth_or_slices: depth,
        ..TextureDesc::new_2d(width, height, PixelFormat::RGBA8, TextureUsage::SHADER_READ)
    }
}

// ============================================================================
// STORAGE BY TYPE
// ============================================================================

#[test]
fn test_create_2d_texture_with_mips() {
    let gl = RecordingGl::new();
    let mut desc = desc(TextureType::Tex2D, 256, 128, 1);
    desc.mipmap_levels = 4;
    desc.label = Some("albedo".to_string());

    let texture = create_texture(&gl, &limits(), &desc).unwrap();

    assert_eq!(texture.handle(), 1);
    assert!(!texture.is_backbuffer());
    let calls = gl.calls();
    assert_eq!(calls[0], format!("glCreateTextures({}) -> 1", glow::TEXTURE_2D));
    assert!(calls.contains(&format!("glObjectLabel({}, 1, \"albedo\")", glow::TEXTURE)));
    assert!(calls.contains(&format!("glTextureParameteri(1, {}, 3)", glow::TEXTURE_MAX_LEVEL)));
    assert_eq!(calls.last().unwrap(), &format!("glTextureStorage2D(1, 4, {}, 256, 128)", glow::RGBA8));
}

#[test]
fn test_storage_call_follows_dimension() {
    let gl = RecordingGl::new();

    create_texture(&gl, &limits(), &desc(TextureType::Tex1D, 64, 1, 1)).unwrap();
    create_texture(&gl, &limits(), &desc(TextureType::Tex1DArray, 64, 8, 1)).unwrap();
    create_texture(&gl, &limits(), &desc(TextureType::Tex3D, 32, 32, 16)).unwrap();
    create_texture(&gl, &limits(), &desc(TextureType::Tex2DArray, 32, 32, 6)).unwrap();

    let calls = gl.calls();
    assert!(calls.contains(&format!("glTextureStorage1D(1, 1, {}, 64)", glow::RGBA8)));
    // 1D array layers live in the height
    assert!(calls.contains(&format!("glTextureStorage2D(2, 1, {}, 64, 8)", glow::RGBA8)));
    assert!(calls.contains(&format!("glTextureStorage3D(3, 1, {}, 32, 32, 16)", glow::RGBA8)));
    assert!(calls.contains(&format!("glTextureStorage3D(4, 1, {}, 32, 32, 6)", glow::RGBA8)));
}

// ============================================================================
// REJECTIONS
// ============================================================================

#[test]
fn test_oversized_texture_makes_no_native_call() {
    let gl = RecordingGl::new();

    let wide = create_texture(&gl, &limits(), &desc(TextureType::Tex2D, 8192, 16, 1));
    let deep = create_texture(&gl, &limits(), &desc(TextureType::Tex3D, 16, 16, 512));

    assert!(matches!(wide, Err(Error::CapabilityExceeded(_))));
    assert!(matches!(deep, Err(Error::CapabilityExceeded(_))));
    assert!(gl.calls().is_empty());
}

#[test]
fn test_format_without_storage_is_unsupported() {
    let gl = RecordingGl::new();
    let mut desc = desc(TextureType::Tex2D, 16, 16, 1);
    desc.pixel_format = PixelFormat::BGRA8;

    assert!(matches!(create_texture(&gl, &limits(), &desc), Err(Error::Unsupported(_))));
    assert!(gl.calls().is_empty());
}

#[test]
fn test_shader_write_usage_is_unsupported() {
    let gl = RecordingGl::new();
    let mut desc = desc(TextureType::Tex2D, 16, 16, 1);
    desc.usage = TextureUsage::SHADER_READ | TextureUsage::SHADER_WRITE;

    assert!(matches!(create_texture(&gl, &limits(), &desc), Err(Error::Unsupported(_))));

    desc.usage = TextureUsage::SHADER_READ | TextureUsage::RENDER_TARGET;
    assert!(create_texture(&gl, &limits(), &desc).is_ok());
}

#[test]
fn test_zero_handle_is_a_backend_error() {
    let gl = RecordingGl::new();
    gl.fail_create("glCreateTextures");

    let result = create_texture(&gl, &limits(), &desc(TextureType::Tex2D, 16, 16, 1));
    assert!(matches!(result, Err(Error::BackendError(_))));
}

// ============================================================================
// DESTRUCTION
// ============================================================================

#[test]
fn test_destroy_is_idempotent() {
    let gl = RecordingGl::new();
    let mut texture = create_texture(&gl, &limits(), &desc(TextureType::Tex2D, 16, 16, 1)).unwrap();
    gl.clear();

    destroy_texture(&gl, &mut texture);
    destroy_texture(&gl, &mut texture);

    assert_eq!(gl.calls(), vec!["glDeleteTextures(1)".to_string()]);
    assert_eq!(texture.handle(), 0);
}

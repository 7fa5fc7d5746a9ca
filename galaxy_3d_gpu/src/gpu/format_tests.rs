//! Unit tests for format.rs

use crate::gpu::{PixelFormat, VertexFormat, TextureType, TextureUsage, IndexType};

// ============================================================================
// VERTEX FORMAT TESTS
// ============================================================================

#[test]
fn test_vertex_format_component_count() {
    assert_eq!(VertexFormat::Float.component_count(), 1);
    assert_eq!(VertexFormat::UShort_Normalized.component_count(), 1);
    assert_eq!(VertexFormat::Char2.component_count(), 2);
    assert_eq!(VertexFormat::Half2.component_count(), 2);
    assert_eq!(VertexFormat::Int3.component_count(), 3);
    assert_eq!(VertexFormat::UChar4_Normalized.component_count(), 4);
    assert_eq!(VertexFormat::Float4.component_count(), 4);
}

#[test]
fn test_vertex_format_classification() {
    assert!(VertexFormat::Half4.is_float());
    assert!(!VertexFormat::Half4.is_normalized());
    assert!(!VertexFormat::Half4.is_integer());

    assert!(VertexFormat::Short2_Normalized.is_normalized());
    assert!(!VertexFormat::Short2_Normalized.is_integer());

    assert!(VertexFormat::UInt.is_integer());
    assert!(VertexFormat::Char4.is_integer());
}

// ============================================================================
// TEXTURE TYPE TESTS
// ============================================================================

#[test]
fn test_texture_type_dimension() {
    assert_eq!(TextureType::Tex1D.dimension(), 1);
    assert_eq!(TextureType::Tex1DArray.dimension(), 2);
    assert_eq!(TextureType::Tex2D.dimension(), 2);
    assert_eq!(TextureType::Cube.dimension(), 2);
    assert_eq!(TextureType::Tex2DArray.dimension(), 3);
    assert_eq!(TextureType::Tex3D.dimension(), 3);
    assert_eq!(TextureType::CubeArray.dimension(), 3);
}

#[test]
fn test_texture_type_is_array() {
    assert!(TextureType::Tex1DArray.is_array());
    assert!(TextureType::CubeArray.is_array());
    assert!(!TextureType::Tex3D.is_array());
    assert!(!TextureType::Cube.is_array());
}

// ============================================================================
// MISC
// ============================================================================

#[test]
fn test_texture_usage_flags_combine() {
    let usage = TextureUsage::SHADER_READ | TextureUsage::RENDER_TARGET;
    assert!(usage.contains(TextureUsage::SHADER_READ));
    assert!(!usage.contains(TextureUsage::SHADER_WRITE));
}

#[test]
fn test_pixel_format_properties() {
    assert!(PixelFormat::Depth24_Stencil8.is_depth_stencil());
    assert!(!PixelFormat::RGBA8.is_depth_stencil());
    assert_eq!(PixelFormat::B5G6R5.bytes_per_pixel(), 2);
    assert_eq!(PixelFormat::BGRA8_sRGB.bytes_per_pixel(), 4);
}

#[test]
fn test_index_type_size() {
    assert_eq!(IndexType::U16.size_bytes(), 2);
    assert_eq!(IndexType::U32.size_bytes(), 4);
}

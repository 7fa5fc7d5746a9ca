/// Translation tables from galaxy3d enums to OpenGL tokens
///
/// Pure lookups. The only fallible ones are pixel formats (no native
/// equivalent for BGRA storage) and window surface formats.

use galaxy_3d_gpu::galaxy3d::gpu::{
    AddressMode, BlendFactor, BlendOperation, CompareFunction, CullFace, FillMode, FrontFace,
    IndexType, MinMagFilter, MipFilter, PixelFormat, PrimitiveType, StencilOperation,
    SurfacePixelFormat, TextureType, VertexFormat,
};

// ===== TEXTURES =====

pub fn texture_target(texture_type: TextureType) -> u32 {
    match texture_type {
        TextureType::Tex1D => glow::TEXTURE_1D,
        TextureType::Tex1DArray => glow::TEXTURE_1D_ARRAY,
        TextureType::Tex2D => glow::TEXTURE_2D,
        TextureType::Tex2DArray => glow::TEXTURE_2D_ARRAY,
        TextureType::Tex3D => glow::TEXTURE_3D,
        TextureType::Cube => glow::TEXTURE_CUBE_MAP,
        TextureType::CubeArray => glow::TEXTURE_CUBE_MAP_ARRAY,
    }
}

/// Sized internal format, or `None` when GL cannot store the format natively
pub fn internal_format(format: PixelFormat) -> Option<u32> {
    match format {
        PixelFormat::B5G6R5 => Some(glow::RGB565),
        PixelFormat::BGR5A1 => Some(glow::RGB5_A1),
        PixelFormat::RGBA8 => Some(glow::RGBA8),
        PixelFormat::RGBA8_sRGB => Some(glow::SRGB8_ALPHA8),
        PixelFormat::BGRA8 | PixelFormat::BGRA8_sRGB => None,
        PixelFormat::Depth24_Stencil8 => Some(glow::DEPTH24_STENCIL8),
    }
}

/// Client data format used for uploads
pub fn data_format(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::B5G6R5 => glow::RGB,
        PixelFormat::BGR5A1 | PixelFormat::RGBA8 | PixelFormat::RGBA8_sRGB => glow::RGBA,
        PixelFormat::BGRA8 | PixelFormat::BGRA8_sRGB => glow::BGRA,
        PixelFormat::Depth24_Stencil8 => glow::DEPTH_STENCIL,
    }
}

/// Client data type used for uploads
pub fn data_type(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::B5G6R5 => glow::UNSIGNED_SHORT_5_6_5,
        PixelFormat::BGR5A1 => glow::UNSIGNED_SHORT_5_5_5_1,
        PixelFormat::RGBA8
        | PixelFormat::RGBA8_sRGB
        | PixelFormat::BGRA8
        | PixelFormat::BGRA8_sRGB => glow::UNSIGNED_INT_8_8_8_8,
        PixelFormat::Depth24_Stencil8 => glow::UNSIGNED_INT_24_8,
    }
}

/// Backbuffer storage for a window surface format
///
/// The backbuffer texture is always RGBA8; BGRA windows are swizzled by
/// the final blit.
pub fn backbuffer_format(format: SurfacePixelFormat) -> Option<(u32, PixelFormat)> {
    match format {
        SurfacePixelFormat::Rgba8 | SurfacePixelFormat::Bgra8 => Some((glow::RGBA8, PixelFormat::RGBA8)),
        SurfacePixelFormat::Unknown | SurfacePixelFormat::Rgb565 | SurfacePixelFormat::Rgb10A2 => None,
    }
}

// ===== VERTEX INPUT =====

/// Component type of a vertex attribute
pub fn vertex_type(format: VertexFormat) -> u32 {
    use VertexFormat::*;
    match format {
        UChar2 | UChar4 | UChar2_Normalized | UChar4_Normalized => glow::UNSIGNED_BYTE,
        Char2 | Char4 | Char2_Normalized | Char4_Normalized => glow::BYTE,
        UShort | UShort2 | UShort4 | UShort_Normalized | UShort2_Normalized | UShort4_Normalized => {
            glow::UNSIGNED_SHORT
        }
        Short | Short2 | Short4 | Short_Normalized | Short2_Normalized | Short4_Normalized => glow::SHORT,
        Half | Half2 | Half4 => glow::HALF_FLOAT,
        Float | Float2 | Float3 | Float4 => glow::FLOAT,
        UInt | UInt2 | UInt3 | UInt4 => glow::UNSIGNED_INT,
        Int | Int2 | Int3 | Int4 => glow::INT,
    }
}

pub fn primitive(primitive: PrimitiveType) -> u32 {
    match primitive {
        PrimitiveType::Point => glow::POINTS,
        PrimitiveType::Line => glow::LINES,
        PrimitiveType::LineStrip => glow::LINE_STRIP,
        PrimitiveType::Triangle => glow::TRIANGLES,
        PrimitiveType::TriangleStrip => glow::TRIANGLE_STRIP,
    }
}

pub fn index_type(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::U16 => glow::UNSIGNED_SHORT,
        IndexType::U32 => glow::UNSIGNED_INT,
    }
}

// ===== SAMPLERS =====

pub fn mag_filter(filter: MinMagFilter) -> u32 {
    match filter {
        MinMagFilter::Nearest => glow::NEAREST,
        MinMagFilter::Linear => glow::LINEAR,
    }
}

/// Minification filter combined with the mip filter
pub fn min_filter(filter: MinMagFilter, mip: MipFilter) -> u32 {
    match (filter, mip) {
        (MinMagFilter::Nearest, MipFilter::NotMipmapped) => glow::NEAREST,
        (MinMagFilter::Nearest, MipFilter::Nearest) => glow::NEAREST_MIPMAP_NEAREST,
        (MinMagFilter::Nearest, MipFilter::Linear) => glow::NEAREST_MIPMAP_LINEAR,
        (MinMagFilter::Linear, MipFilter::NotMipmapped) => glow::LINEAR,
        (MinMagFilter::Linear, MipFilter::Nearest) => glow::LINEAR_MIPMAP_NEAREST,
        (MinMagFilter::Linear, MipFilter::Linear) => glow::LINEAR_MIPMAP_LINEAR,
    }
}

pub fn wrap_mode(mode: AddressMode) -> u32 {
    match mode {
        AddressMode::ClampToEdge => glow::CLAMP_TO_EDGE,
        AddressMode::MirrorClampToEdge => glow::MIRROR_CLAMP_TO_EDGE,
        AddressMode::Repeat => glow::REPEAT,
        AddressMode::MirrorRepeat => glow::MIRRORED_REPEAT,
        // Zero is a transparent black border
        AddressMode::ClampToZero | AddressMode::ClampToBorderColor => glow::CLAMP_TO_BORDER,
    }
}

// ===== PIPELINE STATE =====

pub fn compare_function(function: CompareFunction) -> u32 {
    match function {
        CompareFunction::Never => glow::NEVER,
        CompareFunction::Less => glow::LESS,
        CompareFunction::Equal => glow::EQUAL,
        CompareFunction::LessEqual => glow::LEQUAL,
        CompareFunction::Greater => glow::GREATER,
        CompareFunction::NotEqual => glow::NOTEQUAL,
        CompareFunction::GreaterEqual => glow::GEQUAL,
        CompareFunction::Always => glow::ALWAYS,
    }
}

pub fn stencil_operation(operation: StencilOperation) -> u32 {
    match operation {
        StencilOperation::Keep => glow::KEEP,
        StencilOperation::Zero => glow::ZERO,
        StencilOperation::Replace => glow::REPLACE,
        StencilOperation::IncrementClamp => glow::INCR,
        StencilOperation::DecrementClamp => glow::DECR,
        StencilOperation::Invert => glow::INVERT,
        StencilOperation::IncrementWrap => glow::INCR_WRAP,
        StencilOperation::DecrementWrap => glow::DECR_WRAP,
    }
}

pub fn blend_operation(operation: BlendOperation) -> u32 {
    match operation {
        BlendOperation::Add => glow::FUNC_ADD,
        BlendOperation::Subtract => glow::FUNC_SUBTRACT,
        BlendOperation::ReverseSubtract => glow::FUNC_REVERSE_SUBTRACT,
        BlendOperation::Min => glow::MIN,
        BlendOperation::Max => glow::MAX,
    }
}

pub fn blend_factor(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => glow::ZERO,
        BlendFactor::One => glow::ONE,
        BlendFactor::SourceColor => glow::SRC_COLOR,
        BlendFactor::OneMinusSourceColor => glow::ONE_MINUS_SRC_COLOR,
        BlendFactor::SourceAlpha => glow::SRC_ALPHA,
        BlendFactor::OneMinusSourceAlpha => glow::ONE_MINUS_SRC_ALPHA,
        BlendFactor::DestinationColor => glow::DST_COLOR,
        BlendFactor::OneMinusDestinationColor => glow::ONE_MINUS_DST_COLOR,
        BlendFactor::DestinationAlpha => glow::DST_ALPHA,
        BlendFactor::OneMinusDestinationAlpha => glow::ONE_MINUS_DST_ALPHA,
        BlendFactor::SourceAlphaSaturated => glow::SRC_ALPHA_SATURATE,
        BlendFactor::BlendColor => glow::CONSTANT_COLOR,
        BlendFactor::OneMinusBlendColor => glow::ONE_MINUS_CONSTANT_COLOR,
        BlendFactor::BlendAlpha => glow::CONSTANT_ALPHA,
        BlendFactor::OneMinusBlendAlpha => glow::ONE_MINUS_CONSTANT_ALPHA,
        BlendFactor::Source1Color => glow::SRC1_COLOR,
        BlendFactor::OneMinusSource1Color => glow::ONE_MINUS_SRC1_COLOR,
        BlendFactor::Source1Alpha => glow::SRC1_ALPHA,
        BlendFactor::OneMinusSource1Alpha => glow::ONE_MINUS_SRC1_ALPHA,
    }
}

pub fn polygon_mode(mode: FillMode) -> u32 {
    match mode {
        FillMode::Fill => glow::FILL,
        FillMode::Line => glow::LINE,
    }
}

/// Face to cull, `None` when culling is disabled
pub fn cull_face(face: CullFace) -> Option<u32> {
    match face {
        CullFace::None => None,
        CullFace::Front => Some(glow::FRONT),
        CullFace::Back => Some(glow::BACK),
    }
}

pub fn front_face(face: FrontFace) -> u32 {
    match face {
        FrontFace::Clockwise => glow::CW,
        FrontFace::CounterClockwise => glow::CCW,
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;

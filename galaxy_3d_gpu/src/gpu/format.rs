/// Pixel, vertex, index and primitive formats

use bitflags::bitflags;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum PixelFormat {
    B5G6R5,
    BGR5A1,
    RGBA8,
    RGBA8_sRGB,
    BGRA8,
    BGRA8_sRGB,
    Depth24_Stencil8,
}

impl PixelFormat {
    /// Returns true for depth/stencil formats
    pub fn is_depth_stencil(&self) -> bool {
        matches!(self, PixelFormat::Depth24_Stencil8)
    }

    /// Size in bytes of one texel
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::B5G6R5 | PixelFormat::BGR5A1 => 2,
            _ => 4,
        }
    }
}

/// Vertex attribute format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum VertexFormat {
    UChar2,
    UChar4,
    Char2,
    Char4,
    UChar2_Normalized,
    UChar4_Normalized,
    Char2_Normalized,
    Char4_Normalized,
    UShort,
    UShort2,
    UShort4,
    Short,
    Short2,
    Short4,
    UShort_Normalized,
    UShort2_Normalized,
    UShort4_Normalized,
    Short_Normalized,
    Short2_Normalized,
    Short4_Normalized,
    Half,
    Half2,
    Half4,
    Float,
    Float2,
    Float3,
    Float4,
    UInt,
    UInt2,
    UInt3,
    UInt4,
    Int,
    Int2,
    Int3,
    Int4,
}

impl VertexFormat {
    /// Number of components (1 to 4)
    pub fn component_count(&self) -> u32 {
        use VertexFormat::*;
        match self {
            UShort | Short | UShort_Normalized | Short_Normalized | Half | Float | UInt | Int => 1,
            UChar2 | Char2 | UChar2_Normalized | Char2_Normalized | UShort2 | Short2
            | UShort2_Normalized | Short2_Normalized | Half2 | Float2 | UInt2 | Int2 => 2,
            Float3 | UInt3 | Int3 => 3,
            UChar4 | Char4 | UChar4_Normalized | Char4_Normalized | UShort4 | Short4
            | UShort4_Normalized | Short4_Normalized | Half4 | Float4 | UInt4 | Int4 => 4,
        }
    }

    /// Integer data converted to [0, 1] or [-1, 1] when read by the shader
    pub fn is_normalized(&self) -> bool {
        use VertexFormat::*;
        matches!(
            self,
            UChar2_Normalized | UChar4_Normalized | Char2_Normalized | Char4_Normalized
                | UShort_Normalized | UShort2_Normalized | UShort4_Normalized
                | Short_Normalized | Short2_Normalized | Short4_Normalized
        )
    }

    /// Half or single precision float data
    pub fn is_float(&self) -> bool {
        use VertexFormat::*;
        matches!(self, Half | Half2 | Half4 | Float | Float2 | Float3 | Float4)
    }

    /// Integer data read as integers by the shader (neither float nor normalized)
    pub fn is_integer(&self) -> bool {
        !self.is_float() && !self.is_normalized()
    }
}

/// Texture type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    Tex1D,
    Tex1DArray,
    Tex2D,
    Tex2DArray,
    Tex3D,
    Cube,
    CubeArray,
}

impl TextureType {
    /// Dimension of the storage: arrays add one to their base dimension
    pub fn dimension(&self) -> u32 {
        match self {
            TextureType::Tex1D => 1,
            TextureType::Tex1DArray | TextureType::Tex2D | TextureType::Cube => 2,
            TextureType::Tex2DArray | TextureType::Tex3D | TextureType::CubeArray => 3,
        }
    }

    /// Returns true for array textures (slices live in the last dimension)
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            TextureType::Tex1DArray | TextureType::Tex2DArray | TextureType::CubeArray
        )
    }
}

bitflags! {
    /// Texture usage flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u32 {
        /// Sampled in shaders
        const SHADER_READ = 1 << 0;
        /// Written by shaders (image load/store)
        const SHADER_WRITE = 1 << 1;
        /// Used as a render pass attachment
        const RENDER_TARGET = 1 << 2;
    }
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    /// 16-bit indices
    U16,
    /// 32-bit indices
    U32,
}

impl IndexType {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Point,
    Line,
    LineStrip,
    Triangle,
    TriangleStrip,
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

/// Sampler descriptor and sampling enums

/// Minification / magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinMagFilter {
    Nearest,
    Linear,
}

/// Filter between mip levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipFilter {
    /// Sample the base level only
    NotMipmapped,
    Nearest,
    Linear,
}

/// Behaviour of texture coordinates outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressMode {
    ClampToEdge,
    MirrorClampToEdge,
    Repeat,
    MirrorRepeat,
    /// Out of range reads return zero
    ClampToZero,
    ClampToBorderColor,
}

/// Border color used by `AddressMode::ClampToBorderColor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderColor {
    TransparentBlack,
    OpaqueBlack,
    OpaqueWhite,
}

impl BorderColor {
    /// RGBA value of the border
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            BorderColor::TransparentBlack => [0.0, 0.0, 0.0, 0.0],
            BorderColor::OpaqueBlack => [0.0, 0.0, 0.0, 1.0],
            BorderColor::OpaqueWhite => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Descriptor for creating a sampler
#[derive(Debug, Clone)]
pub struct SamplerDesc {
    pub label: Option<String>,
    pub min_filter: MinMagFilter,
    pub mag_filter: MinMagFilter,
    pub mip_filter: MipFilter,
    pub address_mode_u: AddressMode,
    pub address_mode_v: AddressMode,
    pub address_mode_r: AddressMode,
    pub border_color: BorderColor,
    /// Requested anisotropy, clamped to [1, device max]
    pub max_anisotropy: u32,
}

impl Default for SamplerDesc {
    fn default() -> Self {
        Self {
            label: None,
            min_filter: MinMagFilter::Linear,
            mag_filter: MinMagFilter::Linear,
            mip_filter: MipFilter::NotMipmapped,
            address_mode_u: AddressMode::ClampToEdge,
            address_mode_v: AddressMode::ClampToEdge,
            address_mode_r: AddressMode::ClampToEdge,
            border_color: BorderColor::TransparentBlack,
            max_anisotropy: 1,
        }
    }
}

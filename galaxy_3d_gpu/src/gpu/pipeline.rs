/// Pipeline descriptor and pipeline state enums

use crate::gpu::{PrimitiveType, VertexFormat, MAX_COLOR_ATTACHMENTS};

// ===== DEPTH/STENCIL ENUMS =====

/// Comparison function for depth and stencil tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunction {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

/// Stencil operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOperation {
    Keep,
    Zero,
    Replace,
    IncrementClamp,
    DecrementClamp,
    Invert,
    IncrementWrap,
    DecrementWrap,
}

// ===== COLOR BLEND ENUMS =====

/// Blend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOperation {
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

/// Blend factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SourceColor,
    OneMinusSourceColor,
    SourceAlpha,
    OneMinusSourceAlpha,
    DestinationColor,
    OneMinusDestinationColor,
    DestinationAlpha,
    OneMinusDestinationAlpha,
    SourceAlphaSaturated,
    BlendColor,
    OneMinusBlendColor,
    BlendAlpha,
    OneMinusBlendAlpha,
    // Dual-source blending
    Source1Color,
    OneMinusSource1Color,
    Source1Alpha,
    OneMinusSource1Alpha,
}

// ===== RASTERIZATION ENUMS =====

/// Polygon fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillMode {
    Fill,
    /// Wireframe
    Line,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullFace {
    None,
    Front,
    Back,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontFace {
    Clockwise,
    CounterClockwise,
}

// ===== DESCRIPTORS =====

/// Vertex attribute of the single interleaved vertex stream
#[derive(Debug, Clone, Copy)]
pub struct VertexAttribute {
    /// Data format
    pub format: VertexFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
    /// Attribute location in the shader
    pub index: u32,
}

/// Color write mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorWriteMask {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
    pub alpha: bool,
}

impl ColorWriteMask {
    pub const ALL: Self = Self { red: true, green: true, blue: true, alpha: true };
    pub const NONE: Self = Self { red: false, green: false, blue: false, alpha: false };
}

/// Blend and write mask state of one color attachment
#[derive(Debug, Clone, Copy)]
pub struct ColorAttachmentBlend {
    pub blending_enabled: bool,
    pub rgb_blend_op: BlendOperation,
    pub alpha_blend_op: BlendOperation,
    pub rgb_src_blend_factor: BlendFactor,
    pub rgb_dst_blend_factor: BlendFactor,
    pub alpha_src_blend_factor: BlendFactor,
    pub alpha_dst_blend_factor: BlendFactor,
    pub write_mask: ColorWriteMask,
}

impl Default for ColorAttachmentBlend {
    fn default() -> Self {
        Self {
            blending_enabled: false,
            rgb_blend_op: BlendOperation::Add,
            alpha_blend_op: BlendOperation::Add,
            rgb_src_blend_factor: BlendFactor::One,
            rgb_dst_blend_factor: BlendFactor::Zero,
            alpha_src_blend_factor: BlendFactor::One,
            alpha_dst_blend_factor: BlendFactor::Zero,
            write_mask: ColorWriteMask::ALL,
        }
    }
}

impl ColorAttachmentBlend {
    /// Standard `src * alpha + dst * (1 - alpha)` blending
    pub fn alpha_blending() -> Self {
        Self {
            blending_enabled: true,
            rgb_src_blend_factor: BlendFactor::SourceAlpha,
            rgb_dst_blend_factor: BlendFactor::OneMinusSourceAlpha,
            alpha_src_blend_factor: BlendFactor::One,
            alpha_dst_blend_factor: BlendFactor::OneMinusSourceAlpha,
            ..Default::default()
        }
    }
}

/// Stencil state of one face
#[derive(Debug, Clone, Copy)]
pub struct StencilState {
    pub function: CompareFunction,
    pub reference: i32,
    pub read_mask: u32,
    pub write_mask: u32,
    pub stencil_fail: StencilOperation,
    pub depth_fail: StencilOperation,
    pub depth_and_stencil_pass: StencilOperation,
}

impl Default for StencilState {
    fn default() -> Self {
        Self {
            function: CompareFunction::Always,
            reference: 0,
            read_mask: 0xFF,
            write_mask: 0xFF,
            stencil_fail: StencilOperation::Keep,
            depth_fail: StencilOperation::Keep,
            depth_and_stencil_pass: StencilOperation::Keep,
        }
    }
}

/// Descriptor for creating a pipeline
///
/// Only the vertex layout and the linked program become native objects.
/// Every other field is global state in the native API and is reapplied
/// each time the pipeline is set in a render pass.
#[derive(Debug, Clone)]
pub struct PipelineDesc<'a, S> {
    pub label: Option<String>,
    pub primitive: PrimitiveType,
    pub vertex_shader: &'a S,
    pub fragment_shader: &'a S,
    /// Attributes of the single interleaved vertex stream
    pub vertex_attributes: Vec<VertexAttribute>,
    /// Distance in bytes between two vertices of the stream
    pub vertex_stride: u32,
    /// One entry per color attachment (at most `MAX_COLOR_ATTACHMENTS`)
    pub color_attachments: Vec<ColorAttachmentBlend>,
    pub depth_write_enabled: bool,
    pub depth_function: CompareFunction,
    /// Slope-scaled depth bias
    pub depth_bias_scale: f32,
    /// Constant depth bias
    pub depth_bias: f32,
    pub depth_bias_clamp: f32,
    pub stencil_front: StencilState,
    pub stencil_back: StencilState,
    pub fill_mode: FillMode,
    pub cull_face: CullFace,
    pub front_face: FrontFace,
}

impl<'a, S> PipelineDesc<'a, S> {
    /// Triangle pipeline with one opaque color attachment and default state
    pub fn new(vertex_shader: &'a S, fragment_shader: &'a S) -> Self {
        Self {
            label: None,
            primitive: PrimitiveType::Triangle,
            vertex_shader,
            fragment_shader,
            vertex_attributes: Vec::new(),
            vertex_stride: 0,
            color_attachments: vec![ColorAttachmentBlend::default()],
            depth_write_enabled: false,
            depth_function: CompareFunction::Always,
            depth_bias_scale: 0.0,
            depth_bias: 0.0,
            depth_bias_clamp: 0.0,
            stencil_front: StencilState::default(),
            stencil_back: StencilState::default(),
            fill_mode: FillMode::Fill,
            cull_face: CullFace::None,
            front_face: FrontFace::CounterClockwise,
        }
    }

    /// Returns true if the color attachment count fits the render pass limit
    pub fn has_valid_attachment_count(&self) -> bool {
        self.color_attachments.len() <= MAX_COLOR_ATTACHMENTS
    }
}

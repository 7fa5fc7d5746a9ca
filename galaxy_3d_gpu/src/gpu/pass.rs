/// Render pass attachment descriptors

use glam::Vec4;

/// Maximum number of color attachments in a render pass
pub const MAX_COLOR_ATTACHMENTS: usize = 4;

/// What happens to an attachment's contents when a render pass starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadAction {
    /// Keep the existing contents
    #[default]
    Load,
    /// Clear to the attachment's clear value
    Clear,
    /// Contents are undefined (invalidated)
    DontCare,
}

/// Color attachment of a render pass
///
/// A `None` texture leaves the slot unbound.
#[derive(Debug, Clone, Copy)]
pub struct ColorAttachmentDesc<'a, T> {
    pub texture: Option<&'a T>,
    pub load: LoadAction,
    pub clear_color: Vec4,
}

impl<'a, T> ColorAttachmentDesc<'a, T> {
    /// Attachment that keeps its contents
    pub fn load(texture: &'a T) -> Self {
        Self { texture: Some(texture), load: LoadAction::Load, clear_color: Vec4::ZERO }
    }

    /// Attachment cleared to `color`
    pub fn clear(texture: &'a T, color: Vec4) -> Self {
        Self { texture: Some(texture), load: LoadAction::Clear, clear_color: color }
    }

    /// Attachment whose previous contents are discarded
    pub fn dont_care(texture: &'a T) -> Self {
        Self { texture: Some(texture), load: LoadAction::DontCare, clear_color: Vec4::ZERO }
    }

    /// Unbound slot
    pub fn unused() -> Self {
        Self { texture: None, load: LoadAction::Load, clear_color: Vec4::ZERO }
    }
}

/// Depth attachment of a render pass
#[derive(Debug, Clone, Copy)]
pub struct DepthAttachmentDesc<'a, T> {
    pub texture: &'a T,
    pub load: LoadAction,
    pub clear_depth: f32,
}

/// Stencil attachment of a render pass
#[derive(Debug, Clone, Copy)]
pub struct StencilAttachmentDesc<'a, T> {
    pub texture: &'a T,
    pub load: LoadAction,
    pub clear_stencil: i32,
}

/// Buffer descriptor

/// Descriptor for creating a CPU-visible or GPU-only buffer
///
/// Buffer storage is immutable: the length is fixed at creation,
/// the contents stay writable.
#[derive(Debug, Clone, Default)]
pub struct BufferDesc {
    /// Debug label attached to the native object
    pub label: Option<String>,
    /// Size in bytes
    pub length: usize,
}

impl BufferDesc {
    /// Unlabelled buffer of `length` bytes
    pub fn new(length: usize) -> Self {
        Self { label: None, length }
    }

    /// Attach a debug label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Shader descriptor and stage detection

use crate::error::{Error, Result};

/// Descriptor for creating a shader
#[derive(Debug, Clone, Default)]
pub struct ShaderDesc {
    /// Debug label attached to the native object
    pub label: Option<String>,
}

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

const VERTEX_MARKER: &[u8] = b"// vert";
const FRAGMENT_MARKER: &[u8] = b"// frag";

impl ShaderStage {
    /// Detect the stage of a GLSL source blob
    ///
    /// The blob must start with a `// vert` or `// frag` marker comment.
    ///
    /// # Example
    ///
    /// ```
    /// use galaxy_3d_gpu::galaxy3d::gpu::ShaderStage;
    ///
    /// let stage = ShaderStage::detect(b"// vert\n#version 460\nvoid main() {}").unwrap();
    /// assert_eq!(stage, ShaderStage::Vertex);
    /// ```
    pub fn detect(source: &[u8]) -> Result<Self> {
        if source.starts_with(VERTEX_MARKER) {
            Ok(ShaderStage::Vertex)
        } else if source.starts_with(FRAGMENT_MARKER) {
            Ok(ShaderStage::Fragment)
        } else {
            Err(Error::InvalidResource("malformed shader source".to_string()))
        }
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;

/*!
# Galaxy 3D GPU

Backend-agnostic core of the Galaxy 3D GPU layer.

This crate defines what a GPU backend implements and what client rendering
code consumes: resource descriptors, pixel/vertex formats, pipeline state,
render pass attachments, device limits and configuration, and the
`GraphicsDevice` trait. Backends (OpenGL) live in their own crates.

## Architecture

- **GraphicsDevice**: resource factory and command buffer lifecycle
- **Descriptors**: `BufferDesc`, `TextureDesc`, `SamplerDesc`, `ShaderDesc`, `PipelineDesc`
- **Attachments**: `ColorAttachmentDesc`, `DepthAttachmentDesc`, `StencilAttachmentDesc`
- **DeviceLimits / DeviceConfig**: capability checks and device options
- **ResizeNotifier**: window resize flag shared with the event loop
- **Engine**: global logger host used by every backend
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod gpu;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Global services
    pub use crate::engine::Engine;

    // Device trait
    pub use crate::gpu::GraphicsDevice;

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // GPU sub-module with all descriptor and format types
    pub mod gpu {
        pub use crate::gpu::*;
    }
}

// Re-export math library at crate root
pub use glam;

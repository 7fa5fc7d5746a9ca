/// GPU module - backend-agnostic descriptors, formats and the device trait

// Module declarations
pub mod graphics_device;
pub mod format;
pub mod buffer;
pub mod texture;
pub mod sampler;
pub mod shader;
pub mod pipeline;
pub mod pass;
pub mod limits;
pub mod config;
pub mod surface;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use format::*;
pub use buffer::*;
pub use texture::*;
pub use sampler::*;
pub use shader::*;
pub use pipeline::*;
pub use pass::*;
pub use limits::*;
pub use config::*;
pub use surface::*;

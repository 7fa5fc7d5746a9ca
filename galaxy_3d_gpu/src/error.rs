//! Error types for the Galaxy3D GPU layer
//!
//! This module defines the error types used by the GPU abstraction and its
//! backends, covering capability checks, native object creation, command
//! recording and submission.

use std::fmt;

/// Result type for Galaxy3D GPU operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D GPU errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL object creation, framebuffer status, etc.)
    BackendError(String),

    /// Out of memory (command buffer growth or allocation failure)
    OutOfMemory,

    /// Invalid resource (destroyed handle, malformed shader, etc.)
    InvalidResource(String),

    /// Initialization failed (device, entry points, backbuffer)
    InitializationFailed(String),

    /// A description exceeds a device limit
    CapabilityExceeded(String),

    /// Operation or format has no native equivalent on this backend
    Unsupported(String),

    /// Call made in the wrong recording state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::CapabilityExceeded(msg) => write!(f, "Capability exceeded: {}", msg),
            Error::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

/// Device configuration

/// Default initial command buffer capacity in bytes
pub const DEFAULT_COMMAND_BUFFER_CAPACITY: usize = 128 * 1024;

/// Guaranteed minimum shader storage block size
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 128 * 1024 * 1024;

/// Device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Enable native debug output and debug-message statistics
    pub debug: bool,
    /// Device label (used for the present debug group)
    pub label: Option<String>,
    /// Initial capacity in bytes of each command buffer
    pub command_buffer_capacity: usize,
    /// Swap interval applied at device creation (0 = immediate, 1 = vsync, -1 = adaptive)
    pub swap_interval: i32,
    /// Maximum buffer length in bytes
    pub max_buffer_size: usize,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            label: None,
            command_buffer_capacity: DEFAULT_COMMAND_BUFFER_CAPACITY,
            swap_interval: 1,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

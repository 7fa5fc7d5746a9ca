/// OpenGL debug support - debug groups, object labels, error checks and
/// the GL_KHR_debug output callback
///
/// Debug output messages are routed to the engine logger. With the
/// `gl-debug-output` feature, per-type counters and a duplicate-message
/// tracker are kept and can be printed as a report at shutdown.

use crate::gl_api::GlApi;

/// Longest debug group message passed to the driver, in bytes
pub const MAX_DEBUG_GROUP_MESSAGE: usize = 127;

// ===== DEBUG GROUPS / LABELS =====

/// `prefix + label`, cut to `MAX_DEBUG_GROUP_MESSAGE` bytes on a char boundary
pub(crate) fn debug_group_message(prefix: &str, label: &str) -> String {
    let mut message = String::with_capacity(prefix.len() + label.len());
    message.push_str(prefix);
    message.push_str(label);
    if message.len() > MAX_DEBUG_GROUP_MESSAGE {
        let mut end = MAX_DEBUG_GROUP_MESSAGE;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}

pub(crate) fn push_debug_group<G: GlApi>(gl: &G, prefix: &str, label: &str) {
    gl.push_debug_group(&debug_group_message(prefix, label));
}

/// Attach `label` to a native object, if any
pub(crate) fn label_object<G: GlApi>(gl: &G, identifier: u32, name: u32, label: Option<&str>) {
    if let Some(label) = label {
        gl.object_label(identifier, name, label);
    }
}

// ===== ERROR CHECKS =====

/// Log the pending OpenGL error after `$what`, debug builds only
///
/// OpenGL calls do not return errors; this drains the error flag and
/// reports it with the caller's file:line.
macro_rules! check_gl_error {
    ($gl:expr, $what:expr) => {
        if cfg!(debug_assertions) {
            let error = $gl.get_error();
            if error != glow::NO_ERROR {
                galaxy_3d_gpu::engine_error!(
                    "galaxy3d::opengl",
                    "{}: {}",
                    $what,
                    $crate::gl_debug::error_name(error)
                );
            }
        }
    };
}
pub(crate) use check_gl_error;

pub(crate) fn error_name(error: u32) -> String {
    match error {
        glow::INVALID_ENUM => "GL_INVALID_ENUM".to_string(),
        glow::INVALID_VALUE => "GL_INVALID_VALUE".to_string(),
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION".to_string(),
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION".to_string(),
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY".to_string(),
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW".to_string(),
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW".to_string(),
        other => format!("0x{:04x}", other),
    }
}

// ===== DEBUG OUTPUT =====

#[cfg(feature = "gl-debug-output")]
pub use self::output::{debug_output_stats, print_debug_output_report, reset_debug_output_stats, DebugOutputStats};

#[cfg(feature = "gl-debug-output")]
pub(crate) use self::output::debug_output_callback;

#[cfg(feature = "gl-debug-output")]
mod output {
    use colored::*;
    use galaxy_3d_gpu::{engine_error, engine_info, engine_warn};
    use rustc_hash::FxHashMap;
    use std::ffi::{c_char, c_void, CStr};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    const SOURCE: &str = "galaxy3d::opengl";

    /// Global debug output statistics (atomic counters)
    static OUTPUT_STATS: OutputStatsTracker = OutputStatsTracker::new();

    /// Global tracker for repeated messages
    static MESSAGE_TRACKER: Mutex<Option<FxHashMap<String, u32>>> = Mutex::new(None);

    /// Counts of debug output messages by logged severity
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct DebugOutputStats {
        pub errors: u32,
        pub warnings: u32,
        pub info: u32,
        /// Messages seen more than once
        pub repeated: u32,
    }

    impl DebugOutputStats {
        pub fn total(&self) -> u32 {
            self.errors + self.warnings + self.info
        }
    }

    struct OutputStatsTracker {
        errors: AtomicU32,
        warnings: AtomicU32,
        info: AtomicU32,
    }

    impl OutputStatsTracker {
        const fn new() -> Self {
            Self {
                errors: AtomicU32::new(0),
                warnings: AtomicU32::new(0),
                info: AtomicU32::new(0),
            }
        }

        fn reset(&self) {
            self.errors.store(0, Ordering::Relaxed);
            self.warnings.store(0, Ordering::Relaxed);
            self.info.store(0, Ordering::Relaxed);
        }
    }

    /// Current debug output statistics
    pub fn debug_output_stats() -> DebugOutputStats {
        let repeated = match MESSAGE_TRACKER.lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|messages| messages.values().filter(|&&count| count > 1).count() as u32)
                .unwrap_or(0),
            Err(_) => 0,
        };
        DebugOutputStats {
            errors: OUTPUT_STATS.errors.load(Ordering::Relaxed),
            warnings: OUTPUT_STATS.warnings.load(Ordering::Relaxed),
            info: OUTPUT_STATS.info.load(Ordering::Relaxed),
            repeated,
        }
    }

    /// Clear counters and the repeated-message tracker
    pub fn reset_debug_output_stats() {
        OUTPUT_STATS.reset();
        if let Ok(mut guard) = MESSAGE_TRACKER.lock() {
            *guard = None;
        }
    }

    /// Print a colored summary of the debug output received so far
    pub fn print_debug_output_report() {
        let stats = debug_output_stats();

        if stats.total() == 0 {
            println!("\n{}", "✓ No OpenGL debug messages".green().bold());
            return;
        }

        println!("\n{}", "=== OpenGL Debug Output Report ===".bright_blue().bold());
        if stats.errors > 0 {
            println!("  {} {}", "Errors:".red().bold(), stats.errors);
        }
        if stats.warnings > 0 {
            println!("  {} {}", "Warnings:".yellow().bold(), stats.warnings);
        }
        if stats.info > 0 {
            println!("  {} {}", "Info:".cyan(), stats.info);
        }
        println!("  {} {}", "Total:".white().bold(), stats.total());
        if stats.repeated > 0 {
            println!("\n  {} {} message(s) appeared multiple times", "ℹ".cyan(), stats.repeated);
        }
        println!("{}\n", "===================================".bright_blue().bold());
    }

    fn source_name(source: u32) -> &'static str {
        match source {
            glow::DEBUG_SOURCE_API => "GL",
            glow::DEBUG_SOURCE_WINDOW_SYSTEM => "window system",
            glow::DEBUG_SOURCE_SHADER_COMPILER => "shader compiler",
            glow::DEBUG_SOURCE_THIRD_PARTY => "third party",
            glow::DEBUG_SOURCE_APPLICATION => "application",
            glow::DEBUG_SOURCE_OTHER => "other",
            _ => "unknown",
        }
    }

    fn track(message: &str) -> u32 {
        let Ok(mut guard) = MESSAGE_TRACKER.lock() else {
            return 1;
        };
        let count = guard
            .get_or_insert_with(FxHashMap::default)
            .entry(message.to_string())
            .or_insert(0);
        *count += 1;
        *count
    }

    /// Log one debug output message and update the statistics
    ///
    /// Application messages are our own debug groups echoed back and are skipped.
    pub(crate) fn route_debug_message(source: u32, gltype: u32, message: &str) {
        if source == glow::DEBUG_SOURCE_APPLICATION {
            return;
        }

        let occurrences = track(message);
        let repeat = if occurrences > 1 {
            format!(" [x{}]", occurrences)
        } else {
            String::new()
        };
        let source = source_name(source);

        match gltype {
            glow::DEBUG_TYPE_ERROR
            | glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR
            | glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR
            | glow::DEBUG_TYPE_PORTABILITY => {
                let prefix = match gltype {
                    glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated behavior: ",
                    glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined behavior: ",
                    glow::DEBUG_TYPE_PORTABILITY => "Portability: ",
                    _ => "",
                };
                OUTPUT_STATS.errors.fetch_add(1, Ordering::Relaxed);
                engine_error!(SOURCE, "OpenGL ({}): {}{}{}", source, prefix, message, repeat);
            }
            glow::DEBUG_TYPE_PERFORMANCE => {
                OUTPUT_STATS.warnings.fetch_add(1, Ordering::Relaxed);
                engine_warn!(SOURCE, "OpenGL ({}): {}{}", source, message, repeat);
            }
            _ => {
                OUTPUT_STATS.info.fetch_add(1, Ordering::Relaxed);
                engine_info!(SOURCE, "OpenGL ({}): {}{}", source, message, repeat);
            }
        }
    }

    /// `GLDEBUGPROC` installed at device creation when debug is enabled
    pub(crate) extern "system" fn debug_output_callback(
        source: u32,
        gltype: u32,
        _id: u32,
        _severity: u32,
        length: i32,
        message: *const c_char,
        _user_param: *mut c_void,
    ) {
        if message.is_null() {
            return;
        }
        // SAFETY: the driver passes a message valid for the duration of the
        // call, either `length` bytes or NUL-terminated when length < 0.
        let text = unsafe {
            if length >= 0 {
                let bytes = std::slice::from_raw_parts(message as *const u8, length as usize);
                String::from_utf8_lossy(bytes).into_owned()
            } else {
                CStr::from_ptr(message).to_string_lossy().into_owned()
            }
        };
        route_debug_message(source, gltype, text.trim_end());
    }
}

#[cfg(test)]
#[path = "gl_debug_tests.rs"]
mod tests;

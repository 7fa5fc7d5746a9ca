/// Window surface types shared by backends

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use winit::event::WindowEvent;

/// Pixel format of a window's default framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfacePixelFormat {
    Unknown,
    Rgb565,
    Rgba8,
    Bgra8,
    Rgb10A2,
}

/// Cross-thread "window size changed" flag
///
/// The event loop calls [`observe`](Self::observe) (or [`notify`](Self::notify))
/// and the render thread consumes the flag with [`take`](Self::take). Several
/// notifications before one `take` collapse into a single pending change.
///
/// # Example
///
/// ```
/// use galaxy_3d_gpu::galaxy3d::gpu::ResizeNotifier;
///
/// let notifier = ResizeNotifier::new();
/// let event_side = notifier.clone();
/// event_side.notify();
/// event_side.notify();
/// assert!(notifier.take());
/// assert!(!notifier.take());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResizeNotifier {
    changed: Arc<AtomicBool>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the surface as resized
    pub fn notify(&self) {
        self.changed.store(true, Ordering::Release);
    }

    /// Flag the surface if `event` changes the drawable size
    ///
    /// Returns true if the event was a resize.
    pub fn observe(&self, event: &WindowEvent) -> bool {
        let resized = matches!(
            event,
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. }
        );
        if resized {
            self.notify();
        }
        resized
    }

    /// Consume the flag: returns true exactly once per batch of notifications
    pub fn take(&self) -> bool {
        self.changed
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Returns true if a change is pending
    pub fn is_pending(&self) -> bool {
        self.changed.load(Ordering::Acquire)
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;

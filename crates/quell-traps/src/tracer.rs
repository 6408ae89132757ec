//! Stack tracer capability.
//!
//! Backtrace capture is platform-conditional: targets with unwinding
//! support resolve frames through the `backtrace` crate, everything else
//! degrades to an empty capture which the crash report renders as a
//! "Not available" line.

/// Maximum number of frames captured on the crash path.
pub const MAX_FRAMES: usize = 15;

/// Captures call-stack frames as human-readable strings.
pub trait StackTracer {
    /// Capture up to `limit` frames of the current call stack.
    ///
    /// Returns an empty vector when stack unwinding is not supported.
    fn capture(&self, limit: usize) -> Vec<String>;
}

/// Tracer backed by the `backtrace` crate.
///
/// Each frame is rendered as its instruction pointer, followed by the
/// resolved symbol name where symbolization succeeds.
#[cfg(any(unix, windows))]
pub struct UnwindTracer;

#[cfg(any(unix, windows))]
impl StackTracer for UnwindTracer {
    fn capture(&self, limit: usize) -> Vec<String> {
        let mut frames = Vec::with_capacity(limit);
        backtrace::trace(|frame| {
            let ip = frame.ip();
            let mut line = format!("{ip:p}");
            backtrace::resolve_frame(frame, |symbol| {
                if let Some(name) = symbol.name() {
                    line = format!("{ip:p} - {name}");
                }
            });
            frames.push(line);
            frames.len() < limit
        });
        frames
    }
}

/// Tracer for targets without stack unwinding support.
pub struct UnsupportedTracer;

impl StackTracer for UnsupportedTracer {
    fn capture(&self, _limit: usize) -> Vec<String> {
        Vec::new()
    }
}

/// The tracer for the current target, selected at build time.
pub fn platform_tracer() -> &'static dyn StackTracer {
    #[cfg(any(unix, windows))]
    return &UnwindTracer;
    #[cfg(not(any(unix, windows)))]
    return &UnsupportedTracer;
}

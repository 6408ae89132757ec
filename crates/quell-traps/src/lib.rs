//! Crash reporting and graceful shutdown via OS signals.
//!
//! This crate installs two kinds of signal dispositions for a host
//! application: fatal signals (segmentation violation, illegal
//! instruction, floating-point exception, abort) print a diagnostic
//! report with a best-effort backtrace and then re-raise the signal so
//! the OS performs its default termination, while interrupt and
//! termination requests set a cooperative shutdown flag the host polls
//! from its frame loop.

mod build_info;
mod report;
mod tracer;
mod traps;

pub use build_info::BuildInfo;
pub use report::write_crash_report;
pub use tracer::{MAX_FRAMES, StackTracer, UnsupportedTracer, platform_tracer};
#[cfg(any(unix, windows))]
pub use tracer::UnwindTracer;
pub use traps::{SignalContext, register_handlers};

//! Signal dispositions: crash reporting on fatal signals, cooperative
//! shutdown on interrupt and termination requests.
//!
//! The crash path prints a diagnostic report to stdout, restores the
//! default dispositions, and re-raises the signal so the OS performs its
//! default termination (core dump where configured). The shutdown path
//! only sets a flag; the host's frame loop is expected to poll it and
//! exit on its own.

use crate::build_info::BuildInfo;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(any(unix, windows))]
use std::io::{self, Write};

/// Process-wide handler state shared with the host application.
///
/// Owns the cooperative shutdown flag. The flag only ever transitions
/// from `false` to `true`; nothing here resets it.
pub struct SignalContext {
    info: BuildInfo,
    quit_requested: AtomicBool,
}

impl SignalContext {
    /// True once an interrupt or termination request has been received.
    ///
    /// Polled by the host at a safe point, typically the top of its
    /// frame loop.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested.load(Ordering::Relaxed)
    }
}

static CONTEXT: OnceCell<SignalContext> = OnceCell::new();

/// Fatal signals that trigger the crash report.
#[cfg(any(unix, windows))]
const FATAL_SIGNALS: [libc::c_int; 4] =
    [libc::SIGSEGV, libc::SIGILL, libc::SIGFPE, libc::SIGABRT];

/// Signals that request a cooperative shutdown.
#[cfg(any(unix, windows))]
const SHUTDOWN_SIGNALS: [libc::c_int; 2] = [libc::SIGINT, libc::SIGTERM];

/// Install the crash and shutdown signal dispositions.
///
/// Call once early in startup, before anything that could plausibly
/// fault. Calling again reinstalls the same dispositions and returns the
/// same context; the identity from the first call wins. `libc::signal`
/// is treated as always succeeding, so installation failures are not
/// reported.
pub fn register_handlers(info: BuildInfo) -> &'static SignalContext {
    let ctx = CONTEXT.get_or_init(|| SignalContext {
        info,
        quit_requested: AtomicBool::new(false),
    });

    install_dispositions();
    log::debug!("signal handlers installed for {}", ctx.info.product);

    ctx
}

#[cfg(any(unix, windows))]
fn install_dispositions() {
    unsafe {
        for sig in FATAL_SIGNALS {
            libc::signal(sig, crash_handler as libc::sighandler_t);
        }
        for sig in SHUTDOWN_SIGNALS {
            libc::signal(sig, terminate_handler as libc::sighandler_t);
        }
    }
}

#[cfg(not(any(unix, windows)))]
fn install_dispositions() {}

/// Crash handler. Never returns: after reporting, the signal is
/// re-raised under the default disposition and the OS terminates the
/// process.
///
/// Locking and formatting stdout allocates, which is not
/// async-signal-safe. That is an accepted limitation of this path: the
/// process is already terminating and the diagnostic text is the whole
/// point of the handler.
#[cfg(any(unix, windows))]
extern "C-unwind" fn crash_handler(signum: libc::c_int) {
    if let Some(ctx) = CONTEXT.get() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = crate::report::write_crash_report(
            &mut out,
            &ctx.info,
            signum,
            crate::tracer::platform_tracer(),
        );
        let _ = out.flush();
    }

    reset_fatal_dispositions();

    unsafe {
        libc::raise(signum);
    }
}

/// Shutdown handler: record the request and return to the interrupted
/// code. The host observes the flag on its next frame.
#[cfg(any(unix, windows))]
extern "C-unwind" fn terminate_handler(_signum: libc::c_int) {
    if let Some(ctx) = CONTEXT.get() {
        ctx.quit_requested.store(true, Ordering::Relaxed);
    }
}

/// Restore the default disposition for the fatal signals, so re-raising
/// one does not recurse into the crash handler.
#[cfg(any(unix, windows))]
fn reset_fatal_dispositions() {
    unsafe {
        for sig in FATAL_SIGNALS {
            libc::signal(sig, libc::SIG_DFL);
        }
    }
}

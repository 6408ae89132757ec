//! Startup banner and the cooperative frame loop.

use crate::config::Config;
use anyhow::Result;
use quell_traps::{BuildInfo, SignalContext};
use std::thread;
use std::time::Duration;

/// Identity constants reported in the banner and in crash diagnostics.
///
/// The compiler string is captured by the build script.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    product: "quell",
    version: env!("CARGO_PKG_VERSION"),
    platform: std::env::consts::OS,
    architecture: std::env::consts::ARCH,
    compiler: env!("QUELL_RUSTC_VERSION"),
};

/// Format the startup banner.
pub fn format_banner(info: &BuildInfo, config: &Config) -> String {
    let mut lines = Vec::new();

    lines.push(format!("{} v{}", info.product, info.version));
    lines.push(format!("Platform: {} ({})", info.platform, info.architecture));
    lines.push(format!("Tick rate: {} ms", config.runtime.tick_ms));
    lines.push("Press Ctrl+C to request shutdown.".to_string());
    lines.push(String::new()); // Empty line at the end

    lines.join("\n")
}

/// Run the frame loop until shutdown is requested.
///
/// The shutdown flag is polled at the top of every frame, which is the
/// safe point for acting on a signal received mid-frame. `max_ticks`
/// bounds the run for testing; `None` runs until a shutdown signal
/// arrives.
pub fn run_loop(ctx: &SignalContext, config: &Config, max_ticks: Option<u64>) -> Result<()> {
    let tick = Duration::from_millis(config.runtime.tick_ms);
    let mut frame: u64 = 0;

    loop {
        if ctx.quit_requested() {
            log::info!("Shutdown requested, exiting after {} frames", frame);
            break;
        }
        if let Some(limit) = max_ticks {
            if frame >= limit {
                log::debug!("Frame limit {} reached", limit);
                break;
            }
        }

        frame += 1;
        if frame % 600 == 0 {
            log::trace!("frame {}", frame);
        }
        thread::sleep(tick);
    }

    Ok(())
}

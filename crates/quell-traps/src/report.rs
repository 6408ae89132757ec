//! Crash report formatting.

use crate::build_info::BuildInfo;
use crate::tracer::{MAX_FRAMES, StackTracer};
use std::io::{self, Write};

/// Write the crash diagnostic block.
///
/// The report is a fixed banner, one labeled line per identity field plus
/// the numeric signal value, and a backtrace section holding either one
/// indented line per captured frame or a single line stating that no
/// backtrace is available.
pub fn write_crash_report<W: Write>(
    out: &mut W,
    info: &BuildInfo,
    signal: i32,
    tracer: &dyn StackTracer,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=======================================================")?;
    writeln!(out)?;
    writeln!(out, "{} crashed! This should not happen...", info.product)?;
    writeln!(out)?;
    writeln!(out, "Make sure that you are using the latest version.")?;
    writeln!(out)?;
    writeln!(out, "=======================================================")?;
    writeln!(out)?;
    writeln!(out, "Product:      {}", info.product)?;
    writeln!(out, "Version:      {}", info.version)?;
    writeln!(out, "Platform:     {}", info.platform)?;
    writeln!(out, "Architecture: {}", info.architecture)?;
    writeln!(out, "Compiler:     {}", info.compiler)?;
    writeln!(out, "Signal:       {}", signal)?;
    writeln!(out)?;
    writeln!(out, "Backtrace:")?;

    let frames = tracer.capture(MAX_FRAMES);
    if frames.is_empty() {
        writeln!(out, "  Not available on this platform.")?;
    } else {
        for frame in &frames {
            writeln!(out, "  {frame}")?;
        }
    }

    writeln!(out)
}

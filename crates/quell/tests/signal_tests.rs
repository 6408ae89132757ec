//! Signal delivery integration tests.
//!
//! Each test spawns the quell binary and either has it raise a signal on
//! itself (the hidden `--raise` flag) or delivers one externally, then
//! inspects stdout and the exit status.

#![cfg(unix)]

use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

fn run_with_raise(signal: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_quell"))
        .args([
            "--no-banner",
            "--config",
            "/nonexistent/quell.toml",
            "--tick-ms",
            "1",
            "--raise",
            signal,
        ])
        .output()
        .expect("Failed to run quell")
}

/// Every fatal signal produces the diagnostic block on stdout and kills
/// the process with that signal's default disposition.
#[test]
fn test_fatal_signals_emit_diagnostics() {
    let cases = [
        ("segv", libc::SIGSEGV),
        ("ill", libc::SIGILL),
        ("fpe", libc::SIGFPE),
        ("abrt", libc::SIGABRT),
    ];

    for (name, signum) in cases {
        let output = run_with_raise(name);
        assert_eq!(
            output.status.signal(),
            Some(signum),
            "quell should die by {} ({}): {:?}",
            name,
            signum,
            output.status
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        let labels = [
            "Product:",
            "Version:",
            "Platform:",
            "Architecture:",
            "Compiler:",
            "Signal:",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| {
                stdout
                    .find(label)
                    .unwrap_or_else(|| panic!("missing {} for {}: {}", label, name, stdout))
            })
            .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "diagnostic lines out of order for {}: {}",
            name,
            stdout
        );
        assert!(
            stdout.contains(&format!("Signal:       {}", signum)),
            "signal number should be reported for {}: {}",
            name,
            stdout
        );
        assert!(
            stdout.contains("crashed! This should not happen..."),
            "crash banner should precede the report for {}: {}",
            name,
            stdout
        );
    }
}

/// The abort report carries at least one backtrace frame on this platform.
#[test]
fn test_abort_report_contains_backtrace_frames() {
    let output = run_with_raise("abrt");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let signal_line = regex::Regex::new(r"(?m)^Signal:       6$").unwrap();
    assert!(
        signal_line.is_match(&stdout),
        "abort should be reported as signal 6: {}",
        stdout
    );

    assert!(stdout.contains("Backtrace:"), "missing backtrace section: {}", stdout);
    let has_frame = stdout
        .lines()
        .any(|line| line.starts_with("  ") && !line.trim().is_empty());
    assert!(
        has_frame,
        "expected at least one indented backtrace frame: {}",
        stdout
    );
    assert!(
        !stdout.contains("Not available on this platform."),
        "capable platform should not report an unavailable backtrace: {}",
        stdout
    );
}

/// An interrupt requests shutdown cooperatively: the process exits
/// cleanly and nothing is written to stdout.
#[test]
fn test_interrupt_exits_cleanly_with_no_output() {
    let output = run_with_raise("int");
    assert!(
        output.status.success(),
        "quell should exit cleanly after an interrupt: {:?}",
        output.status
    );
    assert!(
        output.stdout.is_empty(),
        "interrupt should produce no stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// A self-delivered termination request behaves like an interrupt.
#[test]
fn test_term_exits_cleanly() {
    let output = run_with_raise("term");
    assert!(
        output.status.success(),
        "quell should exit cleanly after a termination request: {:?}",
        output.status
    );
}

/// SIGTERM delivered externally is observed by the frame loop.
#[test]
fn test_external_sigterm_requests_shutdown() {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let mut child = Command::new(env!("CARGO_BIN_EXE_quell"))
        .args([
            "--no-banner",
            "--config",
            "/nonexistent/quell.toml",
            "--tick-ms",
            "5",
        ])
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn quell");

    // Give the process time to install handlers and enter the loop.
    std::thread::sleep(Duration::from_millis(300));
    kill(Pid::from_raw(child.id() as i32), Signal::SIGTERM).expect("Failed to deliver SIGTERM");

    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().expect("Failed to poll quell") {
            assert!(
                status.success(),
                "quell should exit cleanly on SIGTERM: {:?}",
                status
            );
            break;
        }
        if start.elapsed() > Duration::from_secs(10) {
            let _ = child.kill();
            panic!("quell did not exit after SIGTERM");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

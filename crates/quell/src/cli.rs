//! Command-line interface definition using clap.

use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

/// A small desktop application shell with crash reporting and graceful shutdown.
#[derive(Parser, Debug)]
#[command(name = "quell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Suppress the startup banner
    ///
    /// Config: startup.show_banner
    #[arg(long)]
    pub no_banner: bool,

    /// Frame tick interval in milliseconds
    ///
    /// Config: runtime.tick_ms
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Stop after this many frames (for testing)
    #[arg(long, hide = true)]
    pub ticks: Option<u64>,

    /// Raise a signal in this process after startup (for testing)
    #[arg(long, value_enum, hide = true)]
    pub raise: Option<RaiseSignal>,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Generate a default configuration file
    Init {
        /// Overwrite existing configuration file
        #[arg(long, short)]
        force: bool,
    },
    /// Display the configuration file JSON schema
    Schema,
}

/// Signal names accepted by `--raise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RaiseSignal {
    /// Segmentation violation
    Segv,
    /// Illegal instruction
    Ill,
    /// Floating-point exception
    Fpe,
    /// Abort
    Abrt,
    /// Interactive interrupt
    Int,
    /// Termination request
    Term,
}

impl RaiseSignal {
    /// The raw signal number for the current platform.
    pub fn as_raw(self) -> libc::c_int {
        match self {
            RaiseSignal::Segv => libc::SIGSEGV,
            RaiseSignal::Ill => libc::SIGILL,
            RaiseSignal::Fpe => libc::SIGFPE,
            RaiseSignal::Abrt => libc::SIGABRT,
            RaiseSignal::Int => libc::SIGINT,
            RaiseSignal::Term => libc::SIGTERM,
        }
    }
}

impl Cli {
    /// Print shell completions to stdout.
    pub fn print_completions(shell: Shell) {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "quell", &mut io::stdout());
    }
}

//! quell: a small desktop application shell with crash reporting and
//! graceful shutdown.

mod cli;
mod config;
mod runtime;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{init_config, load_config, load_config_from_path};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    env_logger::init();

    // Install signal dispositions before anything that could plausibly
    // fault. The returned context carries the shutdown flag polled by
    // the frame loop.
    let ctx = quell_traps::register_handlers(runtime::BUILD_INFO);

    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle subcommands first
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            Cli::print_completions(*shell);
            return Ok(());
        }
        Some(Commands::Config { action }) => {
            return handle_config_command(action);
        }
        None => {}
    }

    log::info!("Starting quell");

    // Load configuration (from file or default)
    let mut config = if let Some(path) = &cli.config {
        load_config_from_path(path)
    } else {
        load_config()
    };
    log::debug!("Loaded config: {:?}", config);

    // Apply CLI overrides
    if cli.no_banner {
        config.startup.show_banner = false;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.runtime.tick_ms = tick_ms;
    }

    if config.startup.show_banner {
        println!("{}", runtime::format_banner(&runtime::BUILD_INFO, &config));
    }

    // Deliver a signal to this process before entering the loop
    // (testing hook).
    if let Some(signal) = cli.raise {
        log::debug!("Raising signal {:?}", signal);
        unsafe {
            libc::raise(signal.as_raw());
        }
    }

    runtime::run_loop(ctx, &config, cli.ticks)
}

/// Handle config subcommands.
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            let path = init_config(*force)?;
            println!("Configuration file created at: {}", path.display());
            Ok(())
        }
        ConfigAction::Schema => config::print_schema(),
    }
}

//! snapredact CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use snapredact::cli::{Cli, CommandDispatcher};
use snapredact::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs are written to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("snapredact=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapredact=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("snapredact starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = std::env::current_dir().unwrap_or_default();
    let mut ui = TerminalUI::new();
    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

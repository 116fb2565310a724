//! ssh-sftp CLI
//!
//! Usage: ssh-sftp [COMMAND]
//!
//! Commands:
//!   sync      Upload localPath to remotePath (default)
//!   init      Write a template .sftprc.json
//!   list      Preview uploads, deletions and ignored paths
//!   show-url  Print the public URL for remotePath

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ssh_sftp::domain::value_objects::CancelFlag;
use ssh_sftp::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::Exit;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    let handler = move || {
        if let Some(code) = on_interrupt(&handler_flag) {
            std::process::exit(code);
        }
    };
    if let Err(e) = ctrlc::set_handler(handler) {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }

    let ctx = commands::CommandContext {
        config: cli.config,
        yes: cli.yes,
        ui,
        cancel,
    };

    let result = match cli.command.unwrap_or(Commands::Sync) {
        Commands::Sync => commands::sync::cmd_sync(&ctx),
        Commands::Init { force } => commands::init::cmd_init(&ctx, force),
        Commands::List {
            uploads,
            deletions,
            ignored,
        } => commands::list::cmd_list(&ctx, uploads, deletions, ignored),
        Commands::ShowUrl { path } => commands::show_url::cmd_show_url(&ctx, path.as_deref()),
    };

    match result {
        Ok(exit) => ExitCode::from(exit.code()),
        Err(err) => {
            ui::error::print_error(&err, &ctx.ui);
            ExitCode::from(Exit::Failure.code())
        }
    }
}

/// The first Ctrl-C stops the run at its next remote round trip. A second
/// one exits immediately, for when a transfer or handshake is stalled.
fn on_interrupt(cancel: &CancelFlag) -> Option<i32> {
    if cancel.cancel() {
        return Some(i32::from(Exit::Interrupted.code()));
    }
    tracing::warn!("interrupt received, stopping after the current operation (press Ctrl-C again to exit now)");
    None
}

/// `RUST_LOG` wins; otherwise `-v` info, `-vv` debug, `-vvv` trace.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

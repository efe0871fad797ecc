use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod logging;
mod tui;

use cli::Cli;
use commands::{CommandContext, CommandError};
use config::load_config;
use ticktick_api_rs::session::SessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_file = logging::init(cli.verbose);
    if cli.verbose {
        if let Some(path) = &log_file {
            eprintln!("Logging to {}", path.display());
        }
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            match e {
                CommandError::NotLoggedIn => eprintln!("{e}"),
                _ => eprintln!("Error: {e}"),
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);
    let sessions = SessionStore::new()?;

    if cli.logout {
        return commands::logout::execute(&ctx, &sessions);
    }

    let config = load_config()?;

    let cookie = if cli.login {
        commands::login::execute(&ctx, &config, &sessions).await?
    } else {
        sessions.load()?.ok_or(CommandError::NotLoggedIn)?
    };

    match cli.quick_add_text() {
        Some(text) => commands::quick::execute(&ctx, &config, &cookie, &text).await,
        None => commands::tui::execute(&ctx, &config, &cookie),
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Api(err) => ExitCode::from(err.exit_code() as u8),
        CommandError::Sync(ticktick_cache_rs::SyncError::Api(err)) => {
            ExitCode::from(err.exit_code() as u8)
        }
        CommandError::Sync(_) => ExitCode::from(2),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Session(_) => ExitCode::from(3),
        CommandError::NotLoggedIn | CommandError::Rejected(_) => ExitCode::from(1),
    }
}

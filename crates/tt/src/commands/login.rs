//! Interactive login.
//!
//! Prompts for email and password, exchanges them for a session cookie and
//! stores the cookie in the session file.

use std::io::{self, IsTerminal};

use dialoguer::{Input, Password};
use owo_colors::OwoColorize;
use ticktick_api_rs::client::TickTickClient;
use ticktick_api_rs::session::SessionStore;
use tracing::info;

use super::{CommandContext, CommandError, Result};
use crate::config::{ensure_config_file, Config};

fn prompt_error(e: dialoguer::Error) -> CommandError {
    CommandError::Io(io::Error::other(e.to_string()))
}

/// Runs the login prompt and returns the new session cookie.
///
/// # Errors
///
/// Returns an error if stdin is not a terminal, the credentials are rejected,
/// or the session file cannot be written.
pub async fn execute(ctx: &CommandContext, config: &Config, sessions: &SessionStore) -> Result<String> {
    if !io::stdin().is_terminal() {
        return Err(CommandError::Config(
            "--login needs an interactive terminal".to_string(),
        ));
    }

    let email: String = Input::new()
        .with_prompt("Email")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Email cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_error)?;

    let client = TickTickClient::with_base_url("", config.base_url())?;
    let cookie = client.login(email.trim(), &password).await?;
    sessions.save(&cookie)?;
    info!(path = %sessions.path().display(), "session saved");

    let config_path = ensure_config_file()?;

    if ctx.use_colors {
        println!("{}", "Login successful. Starting app...".green().bold());
    } else {
        println!("Login successful. Starting app...");
    }
    if ctx.verbose {
        println!("Config: {}", config_path.display());
    }
    Ok(cookie)
}

//! Logout: removes the stored session.

use owo_colors::OwoColorize;
use ticktick_api_rs::session::SessionStore;

use super::{CommandContext, Result};

/// Deletes the session file. Logging out twice is not an error.
pub fn execute(ctx: &CommandContext, sessions: &SessionStore) -> Result<()> {
    sessions.clear()?;
    if ctx.use_colors {
        println!("{}", "Logged out successfully.".green());
    } else {
        println!("Logged out successfully.");
    }
    Ok(())
}

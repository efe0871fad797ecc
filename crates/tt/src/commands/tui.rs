//! Starts the interactive browser.

use ticktick_api_rs::client::TickTickClient;
use ticktick_cache_rs::TaskCache;
use tracing::info;

use super::{CommandContext, Result};
use crate::config::Config;
use crate::tui::{self, state::ViewState, App};

/// Builds the cache over a live client and runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal cannot be
/// set up. Sync failures inside the TUI are shown on the status row instead.
pub fn execute(ctx: &CommandContext, config: &Config, cookie: &str) -> Result<()> {
    let zone = config.zone()?;
    let client = TickTickClient::with_base_url(cookie, config.base_url())?;
    let cache = TaskCache::new(client, config.time_zone_name());

    let state = ViewState::new(config.ui.sort, config.ui.reverse);
    info!(zone = %zone, sort = %config.ui.sort, verbose = ctx.verbose, "starting tui");

    tui::run(App::new(cache, zone, state))?;
    Ok(())
}

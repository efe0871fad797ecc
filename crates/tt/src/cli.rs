//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ticktick-tui binary.

use clap::Parser;

/// ticktick-tui - A terminal client for TickTick
#[derive(Parser, Debug)]
#[command(name = "ticktick-tui")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  ticktick-tui \"Buy milk tomorrow #groceries\"
  ticktick-tui --login
  ticktick-tui --logout")]
pub struct Cli {
    /// Log into your TickTick account via email/password, then start the app
    #[arg(short, long, conflicts_with = "logout")]
    pub login: bool,

    /// Log out and remove the stored session
    #[arg(long)]
    pub logout: bool,

    /// Verbose output (debug logging to the log file)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    pub no_color: bool,

    /// Task to quick-add, e.g. "Call mom tomorrow at 6pm #family ~home"
    #[arg(value_name = "TEXT", conflicts_with_all = ["login", "logout"])]
    pub text: Vec<String>,
}

impl Cli {
    /// Returns the quick-add text, if any was given.
    pub fn quick_add_text(&self) -> Option<String> {
        let text = self.text.join(" ");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

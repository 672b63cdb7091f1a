use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "tldv-dl")]
#[command(about = "Download TL;DV meeting recordings via yt-dlp", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Meeting URL (skips the interactive prompt)
    #[arg(long)]
    pub url: Option<String>,

    /// Auth token, with or without the "Bearer " prefix (skips the prompt)
    #[arg(long)]
    pub token: Option<String>,

    /// yt-dlp output template override
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print version information
    Version,
}

/// Treats an empty or whitespace-only flag value as unanswered, so it
/// falls through to the interactive prompt like a missing flag. The
/// prompts enforce non-empty input; flags must not bypass that.
pub fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Prompts for the meeting URL, looping until something non-empty is
/// entered.
pub fn prompt_meeting_url() -> Result<String> {
    let theme = ColorfulTheme::default();
    loop {
        let value: String = Input::with_theme(&theme)
            .with_prompt("Enter TL;DV meeting URL (e.g. https://app.tldv.io/meetings/<ID>)")
            .allow_empty(true)
            .interact_text()?;

        let trimmed = value.trim();
        if trimmed.is_empty() {
            println!("Meeting URL cannot be empty.");
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

/// Prompts for the auth token without echoing it.
pub fn prompt_token() -> Result<String> {
    loop {
        let value = Password::new()
            .with_prompt("Enter JWT token (omit 'Bearer ' prefix if desired)")
            .interact()?;

        let trimmed = value.trim();
        if trimmed.is_empty() {
            println!("Token cannot be empty.");
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

use crate::config::settings::DEFAULT_SETTINGS_FILE;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "places-search")]
#[command(about = "Search Google Places by keyword and save the results to a text file")]
pub struct CliArgs {
    /// Path to the settings file holding the API key
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
    /// Replay a JSON edit script and print the tracked changes
    Replay {
        script: PathBuf,
        /// Print the replay report as JSON
        #[clap(long)]
        json: bool,
    },
    /// Serve the review API
    Serve {
        /// Defaults to the first free port in the configured range
        #[clap(short, long)]
        port: Option<u16>,
    },
}

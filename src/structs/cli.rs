use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "tracked-changes")]
#[clap(about = "Tracked changes for manuscript editing", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

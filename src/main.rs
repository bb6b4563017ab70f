use clap::Parser;
use tracked_changes::errors::ErrorHandler;
use tracked_changes::structs::cli::Cli;
use tracked_changes::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        return Err(e.into());
    }
    Ok(())
}

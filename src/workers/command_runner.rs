use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::TrackResult;
use crate::logger::change_logger::ChangeLogger;
use crate::services::script_runner::ScriptRunner;
use crate::structs::edit_script::EditScript;
use crate::ui::review_server::ReviewServer;
use crate::ui::session_manager::SessionManager;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> TrackResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Replay { script, json } => self.replay_command(&script, json),
            Commands::Serve { port } => self.serve_command(port).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> TrackResult<()> {
        log::info!("🚀 Initializing tracked-changes configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Set tracking.user_name to the reviewer's name.");
                log::info!("🔧 Run 'tracked-changes validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> TrackResult<()> {
        log::info!("🔍 Validating configuration at {}", ConfigManager::config_path().display());

        let config = ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'tracked-changes init' to create a configuration file.");
            e
        })?;

        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        if result.is_valid() {
            log::info!(
                "👤 Changes will be attributed to {}{}",
                config.tracking.user_name,
                config.tracking.user_id.as_deref().map(|id| format!(" ({})", id)).unwrap_or_default()
            );
        }

        Ok(())
    }

    fn replay_command(&self, script_path: &Path, json: bool) -> TrackResult<()> {
        log::info!("🎬 Replaying edit script {}", script_path.display());

        let config = ConfigManager::load()?;
        let script = EditScript::load(script_path)?;
        let mut runner = ScriptRunner::new(&script, &config.tracking);
        let report = runner.run(&script)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("\n📄 Document:\n{}", report.text);
        ChangeLogger::print_change_report(runner.session());
        for skipped in &report.skipped {
            log::warn!("⚠️ Skipped: {}", skipped);
        }
        report.statistics.print_summary();

        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>) -> TrackResult<()> {
        let config = ConfigManager::load()?;
        let validation = ConfigManager::validate_config(&config);
        if !validation.is_valid() {
            validation.print_summary();
        }
        validation.into_result()?;

        let manager = Arc::new(SessionManager::new(config.tracking.clone()));
        let mut server = ReviewServer::new(Arc::clone(&manager), config.server.clone());
        let port = server.start(port).await?;

        log::info!("🚀 Review API available at http://{}:{}/api/manuscripts", config.server.bind_address, port);
        log::info!("⏹️ Press Ctrl+C to stop the server");

        tokio::signal::ctrl_c().await?;
        log::info!("📊 {} manuscript sessions open at shutdown", manager.session_count());
        server.shutdown().await
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

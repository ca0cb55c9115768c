use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::report_status::ReportStatus;
use crate::errors::{ErrorHandler, ReporterResult};
use crate::logger::report_logger::ReportLogger;
use crate::services::email_renderer::EmailRenderer;
use crate::services::report_builder::ReportBuilder;
use crate::services::report_merger::ReportMerger;
use crate::services::search_response_loader::SearchResponseLoader;
use crate::structs::config::config::Config;
use crate::structs::report::Report;
use crate::structs::report_window::ReportWindow;

/// Inputs of the `report` command after CLI parsing.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub email_template: Option<PathBuf>,
    pub email_output: Option<PathBuf>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Runs one command. `Ok(false)` is a handled, non-fatal failure such as a declined report.
    pub fn run_command(&mut self, command: Commands) -> ReporterResult<bool> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Report { input, output, email_template, email_output, start_date, end_date, config } => {
                let request = ReportRequest { input, output, email_template, email_output, start_date, end_date };
                Self::load_config(config.as_deref()).and_then(|config| Self::report_command(&request, &config))
            }
            Commands::Combine { output_dir, config } => Self::resolve_output_dir(output_dir, config.as_deref())
                .and_then(|output_dir| Self::combine_command(&output_dir)),
            Commands::Init => Self::init_command(),
            Commands::Validate { config } => Self::validate_command(config.as_deref()),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        if let Err(e) = &result {
            ErrorHandler::handle_error(e);
        }

        result
    }

    fn load_config(path: Option<&Path>) -> ReporterResult<Config> {
        ConfigManager::load(path).inspect_err(|_| {
            log::error!("💡 Run 'compliance-reporter init' to create a configuration file.");
        })
    }

    pub fn report_command(request: &ReportRequest, config: &Config) -> ReporterResult<bool> {
        log::info!("🔍 Building compliance report from {}", request.input.display());

        let start_date = request.start_date.clone().or_else(|| config.report.start_date.clone());
        let end_date = request.end_date.clone().or_else(|| config.report.end_date.clone());
        ConfigManager::check_window(start_date.as_deref(), end_date.as_deref())?;

        let window = ReportWindow::current(start_date, end_date);

        let source = SearchResponseLoader::new(&request.input);
        let status = ReportBuilder::generate_report(&source, &request.output, window)?;

        match status {
            ReportStatus::Declined => {
                log::info!("📭 No issues found.");
                Ok(false)
            }
            ReportStatus::Generated { report, .. } => {
                ReportLogger::print_report_summary(&report);
                Self::render_email(request, config, &report);
                Ok(true)
            }
        }
    }

    /// Email problems are reported but never fail the report run.
    fn render_email(request: &ReportRequest, config: &Config, report: &Report) {
        if !config.notifications.enabled {
            log::info!("🔕 Notifications disabled; skipping email rendering");
            return;
        }

        let template = request
            .email_template
            .clone()
            .or_else(|| config.notifications.email_template.as_ref().map(PathBuf::from));

        let (Some(template), Some(email_output)) = (template, request.email_output.as_ref()) else {
            return;
        };

        if let Err(e) = EmailRenderer::write_email(&template, email_output, report) {
            log::error!("❌ Failed to prepare email content: {e}");
        }
    }

    /// An explicit directory wins and skips config loading entirely.
    fn resolve_output_dir(output_dir: Option<PathBuf>, config: Option<&Path>) -> ReporterResult<PathBuf> {
        match output_dir {
            Some(output_dir) => Ok(output_dir),
            None => Self::load_config(config).map(|config| PathBuf::from(config.output.output_dir)),
        }
    }

    pub fn combine_command(output_dir: &Path) -> ReporterResult<bool> {
        log::info!("🗂️ Combining shard reports in {}", output_dir.display());

        let summary = ReportMerger::combine_reports(output_dir)?;
        ReportLogger::print_merge_summary(&summary);

        Ok(true)
    }

    fn init_command() -> ReporterResult<bool> {
        log::info!("🚀 Initializing compliance-reporter configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to set the reporting window and template.", path.display());
        log::info!("🔧 Run 'compliance-reporter validate' to check your configuration.");

        Ok(true)
    }

    fn validate_command(path: Option<&Path>) -> ReporterResult<bool> {
        log::info!("🔍 Validating compliance-reporter configuration...");

        let config = Self::load_config(path)?;
        log::info!("✅ Configuration loaded successfully");

        let result = ConfigManager::validate_config(&config);
        result.print_summary();

        Ok(result.is_valid)
    }
}

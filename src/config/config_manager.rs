use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATE_FORMAT, END_DATE_ENV, START_DATE_ENV};
use crate::errors::{ReporterError, ReporterResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

const SAMPLE_CONFIG: &str = r#"# Compliance Reporter Configuration

[report]
# Reporting window in YYYY-MM-DD. Leave unset for the trailing 14 days.
# The START_DATE / END_DATE environment variables override these values.
# start_date = "2024-01-01"
# end_date = "2024-01-14"

[output]
# Directory holding per-issue-type shard reports (*_report_processed.json)
output_dir = "roles/files/output"

[notifications]
# Render the notification email after a successful report
enabled = true
# Template used when --email-template is not given
# email_template = "roles/templates/email_template.md"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default location when no path is given. A missing default file means
    /// defaults; a missing explicit file is an error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> ReporterResult<Config> {
        let config = match path {
            Some(explicit) => Self::read_config(explicit)?,
            None => match Self::default_config_path().filter(|candidate| candidate.exists()) {
                Some(default_path) => Self::read_config(&default_path)?,
                None => Config::default(),
            },
        };

        Ok(Self::apply_env_overrides(config, |name| env::var(name).ok()))
    }

    fn read_config(path: &Path) -> ReporterResult<Config> {
        let display = path.display().to_string();
        log::info!("📋 Loading config from: {display}");

        let content = fs::read_to_string(path).map_err(|e| ReporterError::config_file_error(&display, &e.to_string()))?;
        toml::from_str(&content).map_err(|e| ReporterError::config_file_error(&display, e.message()))
    }

    pub fn apply_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(start) = lookup(START_DATE_ENV).filter(|value| !value.is_empty()) {
            config.report.start_date = Some(start);
        }
        if let Some(end) = lookup(END_DATE_ENV).filter(|value| !value.is_empty()) {
            config.report.end_date = Some(end);
        }
        config
    }

    pub fn create_sample_config() -> ReporterResult<PathBuf> {
        let config_file_path = Self::default_config_path()
            .ok_or_else(|| ReporterError::config_error("Could not determine home directory", Some("Set HOME")))?;
        Self::write_sample_config(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn write_sample_config(config_file_path: &Path) -> ReporterResult<()> {
        let display = config_file_path.display().to_string();

        if config_file_path.exists() {
            return Err(ReporterError::config_error(
                &format!("Configuration already exists at {display}"),
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ReporterError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(config_file_path, SAMPLE_CONFIG).map_err(|e| ReporterError::file_error(&display, "write", &e.to_string()))?;

        log::info!("✅ Created sample config at: {display}");
        Ok(())
    }

    pub fn validate_config(config: &Config) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let start = Self::check_date("report.start_date", config.report.start_date.as_deref(), &mut errors);
        let end = Self::check_date("report.end_date", config.report.end_date.as_deref(), &mut errors);

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                errors.push(format!("report.start_date ({start}) is after report.end_date ({end})"));
            }
        }

        if config.output.output_dir.trim().is_empty() {
            errors.push("output.output_dir must not be empty".to_string());
        }

        if let Some(template) = &config.notifications.email_template {
            if !Path::new(template).exists() {
                warnings.push(format!("Email template does not exist: {template}"));
            }
        }

        ValidationResult::from_findings(errors, warnings)
    }

    /// Parses a `YYYY-MM-DD` date, naming `field` in the error.
    pub fn parse_date(field: &str, value: &str) -> ReporterResult<NaiveDate> {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ReporterError::validation_error(field, value, "YYYY-MM-DD"))
    }

    /// Checks an optional start/end pair: each must parse and start must not be after end.
    pub fn check_window(start: Option<&str>, end: Option<&str>) -> ReporterResult<()> {
        let start = start.map(|value| Self::parse_date("start_date", value)).transpose()?;
        let end = end.map(|value| Self::parse_date("end_date", value)).transpose()?;

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ReporterError::validation_error(
                    "start_date",
                    &start.to_string(),
                    &format!("a date on or before end_date ({end})"),
                ));
            }
        }
        Ok(())
    }

    fn check_date(field: &str, value: Option<&str>, errors: &mut Vec<String>) -> Option<NaiveDate> {
        match Self::parse_date(field, value?) {
            Ok(date) => Some(date),
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_file_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[report]\nstart_date = \"2024-02-01\"\n\n[output]\noutput_dir = \"out\"\n").unwrap();

        let config = ConfigManager::read_config(&path).unwrap();

        assert_eq!(config.report.start_date.as_deref(), Some("2024-02-01"));
        assert_eq!(config.output.output_dir, "out");
        assert!(config.notifications.enabled);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigManager::load(Some(&dir.path().join("nope.toml")));

        assert!(matches!(result, Err(ReporterError::ConfigurationFileError { .. })));
    }

    #[test]
    fn environment_overrides_config_dates() {
        let config = ConfigManager::apply_env_overrides(Config::default(), |name| match name {
            "START_DATE" => Some("2024-05-01".to_string()),
            "END_DATE" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.report.start_date.as_deref(), Some("2024-05-01"));
        assert_eq!(config.report.end_date, None);
    }

    #[test]
    fn validation_rejects_bad_and_inverted_dates() {
        let mut config = Config::default();
        config.report.start_date = Some("2024-05-10".to_string());
        config.report.end_date = Some("2024-05-01".to_string());
        assert!(!ConfigManager::validate_config(&config).is_valid);

        config.report.end_date = Some("May 20".to_string());
        let result = ConfigManager::validate_config(&config);
        assert_eq!(result.errors, vec!["Invalid value 'May 20' for 'report.end_date': expected YYYY-MM-DD"]);

        config.report.end_date = Some("2024-05-20".to_string());
        assert!(ConfigManager::validate_config(&config).is_valid);
    }

    #[test]
    fn sample_config_round_trips_and_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        let config = ConfigManager::load(Some(&path)).unwrap();
        assert!(ConfigManager::validate_config(&config).is_valid);

        assert!(ConfigManager::write_sample_config(&path).is_err());
    }

    #[test]
    fn window_check_rejects_free_text_and_inverted_ranges() {
        assert!(ConfigManager::check_window(Some("2024-01-01"), None).is_ok());
        assert!(ConfigManager::check_window(None, None).is_ok());

        let free_text = ConfigManager::check_window(Some("yesterday"), None);
        assert!(matches!(free_text, Err(ReporterError::ValidationError { ref value, .. }) if value == "yesterday"));

        let inverted = ConfigManager::check_window(Some("2024-02-01"), Some("2024-01-01"));
        assert!(matches!(inverted, Err(ReporterError::ValidationError { .. })));
    }
}

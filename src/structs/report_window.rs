use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use crate::config::constants::{DATE_FORMAT, DEFAULT_LOOKBACK_DAYS};

/// Reporting period plus the generation stamp, all formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    pub start_date: String,
    pub end_date: String,
    pub generated_at: String,
}

impl ReportWindow {
    /// Unset ends default to the trailing two weeks ending at `now`.
    pub fn resolve(start_date: Option<String>, end_date: Option<String>, now: DateTime<Local>) -> Self {
        let today = now.format(DATE_FORMAT).to_string();
        let start_date = start_date
            .unwrap_or_else(|| (now - Duration::days(DEFAULT_LOOKBACK_DAYS)).format(DATE_FORMAT).to_string());
        let end_date = end_date.unwrap_or_else(|| today.clone());

        Self {
            start_date,
            end_date,
            generated_at: today,
        }
    }

    pub fn current(start_date: Option<String>, end_date: Option<String>) -> Self {
        Self::resolve(start_date, end_date, Local::now())
    }
}

use serde::{Deserialize, Serialize};
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::report_config::ReportConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

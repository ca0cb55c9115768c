use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "ConfigHelper::default_render_email")]
    pub enabled: bool,

    #[serde(default)]
    pub email_template: Option<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_render_email(),
            email_template: None,
        }
    }
}

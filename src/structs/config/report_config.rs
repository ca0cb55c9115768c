use serde::{Deserialize, Serialize};

/// Reporting window overrides. Both ends fall back to the rolling default when unset.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,
}

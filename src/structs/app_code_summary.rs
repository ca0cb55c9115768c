use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::structs::severity_counts::SeverityCounts;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCodeSummary {
    pub app_code: String,
    pub issue_types: BTreeSet<String>,
    pub severity_counts: SeverityCounts,
}

impl AppCodeSummary {
    pub fn new(app_code: &str) -> Self {
        Self {
            app_code: app_code.to_string(),
            ..Self::default()
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighSeverityIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub severity: String,
    pub component: String,
    pub app_code: Option<String>,
    pub remediation_link: String,
}

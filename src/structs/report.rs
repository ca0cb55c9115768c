use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::app_code_summary::AppCodeSummary;
use crate::structs::compliance_verdict::ComplianceVerdict;
use crate::structs::custodian_entry::CustodianEntry;
use crate::structs::high_severity_issue::HighSeverityIssue;
use crate::structs::severity_counts::SeverityCounts;

/// The report document written for one issue-type shard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub severity_breakdown: SeverityCounts,
    pub issue_types: Vec<String>,
    pub compliance_details: BTreeMap<String, ComplianceVerdict>,
    pub raw_data: Vec<Value>,
    #[serde(default)]
    pub custodian: BTreeMap<String, CustodianEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: u64,
    pub high_severity_count: u64,
    pub app_codes: Vec<AppCodeSummary>,
    pub issue_types: Vec<String>,
    pub generated_at: String,
    pub start_date: String,
    pub end_date: String,
    pub high_severity_issues: Vec<HighSeverityIssue>,
    #[serde(default)]
    pub non_compliant_apps: Vec<NonCompliantApp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonCompliantApp {
    pub app_code: String,
    pub reasons: Vec<String>,
    pub severity_counts: SeverityCounts,
}

impl Report {
    pub fn app_code_names(&self) -> Vec<&str> {
        self.summary.app_codes.iter().map(|app| app.app_code.as_str()).collect()
    }
}

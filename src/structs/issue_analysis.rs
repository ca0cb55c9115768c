use std::collections::{BTreeMap, BTreeSet};
use crate::structs::app_code_summary::AppCodeSummary;
use crate::structs::custodian_entry::CustodianEntry;
use crate::structs::high_severity_issue::HighSeverityIssue;
use crate::structs::severity_counts::SeverityCounts;

/// Accumulator and result of the aggregation fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueAnalysis {
    pub severity_counts: SeverityCounts,
    pub app_codes: BTreeMap<String, AppCodeSummary>,
    pub issue_types: BTreeSet<String>,
    pub high_severity_issues: Vec<HighSeverityIssue>,
    pub custodians: BTreeMap<String, CustodianEntry>,
}

impl IssueAnalysis {
    pub const fn high_severity_count(&self) -> u64 {
        self.severity_counts.high_severity_count()
    }

    pub fn app_code_list(&self) -> Vec<AppCodeSummary> {
        self.app_codes.values().cloned().collect()
    }

    pub fn issue_type_list(&self) -> Vec<String> {
        self.issue_types.iter().cloned().collect()
    }
}

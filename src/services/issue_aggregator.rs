use crate::services::severity_normalizer::SeverityNormalizer;
use crate::structs::app_code_summary::AppCodeSummary;
use crate::structs::custodian_entry::CustodianEntry;
use crate::structs::high_severity_issue::HighSeverityIssue;
use crate::structs::issue_analysis::IssueAnalysis;
use crate::structs::issue_record::IssueRecord;
use crate::config::constants::UNKNOWN;

pub struct IssueAggregator;

impl IssueAggregator {
    pub fn aggregate(records: &[IssueRecord]) -> IssueAnalysis {
        records.iter().fold(IssueAnalysis::default(), Self::step)
    }

    /// Folds one record into the accumulator.
    ///
    /// Global counts and the high-severity list see every record. Per-app summaries and
    /// custodian attribution only see records with a non-empty app code.
    pub fn step(mut analysis: IssueAnalysis, record: &IssueRecord) -> IssueAnalysis {
        let severity = SeverityNormalizer::normalize_record(record);
        analysis.severity_counts.record(&severity);

        if let Some(app_code) = record.app_code() {
            let summary = analysis
                .app_codes
                .entry(app_code.to_string())
                .or_insert_with(|| AppCodeSummary::new(app_code));
            summary.severity_counts.record(&severity);

            if let Some(issue_type) = record.issue_type() {
                summary.issue_types.insert(issue_type.to_string());
                analysis.issue_types.insert(issue_type.to_string());
            }

            let custodian = analysis
                .custodians
                .entry(record.custodian_key())
                .or_insert_with(|| CustodianEntry::new(record.custodian_name(), record.custodian_email().is_some()));
            custodian.app_codes.insert(app_code.to_string());
            custodian.issues.push(record.raw.clone());
        }

        if severity.is_high_severity() {
            analysis.high_severity_issues.push(HighSeverityIssue {
                issue_type: record.issue_type.clone().unwrap_or_else(|| UNKNOWN.to_string()),
                severity: severity.label().to_uppercase(),
                component: record.component(),
                app_code: record.app_code.clone(),
                remediation_link: record.remediation().to_string(),
            });
        }

        analysis
    }
}

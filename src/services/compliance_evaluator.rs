use std::collections::BTreeMap;
use crate::config::constants::COMPLIANCE_THRESHOLDS;
use crate::structs::app_code_summary::AppCodeSummary;
use crate::structs::compliance_verdict::ComplianceVerdict;
use crate::structs::severity_counts::SeverityCounts;

pub struct ComplianceEvaluator;

impl ComplianceEvaluator {
    /// Checks thresholds in fixed order (critical, high, medium), one reason per violation.
    pub fn evaluate(counts: SeverityCounts) -> ComplianceVerdict {
        COMPLIANCE_THRESHOLDS
            .iter()
            .fold(ComplianceVerdict::new(counts), |mut verdict, &(severity, threshold)| {
                let count = counts.get(severity);
                if count > threshold {
                    verdict.record_violation(format!("Has {count} {severity} findings (threshold: {threshold})"));
                }
                verdict
            })
    }

    pub fn evaluate_all(app_codes: &BTreeMap<String, AppCodeSummary>) -> BTreeMap<String, ComplianceVerdict> {
        app_codes
            .iter()
            .map(|(app_code, summary)| (app_code.clone(), Self::evaluate(summary.severity_counts)))
            .collect()
    }
}

use std::fs;
use std::path::Path;
use serde::Serialize;
use crate::config::constants::RAW_SAMPLE_LIMIT;
use crate::enums::report_status::ReportStatus;
use crate::errors::{ReporterError, ReporterResult};
use crate::services::compliance_evaluator::ComplianceEvaluator;
use crate::services::issue_aggregator::IssueAggregator;
use crate::structs::report::{NonCompliantApp, Report, ReportSummary};
use crate::structs::report_window::ReportWindow;
use crate::structs::search_response::SearchResponse;
use crate::traits::issue_source::IssueSource;

pub struct ReportBuilder;

impl ReportBuilder {
    /// Assembles the report document. Returns `None` when the response reports zero issues.
    pub fn build(response: &SearchResponse, window: ReportWindow) -> Option<Report> {
        let total_issues = response.total_count();
        if total_issues == 0 {
            return None;
        }

        let analysis = IssueAggregator::aggregate(&response.records());
        let compliance_details = ComplianceEvaluator::evaluate_all(&analysis.app_codes);

        let non_compliant_apps = compliance_details
            .iter()
            .filter(|(_, verdict)| !verdict.is_compliant)
            .map(|(app_code, verdict)| NonCompliantApp {
                app_code: app_code.clone(),
                reasons: verdict.reasons.clone(),
                severity_counts: verdict.counts,
            })
            .collect();

        let issue_types = analysis.issue_type_list();

        Some(Report {
            summary: ReportSummary {
                total_issues,
                high_severity_count: analysis.high_severity_count(),
                app_codes: analysis.app_code_list(),
                issue_types: issue_types.clone(),
                generated_at: window.generated_at,
                start_date: window.start_date,
                end_date: window.end_date,
                high_severity_issues: analysis.high_severity_issues,
                non_compliant_apps,
            },
            severity_breakdown: analysis.severity_counts,
            issue_types,
            compliance_details,
            raw_data: response.raw_sample(RAW_SAMPLE_LIMIT),
            custodian: analysis.custodians,
        })
    }

    /// Loads, builds and writes a report. Empty input is declined without touching `output`.
    pub fn generate_report(source: &dyn IssueSource, output: &Path, window: ReportWindow) -> ReporterResult<ReportStatus> {
        let response = source.load()?;

        let Some(report) = Self::build(&response, window) else {
            log::info!("📭 No issues found in {}; no report written", source.describe());
            return Ok(ReportStatus::Declined);
        };

        Self::write_json(output, &report)?;
        log::info!("✅ Report generated and saved to {}", output.display());

        Ok(ReportStatus::Generated {
            output: output.to_path_buf(),
            report: Box::new(report),
        })
    }

    pub fn write_json<T: Serialize>(path: &Path, value: &T) -> ReporterResult<()> {
        let display = path.display().to_string();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ReporterError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content).map_err(|e| ReporterError::file_error(&display, "write", &e.to_string()))
    }
}

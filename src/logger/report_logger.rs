use crate::enums::severity::Severity;
use crate::structs::merge_summary::MergeSummary;
use crate::structs::report::Report;

pub struct ReportLogger;

impl ReportLogger {
    pub fn print_report_summary(report: &Report) {
        let summary = &report.summary;

        log::info!("📊 COMPLIANCE REPORT");
        log::info!("{}", "=".repeat(50));
        log::info!("📅 Period: {} → {} (generated {})", summary.start_date, summary.end_date, summary.generated_at);
        log::info!("📈 Total issues: {}", summary.total_issues);
        log::info!("🔥 High severity: {}", summary.high_severity_count);

        log::info!("⚡ By Severity:");
        for severity in Severity::ALL {
            log::info!("   {} {}: {}", severity.emoji(), severity, report.severity_breakdown.get(severity));
        }

        if !report.issue_types.is_empty() {
            log::info!("🏷️ Issue types: {}", report.issue_types.join(", "));
        }

        log::info!(
            "📦 {} app codes, {} non-compliant, {} custodians",
            summary.app_codes.len(),
            summary.non_compliant_apps.len(),
            report.custodian.len()
        );

        for app in &summary.non_compliant_apps {
            log::info!("   ❌ {}", app.app_code);
            for reason in &app.reasons {
                log::info!("      - {reason}");
            }
        }
    }

    pub fn print_merge_summary(summary: &MergeSummary) {
        log::info!("🗂️ Combined report written to {}", summary.output_path.display());
        if !summary.warnings.is_empty() {
            log::warn!("⚠️ {} shard reports were skipped", summary.warnings.len());
        }
    }
}

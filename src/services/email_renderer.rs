use std::fs;
use std::path::Path;
use crate::config::constants::{NOT_AVAILABLE, UNKNOWN};
use crate::errors::{ReporterError, ReporterResult};
use crate::structs::report::Report;

const HIGH_SEVERITY_LOOP: &str = "{% for issue in high_severity_issues %}\n| {{ issue.type }} | {{ issue.severity }} | {{ issue.component }} | {{ issue.app_code | default('N/A') }} | {{ issue.remediation_link | default('N/A') }} |\n{% endfor %}";
const HIGH_SEVERITY_START: &str = "{% for issue in high_severity_issues %}";
const LOOP_END: &str = "{% endfor %}";
const NO_HIGH_SEVERITY_TEXT: &str = "No high severity issues found.";

const NON_COMPLIANT_START: &str = "{% if non_compliant_apps %}";
const NON_COMPLIANT_END: &str = "{% endif %}";
const REASONS_LOOP: &str = "{% for reason in non_compliant_apps[0].reasons %}\n- {{ reason }}\n{% endfor %}";

/// Fills the notification template from a finished report.
///
/// Only the fixed placeholder set below is understood. This is plain substitution, not a
/// template language.
pub struct EmailRenderer;

impl EmailRenderer {
    pub fn render(template: &str, report: &Report) -> String {
        let summary = &report.summary;
        let counts = &report.severity_breakdown;

        let app_codes = if summary.app_codes.is_empty() {
            UNKNOWN.to_string()
        } else {
            report.app_code_names().join(", ")
        };

        let replacements = [
            ("{{ report_date }}", summary.generated_at.clone()),
            ("{{ app_code }}", app_codes),
            ("{{ total_issues }}", summary.total_issues.to_string()),
            ("{{ high_severity_count }}", summary.high_severity_count.to_string()),
            ("{{ start_date }}", summary.start_date.clone()),
            ("{{ end_date }}", summary.end_date.clone()),
            ("{{ issue_types }}", summary.issue_types.join(", ")),
            ("{{ critical_count }}", counts.critical.to_string()),
            ("{{ high_count }}", counts.high.to_string()),
            ("{{ medium_count }}", counts.medium.to_string()),
            ("{{ low_count }}", counts.low.to_string()),
            ("{{ info_count }}", counts.info.to_string()),
            ("{{ generated_at }}", summary.generated_at.clone()),
        ];

        let content = replacements
            .iter()
            .fold(template.to_string(), |content, (placeholder, value)| content.replace(placeholder, value));

        let content = Self::render_high_severity_table(content, report);
        Self::render_non_compliant_section(content, report)
    }

    pub fn render_file(template_path: &Path, report: &Report) -> ReporterResult<String> {
        let template = fs::read_to_string(template_path)
            .map_err(|e| ReporterError::template_error(&template_path.display().to_string(), &e.to_string()))?;
        Ok(Self::render(&template, report))
    }

    pub fn write_email(template_path: &Path, email_output: &Path, report: &Report) -> ReporterResult<()> {
        let content = Self::render_file(template_path, report)?;
        let display = email_output.display().to_string();

        if let Some(parent) = email_output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ReporterError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }
        fs::write(email_output, content).map_err(|e| ReporterError::file_error(&display, "write", &e.to_string()))?;

        log::info!("📧 Email content generated and saved to {display}");
        Ok(())
    }

    fn render_high_severity_table(content: String, report: &Report) -> String {
        let issues = &report.summary.high_severity_issues;

        if issues.is_empty() {
            return Self::replace_block(content, HIGH_SEVERITY_START, LOOP_END, NO_HIGH_SEVERITY_TEXT);
        }

        let rows = issues
            .iter()
            .map(|issue| {
                format!(
                    "| {} | {} | {} | {} | {} |",
                    issue.issue_type,
                    issue.severity,
                    issue.component,
                    issue.app_code.as_deref().unwrap_or(NOT_AVAILABLE),
                    issue.remediation_link
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        content.replace(HIGH_SEVERITY_LOOP, &rows)
    }

    /// Only the first non-compliant app's reasons and counts are rendered.
    fn render_non_compliant_section(content: String, report: &Report) -> String {
        let Some(first) = report.summary.non_compliant_apps.first() else {
            return Self::replace_block(content, NON_COMPLIANT_START, NON_COMPLIANT_END, "");
        };

        let reasons = first
            .reasons
            .iter()
            .map(|reason| format!("- {reason}"))
            .collect::<Vec<_>>()
            .join("\n");
        let counts = &first.severity_counts;

        content
            .replace(NON_COMPLIANT_START, "")
            .replace(NON_COMPLIANT_END, "")
            .replace(REASONS_LOOP, &reasons)
            .replace("{{ non_compliant_apps[0].severity_counts.critical }}", &counts.critical.to_string())
            .replace("{{ non_compliant_apps[0].severity_counts.high }}", &counts.high.to_string())
            .replace("{{ non_compliant_apps[0].severity_counts.medium }}", &counts.medium.to_string())
            .replace("{{ non_compliant_apps[0].severity_counts.low }}", &counts.low.to_string())
            .replace("{{ non_compliant_apps[0].severity_counts.info }}", &counts.info.to_string())
    }

    /// Replaces everything from the first `start` through the first `end` after it.
    fn replace_block(content: String, start: &str, end: &str, replacement: &str) -> String {
        let Some(start_pos) = content.find(start) else {
            return content;
        };
        let Some(end_pos) = content[start_pos..].find(end).map(|offset| start_pos + offset) else {
            return content;
        };

        format!("{}{}{}", &content[..start_pos], replacement, &content[end_pos + end.len()..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::report_builder::ReportBuilder;
    use crate::structs::report_window::ReportWindow;
    use crate::structs::search_response::SearchResponse;
    use serde_json::json;

    const TEMPLATE: &str = "Report {{ report_date }} for {{ app_code }} ({{ start_date }} to {{ end_date }})\n\
Total: {{ total_issues }}, high: {{ high_severity_count }}, critical: {{ critical_count }}\n\
{% for issue in high_severity_issues %}\n| {{ issue.type }} | {{ issue.severity }} | {{ issue.component }} | {{ issue.app_code | default('N/A') }} | {{ issue.remediation_link | default('N/A') }} |\n{% endfor %}\n\
{% if non_compliant_apps %}Non-compliant:\n{% for reason in non_compliant_apps[0].reasons %}\n- {{ reason }}\n{% endfor %}\nHigh: {{ non_compliant_apps[0].severity_counts.high }}{% endif %}\nEnd";

    fn report(hits: serde_json::Value) -> Report {
        let total = hits.as_array().map_or(0, Vec::len);
        let response: SearchResponse =
            serde_json::from_value(json!({"hits": {"hits": hits, "total": {"value": total}}})).unwrap();
        let window = ReportWindow {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-15".to_string(),
            generated_at: "2024-03-15".to_string(),
        };
        ReportBuilder::build(&response, window).unwrap()
    }

    #[test]
    fn renders_tables_and_non_compliant_section() {
        let report = report(json!([
            {"_source": {"appCode": "APP1", "issueType": "Vulnerability Scan", "affectedItemType": "package", "affectedItemName": "openssl", "remediationLink": "https://fix"}}
        ]));

        let rendered = EmailRenderer::render(TEMPLATE, &report);

        assert!(rendered.starts_with("Report 2024-03-15 for APP1 (2024-03-01 to 2024-03-15)"));
        assert!(rendered.contains("Total: 1, high: 1, critical: 0"));
        assert!(rendered.contains("| Vulnerability Scan | HIGH | package - openssl | APP1 | https://fix |"));
        assert!(rendered.contains("Non-compliant:\n- Has 1 high findings (threshold: 0)\nHigh: 1"));
        assert!(!rendered.contains("{%"));
    }

    #[test]
    fn empty_sections_are_collapsed() {
        let report = report(json!([
            {"_source": {"appCode": "APP2", "issueType": "Open Data"}}
        ]));

        let rendered = EmailRenderer::render(TEMPLATE, &report);

        assert!(rendered.contains("No high severity issues found."));
        assert!(!rendered.contains("Non-compliant:"));
        assert!(rendered.ends_with("\n\nEnd"));
    }
}

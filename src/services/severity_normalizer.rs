use crate::config::constants::NULL_SEVERITY_LITERAL;
use crate::enums::issue_type_rule::IssueTypeRule;
use crate::enums::normalized_severity::NormalizedSeverity;
use crate::enums::severity::Severity;
use crate::structs::issue_record::IssueRecord;

pub struct SeverityNormalizer;

impl SeverityNormalizer {
    /// Resolves a record's severity. A usable raw value is lower-cased and taken as-is; otherwise
    /// the issue type decides.
    pub fn normalize(raw_severity: Option<&str>, issue_type: Option<&str>) -> NormalizedSeverity {
        match raw_severity {
            Some(raw) if !raw.is_empty() && raw != NULL_SEVERITY_LITERAL => {
                NormalizedSeverity::from_label(raw.to_lowercase())
            }
            _ => NormalizedSeverity::Known(Self::classify_issue_type(issue_type.unwrap_or_default())),
        }
    }

    pub fn classify_issue_type(issue_type: &str) -> Severity {
        let issue_type = issue_type.to_lowercase();
        IssueTypeRule::first_match(&issue_type).map_or(IssueTypeRule::FALLBACK, IssueTypeRule::severity)
    }

    pub fn normalize_record(record: &IssueRecord) -> NormalizedSeverity {
        Self::normalize(record.severity.as_deref(), record.issue_type.as_deref())
    }
}

pub mod commands;
pub mod issue_type_rule;
pub mod normalized_severity;
pub mod report_status;
pub mod severity;

pub mod app_code_summary;
pub mod cli;
pub mod combined_report;
pub mod compliance_verdict;
pub mod config;
pub mod contact_info;
pub mod custodian_entry;
pub mod high_severity_issue;
pub mod issue_analysis;
pub mod issue_record;
pub mod merge_summary;
pub mod report;
pub mod report_window;
pub mod search_response;
pub mod severity_counts;
pub mod shard_report;
pub mod validation_result;

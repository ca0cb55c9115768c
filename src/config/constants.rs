use crate::enums::severity::Severity;

pub const DEFAULT_LOOKBACK_DAYS: i64 = 14;
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const RAW_SAMPLE_LIMIT: usize = 10;

pub const START_DATE_ENV: &str = "START_DATE";
pub const END_DATE_ENV: &str = "END_DATE";

pub const CONFIG_DIR_NAME: &str = "compliance-reporter";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_OUTPUT_DIR: &str = "roles/files/output";
pub const SHARD_REPORT_SUFFIX: &str = "_report_processed.json";
pub const COMBINED_REPORT_FILE: &str = "combined_report_processed.json";

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_EMAIL_KEY_PREFIX: &str = "no-email-";
pub const NULL_SEVERITY_LITERAL: &str = "null";

/// Zero tolerance on everything from medium up. Low and info never fail an app.
pub const COMPLIANCE_THRESHOLDS: [(Severity, u64); 3] = [
    (Severity::Critical, 0),
    (Severity::High, 0),
    (Severity::Medium, 0),
];

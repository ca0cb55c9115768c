use std::path::PathBuf;
use crate::structs::report::Report;

/// Result of a report generation run that did not hit an I/O or parse error.
#[derive(Debug)]
pub enum ReportStatus {
    Generated {
        output: PathBuf,
        report: Box<Report>,
    },
    /// Zero records in the input; nothing was written.
    Declined,
}

impl ReportStatus {
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

use serde::{Deserialize, Serialize};
use crate::enums::normalized_severity::NormalizedSeverity;
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    #[serde(default)]
    pub critical: u64,
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
    #[serde(default)]
    pub info: u64,
}

impl SeverityCounts {
    pub const fn get(&self, severity: Severity) -> u64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut u64 {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        }
    }

    /// Increments the matching bucket. Returns `false` for labels outside the taxonomy.
    pub fn record(&mut self, severity: &NormalizedSeverity) -> bool {
        match severity.canonical() {
            Some(known) => {
                *self.bucket_mut(known) += 1;
                true
            }
            None => false,
        }
    }

    pub const fn total(&self) -> u64 {
        self.critical + self.high + self.medium + self.low + self.info
    }

    pub const fn high_severity_count(&self) -> u64 {
        self.critical + self.high
    }
}

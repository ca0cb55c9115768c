use serde::{Deserialize, Serialize};
use crate::structs::severity_counts::SeverityCounts;

/// Pass/fail outcome for one app code. Serializes flat: the five counts, then the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    #[serde(flatten)]
    pub counts: SeverityCounts,
    pub is_compliant: bool,
    pub reasons: Vec<String>,
}

impl ComplianceVerdict {
    pub const fn new(counts: SeverityCounts) -> Self {
        Self {
            counts,
            is_compliant: true,
            reasons: Vec::new(),
        }
    }

    pub fn record_violation(&mut self, reason: String) {
        self.is_compliant = false;
        self.reasons.push(reason);
    }
}

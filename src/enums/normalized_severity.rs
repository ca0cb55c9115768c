use crate::enums::severity::Severity;

/// Outcome of severity normalization for a single record.
///
/// Upstream data occasionally carries labels outside the taxonomy. Those records are kept
/// (they still reach custodian and issue-type tracking) but never land in a count bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedSeverity {
    Known(Severity),
    Unrecognized(String),
}

impl NormalizedSeverity {
    pub fn from_label(label: String) -> Self {
        match Severity::from_label(&label) {
            Some(severity) => Self::Known(severity),
            None => Self::Unrecognized(label),
        }
    }

    pub const fn canonical(&self) -> Option<Severity> {
        match self {
            Self::Known(severity) => Some(*severity),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Known(severity) => severity.as_str(),
            Self::Unrecognized(label) => label,
        }
    }

    pub fn is_high_severity(&self) -> bool {
        self.canonical().is_some_and(Severity::is_high_severity)
    }
}

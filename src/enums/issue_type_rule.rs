use crate::enums::severity::Severity;

/// Fallback classification used when a record carries no usable severity.
///
/// Rules are evaluated in `ORDERED` sequence and the first substring hit wins. `AvTss` can never
/// fire because anything containing "av tss" already contains "tss"; it stays so the table keeps
/// matching the published policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueTypeRule {
    Vulnerability,
    Cryptography,
    Tss,
    AvTss,
    OpenData,
}

impl IssueTypeRule {
    pub const ORDERED: [Self; 5] = [
        Self::Vulnerability,
        Self::Cryptography,
        Self::Tss,
        Self::AvTss,
        Self::OpenData,
    ];

    pub const FALLBACK: Severity = Severity::Medium;

    pub const fn needle(self) -> &'static str {
        match self {
            Self::Vulnerability => "vulnerability",
            Self::Cryptography => "cryptography",
            Self::Tss => "tss",
            Self::AvTss => "av tss",
            Self::OpenData => "open data",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::Vulnerability | Self::Cryptography => Severity::High,
            Self::Tss | Self::AvTss => Severity::Medium,
            Self::OpenData => Severity::Low,
        }
    }

    /// `issue_type` must already be lower-cased.
    pub fn matches(self, issue_type: &str) -> bool {
        issue_type.contains(self.needle())
    }

    pub fn first_match(issue_type: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|rule| rule.matches(issue_type))
    }
}

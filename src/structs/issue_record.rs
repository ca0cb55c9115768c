use serde::Deserialize;
use serde_json::{Map, Value};
use crate::config::constants::{NOT_AVAILABLE, NO_EMAIL_KEY_PREFIX, UNKNOWN};
use crate::helpers::serde_helper::SerdeHelper;
use crate::structs::contact_info::ContactInfo;

/// Typed view over one `_source` document from the compliance index.
///
/// Every field is optional upstream and decoded leniently. The untouched document is kept in
/// `raw`, which is what custodian groupings carry into the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueRecord {
    #[serde(rename = "appCode", default, deserialize_with = "SerdeHelper::lenient_string")]
    pub app_code: Option<String>,

    #[serde(rename = "issueType", default, deserialize_with = "SerdeHelper::lenient_string")]
    pub issue_type: Option<String>,

    #[serde(default, deserialize_with = "SerdeHelper::lenient_string")]
    pub severity: Option<String>,

    #[serde(rename = "affectedItemType", default, deserialize_with = "SerdeHelper::lenient_string")]
    pub affected_item_type: Option<String>,

    #[serde(rename = "affectedItemName", default, deserialize_with = "SerdeHelper::lenient_string")]
    pub affected_item_name: Option<String>,

    #[serde(rename = "contact-info", default, deserialize_with = "SerdeHelper::lenient_object")]
    pub contact_info: Option<ContactInfo>,

    #[serde(default, deserialize_with = "SerdeHelper::lenient_string")]
    pub custodian_email: Option<String>,

    #[serde(rename = "remediationLink", default, deserialize_with = "SerdeHelper::lenient_string")]
    pub remediation_link: Option<String>,

    #[serde(default, deserialize_with = "SerdeHelper::lenient_string")]
    pub solution: Option<String>,

    #[serde(skip)]
    pub raw: Value,
}

impl Default for IssueRecord {
    fn default() -> Self {
        Self {
            app_code: None,
            issue_type: None,
            severity: None,
            affected_item_type: None,
            affected_item_name: None,
            contact_info: None,
            custodian_email: None,
            remediation_link: None,
            solution: None,
            raw: Value::Object(Map::new()),
        }
    }
}

impl IssueRecord {
    /// Decodes `source` and keeps it verbatim alongside the typed fields.
    pub fn from_source(source: Value) -> serde_json::Result<Self> {
        let mut record: Self = serde_json::from_value(source.clone())?;
        record.raw = source;
        Ok(record)
    }

    /// App code used for grouping; empty strings count as missing.
    pub fn app_code(&self) -> Option<&str> {
        self.app_code.as_deref().filter(|code| !code.is_empty())
    }

    pub fn issue_type(&self) -> Option<&str> {
        self.issue_type.as_deref().filter(|issue_type| !issue_type.is_empty())
    }

    /// `contact-info.app_custodian_email`, falling back to the legacy top-level field.
    pub fn custodian_email(&self) -> Option<&str> {
        self.contact_info
            .as_ref()
            .and_then(|contact| contact.app_custodian_email.as_deref())
            .filter(|email| !email.is_empty())
            .or_else(|| self.custodian_email.as_deref().filter(|email| !email.is_empty()))
    }

    pub fn custodian_name(&self) -> &str {
        self.contact_info
            .as_ref()
            .and_then(|contact| contact.app_custodian_name.as_deref())
            .unwrap_or(UNKNOWN)
    }

    pub fn custodian_key(&self) -> String {
        match self.custodian_email() {
            Some(email) => email.to_string(),
            None => format!("{NO_EMAIL_KEY_PREFIX}{}", self.custodian_name()),
        }
    }

    pub fn component(&self) -> String {
        format!(
            "{} - {}",
            self.affected_item_type.as_deref().unwrap_or(UNKNOWN),
            self.affected_item_name.as_deref().unwrap_or(UNKNOWN)
        )
    }

    pub fn remediation(&self) -> &str {
        self.remediation_link
            .as_deref()
            .or(self.solution.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> IssueRecord {
        IssueRecord::from_source(value).unwrap()
    }

    #[test]
    fn custodian_email_prefers_contact_info_then_legacy_field() {
        let with_contact = record(json!({
            "contact-info": {"app_custodian_name": "Dana", "app_custodian_email": "dana@corp.example"},
            "custodian_email": "legacy@corp.example"
        }));
        assert_eq!(with_contact.custodian_key(), "dana@corp.example");

        let legacy_only = record(json!({
            "contact-info": {"app_custodian_name": "Dana", "app_custodian_email": ""},
            "custodian_email": "legacy@corp.example"
        }));
        assert_eq!(legacy_only.custodian_key(), "legacy@corp.example");
    }

    #[test]
    fn custodian_key_without_email_uses_name_or_unknown() {
        let named = record(json!({"contact-info": {"app_custodian_name": "Dana"}}));
        assert_eq!(named.custodian_key(), "no-email-Dana");

        let anonymous = record(json!({"appCode": "APP1"}));
        assert_eq!(anonymous.custodian_key(), "no-email-Unknown");
    }

    #[test]
    fn tolerates_loosely_typed_fields() {
        let source = json!({
            "appCode": 4411,
            "severity": null,
            "contact-info": "n/a",
            "solution": ["x"],
            "issueName": "Expired certificate"
        });
        let loose = record(source.clone());

        assert_eq!(loose.app_code(), Some("4411"));
        assert_eq!(loose.severity, None);
        assert_eq!(loose.contact_info, None);
        assert_eq!(loose.solution, None);
        assert_eq!(loose.raw, source);
    }

    #[test]
    fn component_and_remediation_fall_back() {
        let sparse = record(json!({"affectedItemName": "libssl", "solution": "Upgrade"}));
        assert_eq!(sparse.component(), "Unknown - libssl");
        assert_eq!(sparse.remediation(), "Upgrade");

        let empty = IssueRecord::default();
        assert_eq!(empty.remediation(), "N/A");
        assert_eq!(empty.app_code(), None);
    }
}

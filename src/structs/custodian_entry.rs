use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything attributed to one custodian key. `issues` holds the source documents as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustodianEntry {
    pub app_codes: BTreeSet<String>,
    pub issues: Vec<Value>,
    pub custodian_name: String,
    pub has_email: bool,
}

impl CustodianEntry {
    pub fn new(custodian_name: &str, has_email: bool) -> Self {
        Self {
            app_codes: BTreeSet::new(),
            issues: Vec::new(),
            custodian_name: custodian_name.to_string(),
            has_email,
        }
    }
}

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::shard_report::ShardReport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    pub custodian: BTreeMap<String, Value>,
    pub summary: CombinedSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedSummary {
    pub app_codes: Vec<Value>,
}

impl CombinedReport {
    /// Folds one shard in. Later shards replace earlier custodian entries with the same key;
    /// app code summaries are appended as-is.
    #[must_use]
    pub fn absorb(mut self, shard: ShardReport) -> Self {
        if let Some(custodian) = shard.custodian.filter(|map| !map.is_empty()) {
            self.custodian.extend(custodian);
        }

        if let Some(app_codes) = shard
            .summary
            .and_then(|summary| summary.app_codes)
            .filter(|codes| !codes.is_empty())
        {
            self.summary.app_codes.extend(app_codes);
        }

        self
    }
}

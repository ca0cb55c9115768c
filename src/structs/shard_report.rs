use std::collections::BTreeMap;
use serde::Deserialize;
use serde_json::Value;

/// The parts of a previously written report the merger cares about. Custodian entries and app
/// code summaries are carried as raw JSON so shards from older report versions still merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShardReport {
    #[serde(default)]
    pub custodian: Option<BTreeMap<String, Value>>,

    #[serde(default)]
    pub summary: Option<ShardSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShardSummary {
    #[serde(default)]
    pub app_codes: Option<Vec<Value>>,
}

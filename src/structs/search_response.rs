use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::issue_record::IssueRecord;

/// The subset of a search `_search` response the reporter reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHits {
    /// Raw hit documents, kept verbatim for the `raw_data` sample.
    #[serde(default)]
    pub hits: Vec<Value>,

    #[serde(default)]
    pub total: HitTotal,
}

/// Newer index versions report `{"value": n}`, older ones a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HitTotal {
    Count(u64),
    Detailed {
        #[serde(default)]
        value: u64,
    },
}

impl Default for HitTotal {
    fn default() -> Self {
        Self::Detailed { value: 0 }
    }
}

impl HitTotal {
    pub const fn value(self) -> u64 {
        match self {
            Self::Count(value) | Self::Detailed { value } => value,
        }
    }
}

impl SearchResponse {
    pub const fn total_count(&self) -> u64 {
        self.hits.total.value()
    }

    /// Decodes each hit's `_source`. A hit without `_source` becomes an empty record; a hit whose
    /// `_source` is not an object is skipped with a warning. Each record keeps its `_source` verbatim.
    pub fn records(&self) -> Vec<IssueRecord> {
        self.hits.hits
            .iter()
            .enumerate()
            .filter_map(|(index, hit)| match hit.get("_source") {
                None | Some(Value::Null) => Some(IssueRecord::default()),
                Some(source) => match IssueRecord::from_source(source.clone()) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::warn!("⚠️ Skipping hit #{index}: unreadable _source ({e})");
                        None
                    }
                },
            })
            .collect()
    }

    pub fn raw_sample(&self, limit: usize) -> Vec<Value> {
        self.hits.hits.iter().take(limit).cloned().collect()
    }
}

use std::fs;
use std::path::PathBuf;
use crate::errors::{ReporterError, ReporterResult};
use crate::structs::search_response::SearchResponse;
use crate::traits::issue_source::IssueSource;

/// Reads a search response that the fetch step saved to disk.
pub struct SearchResponseLoader {
    path: PathBuf,
}

impl SearchResponseLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IssueSource for SearchResponseLoader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> ReporterResult<SearchResponse> {
        let path = self.path.display().to_string();
        let content = fs::read_to_string(&self.path)
            .map_err(|e| ReporterError::file_error(&path, "read", &e.to_string()))?;

        let response: SearchResponse = serde_json::from_str(&content)
            .map_err(|e| ReporterError::parse_error("JSON", Some(e.line()), &e.to_string(), Some(&path)))?;

        log::info!(
            "📥 Loaded {} hits (total reported: {}) from {}",
            response.hits.hits.len(),
            response.total_count(),
            path
        );

        Ok(response)
    }
}

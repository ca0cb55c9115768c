use crate::errors::ReporterResult;
use crate::structs::search_response::SearchResponse;

/// Where issue records come from. The reporter only needs the search response; how it was
/// fetched is not its concern.
pub trait IssueSource {
    fn describe(&self) -> String;

    fn load(&self) -> ReporterResult<SearchResponse>;
}

impl IssueSource for SearchResponse {
    fn describe(&self) -> String {
        "in-memory search response".to_string()
    }

    fn load(&self) -> ReporterResult<SearchResponse> {
        Ok(self.clone())
    }
}

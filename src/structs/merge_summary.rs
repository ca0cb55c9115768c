use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct MergeSummary {
    pub output_path: PathBuf,
    pub reports_processed: usize,
    pub custodian_count: usize,
    pub app_code_count: usize,
    pub warnings: Vec<String>,
}

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
#[cfg(feature = "parallel-processing")]
use rayon::prelude::*;
use crate::config::constants::{COMBINED_REPORT_FILE, SHARD_REPORT_SUFFIX};
use crate::errors::{ReporterError, ReporterResult};
use crate::services::report_builder::ReportBuilder;
use crate::structs::combined_report::CombinedReport;
use crate::structs::merge_summary::MergeSummary;
use crate::structs::shard_report::ShardReport;

pub struct ReportMerger;

impl ReportMerger {
    /// Merges every shard report in `output_dir` into `combined_report_processed.json`.
    ///
    /// Unreadable shards are skipped with a warning. The combined file is written even when no
    /// shard was found, so downstream steps always have something to read.
    pub fn combine_reports(output_dir: &Path) -> ReporterResult<MergeSummary> {
        let shard_paths = Self::find_shard_files(output_dir)?;
        log::info!("🔍 Found {} shard reports in {}", shard_paths.len(), output_dir.display());

        let mut warnings = Vec::new();
        let mut reports_processed = 0;
        let mut combined = CombinedReport::default();

        // Parsing may run in any order; folding must follow the sorted file order.
        for (path, parsed) in Self::parse_shards(&shard_paths) {
            match parsed {
                Ok(shard) => {
                    reports_processed += 1;
                    combined = combined.absorb(shard);
                }
                Err(e) => {
                    let warning = format!("Could not process {}: {e:#}", path.display());
                    log::warn!("⚠️ Warning: {warning}");
                    warnings.push(warning);
                }
            }
        }

        let output_path = output_dir.join(COMBINED_REPORT_FILE);
        ReportBuilder::write_json(&output_path, &combined)?;

        let summary = MergeSummary {
            output_path,
            reports_processed,
            custodian_count: combined.custodian.len(),
            app_code_count: combined.summary.app_codes.len(),
            warnings,
        };

        log::info!("✅ Combined {} reports successfully", summary.reports_processed);
        log::info!("👥 Total custodians: {}", summary.custodian_count);
        log::info!("📦 Total app codes: {}", summary.app_code_count);

        Ok(summary)
    }

    /// Shard files in `dir`, sorted by file name. The combined output itself is never a shard.
    /// A missing directory is created and yields no shards.
    pub fn find_shard_files(dir: &Path) -> ReporterResult<Vec<PathBuf>> {
        let display = dir.display().to_string();

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| ReporterError::file_error(&display, "create directory", &e.to_string()))?;
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|e| ReporterError::file_error(&display, "list directory", &e.to_string()))?;

        let mut shards: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(SHARD_REPORT_SUFFIX) && name != COMBINED_REPORT_FILE)
            })
            .collect();

        shards.sort();
        Ok(shards)
    }

    pub fn parse_shard(path: &Path) -> anyhow::Result<ShardReport> {
        let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    #[cfg(feature = "parallel-processing")]
    fn parse_shards(paths: &[PathBuf]) -> Vec<(PathBuf, anyhow::Result<ShardReport>)> {
        paths
            .par_iter()
            .map(|path| (path.clone(), Self::parse_shard(path)))
            .collect()
    }

    #[cfg(not(feature = "parallel-processing"))]
    fn parse_shards(paths: &[PathBuf]) -> Vec<(PathBuf, anyhow::Result<ShardReport>)> {
        paths
            .iter()
            .map(|path| (path.clone(), Self::parse_shard(path)))
            .collect()
    }
}

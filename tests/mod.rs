use std::fs;
use std::path::{Path, PathBuf};
use compliance_reporter::enums::report_status::ReportStatus;
use compliance_reporter::services::report_builder::ReportBuilder;
use compliance_reporter::services::report_merger::ReportMerger;
use compliance_reporter::services::search_response_loader::SearchResponseLoader;
use compliance_reporter::structs::report_window::ReportWindow;
use serde_json::{json, Value};
use tempfile::TempDir;

struct TestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn write_json(&self, name: &str, value: &Value) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, serde_json::to_string_pretty(value).expect("serialize")).expect("write json");
        path
    }

    fn generate(&self, input: &Path, output: &Path) -> ReportStatus {
        ReportBuilder::generate_report(&SearchResponseLoader::new(input), output, window()).expect("generate report")
    }
}

fn window() -> ReportWindow {
    ReportWindow {
        start_date: "2024-03-01".to_string(),
        end_date: "2024-03-15".to_string(),
        generated_at: "2024-03-15".to_string(),
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read output")).expect("valid json")
}

fn hits(sources: &[Value]) -> Value {
    let hits: Vec<Value> = sources.iter().map(|source| json!({"_source": source})).collect();
    json!({"hits": {"hits": hits, "total": {"value": sources.len()}}})
}

#[test]
fn vulnerability_finding_makes_app_non_compliant() {
    let env = TestEnv::new();
    let source = json!({
        "appCode": "APP1",
        "issueType": "Vulnerability Scan",
        "severity": null,
        "affectedItemType": "package",
        "affectedItemName": "openssl",
        "contact-info": {"app_custodian_name": "Ada", "app_custodian_email": "ada@x.com"},
        "scanId": 991
    });
    let input = env.write_json("input.json", &hits(&[source.clone()]));
    let output = env.path("output/vuln_report_processed.json");

    assert!(env.generate(&input, &output).is_generated());
    let report = read_json(&output);

    assert_eq!(report["summary"]["total_issues"], 1);
    assert_eq!(report["summary"]["high_severity_count"], 1);
    assert_eq!(report["severity_breakdown"]["high"], 1);
    assert_eq!(report["compliance_details"]["APP1"]["is_compliant"], false);
    assert_eq!(report["compliance_details"]["APP1"]["reasons"], json!(["Has 1 high findings (threshold: 0)"]));
    assert_eq!(report["summary"]["high_severity_issues"][0]["component"], "package - openssl");
    assert_eq!(report["custodian"]["ada@x.com"]["custodian_name"], "Ada");
    assert_eq!(report["custodian"]["ada@x.com"]["issues"], json!([source]));
}

#[test]
fn report_document_has_expected_sections() {
    let env = TestEnv::new();
    let input = env.write_json("input.json", &hits(&[json!({"appCode": "APP2", "issueType": "Open Data"})]));
    let output = env.path("report.json");

    env.generate(&input, &output);
    let report = read_json(&output);

    let mut keys: Vec<&str> = report.as_object().expect("object").keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["compliance_details", "custodian", "issue_types", "raw_data", "severity_breakdown", "summary"]);
    assert_eq!(report["summary"]["start_date"], "2024-03-01");
    assert_eq!(report["compliance_details"]["APP2"]["is_compliant"], true);
    assert_eq!(report["raw_data"].as_array().map(Vec::len), Some(1));
}

#[test]
fn empty_input_is_declined_and_writes_nothing() {
    let env = TestEnv::new();
    let input = env.write_json("input.json", &json!({"hits": {"hits": [], "total": {"value": 0}}}));
    let output = env.path("output/empty_report_processed.json");

    assert!(!env.generate(&input, &output).is_generated());
    assert!(!output.exists());
}

#[test]
fn missing_input_is_an_error() {
    let env = TestEnv::new();
    let result = ReportBuilder::generate_report(
        &SearchResponseLoader::new(env.path("absent.json")),
        &env.path("out.json"),
        window(),
    );

    assert!(result.is_err());
}

#[test]
fn later_shard_wins_custodian_collision() {
    let env = TestEnv::new();
    env.write_json("output/a_report_processed.json", &json!({
        "custodian": {"a@x.com": {"custodian_name": "First"}},
        "summary": {"app_codes": [{"app_code": "APP1"}]}
    }));
    env.write_json("output/b_report_processed.json", &json!({
        "custodian": {"a@x.com": {"custodian_name": "Second"}, "b@x.com": {"custodian_name": "Bea"}},
        "summary": {"app_codes": [{"app_code": "APP2"}]}
    }));

    let summary = ReportMerger::combine_reports(&env.path("output")).expect("combine");
    let combined = read_json(&summary.output_path);

    assert_eq!(combined["custodian"]["a@x.com"]["custodian_name"], "Second");
    assert_eq!(summary.custodian_count, 2);
    assert_eq!(combined["summary"]["app_codes"], json!([{"app_code": "APP1"}, {"app_code": "APP2"}]));
}

#[test]
fn merging_twice_is_byte_identical() {
    let env = TestEnv::new();
    env.write_json("output/a_report_processed.json", &json!({"summary": {"app_codes": [{"app_code": "APP1"}]}}));

    let first = ReportMerger::combine_reports(&env.path("output")).expect("first combine");
    let first_bytes = fs::read(&first.output_path).expect("read first");
    let second = ReportMerger::combine_reports(&env.path("output")).expect("second combine");

    assert_eq!(fs::read(&second.output_path).expect("read second"), first_bytes);
}

#[test]
fn generated_reports_merge_into_combined_report() {
    let env = TestEnv::new();
    let vuln = env.write_json("vuln.json", &hits(&[json!({
        "appCode": "APP1",
        "issueType": "Vulnerability Scan",
        "contact-info": {"app_custodian_name": "Ada", "app_custodian_email": "ada@x.com"}
    })]));
    let open_data = env.write_json("open_data.json", &hits(&[json!({
        "appCode": "APP2",
        "issueType": "Open Data",
        "contact-info": {"app_custodian_name": "Bo"}
    })]));

    env.generate(&vuln, &env.path("output/vulnerability_report_processed.json"));
    env.generate(&open_data, &env.path("output/open_data_report_processed.json"));

    let summary = ReportMerger::combine_reports(&env.path("output")).expect("combine");
    let combined = read_json(&summary.output_path);

    assert_eq!(summary.reports_processed, 2);
    assert!(summary.warnings.is_empty());
    assert!(combined["custodian"].get("ada@x.com").is_some());
    assert!(combined["custodian"].get("no-email-Bo").is_some());

    let app_codes: Vec<&str> = combined["summary"]["app_codes"]
        .as_array()
        .expect("app codes")
        .iter()
        .filter_map(|app| app["app_code"].as_str())
        .collect();
    assert_eq!(app_codes, vec!["APP2", "APP1"]);
}

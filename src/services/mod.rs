pub mod compliance_evaluator;
pub mod email_renderer;
pub mod issue_aggregator;
pub mod report_builder;
pub mod report_merger;
pub mod search_response_loader;
pub mod severity_normalizer;

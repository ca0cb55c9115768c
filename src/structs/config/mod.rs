#[allow(clippy::module_inception)]
pub mod config;
pub mod notification_config;
pub mod output_config;
pub mod report_config;

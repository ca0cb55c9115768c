pub mod issue_source;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum ReporterError {
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Input documents and report serialization
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Date overrides coming from flags, environment or config
    #[error("Invalid value '{value}' for '{field}': expected {constraint}")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    #[error("Template error for '{template}': {reason}")]
    TemplateError {
        template: String,
        reason: String,
    },
}

impl ReporterError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn template_error(template: &str, reason: &str) -> Self {
        Self::TemplateError {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Errors the user can fix by correcting input and rerunning.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } | Self::ParseError { .. } | Self::TemplateError { .. }
        )
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileOperationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::TemplateError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            Self::ConfigurationError { suggestion, .. } => suggestion.clone(),
            Self::ConfigurationFileError { .. } => Some("Check file permissions and TOML syntax".to_string()),
            Self::FileOperationError { .. } => Some("Check file permissions and path".to_string()),
            Self::ParseError { line_number: Some(line), .. } => Some(format!("Check the input near line {line}")),
            Self::ParseError { .. } => Some("Check the format of the input".to_string()),
            Self::ValidationError { field, constraint, .. } => Some(format!("Use {constraint} for {field}")),
            Self::TemplateError { .. } => None,
        }
    }

    pub fn user_message(&self) -> String {
        let context = match self {
            Self::ParseError { context: Some(context), .. } => format!(" ({context})"),
            _ => String::new(),
        };

        match self.hint() {
            Some(hint) => format!("{self}{context}\n💡 {hint}"),
            None => format!("{self}{context}"),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

pub type ReporterResult<T> = Result<T, ReporterError>;

pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReporterError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());
        log::error!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            log::info!("🔄 Fix the input and rerun");
        }
    }
}

/// Serialization failures while writing a report document.
impl From<serde_json::Error> for ReporterError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: (error.line() > 0).then(|| error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

use std::fmt;
use std::error::Error as StdError;
use crate::enums::api_error::ApiError;

#[derive(Debug, Clone)]
pub enum RevostayError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Session store errors
    SessionError {
        operation: String,
        reason: String,
    },
    NotAuthorized {
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // Multiple errors (for validation)
    MultipleErrors {
        errors: Vec<RevostayError>,
        context: String,
    },
}

impl RevostayError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn session_error(operation: &str, reason: &str) -> Self {
        Self::SessionError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_authorized(reason: &str) -> Self {
        Self::NotAuthorized {
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::UserInputError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::NotAuthorized { .. } => true,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().any(|e| e.is_recoverable()),
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::SessionError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::NotAuthorized { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" ({})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::SessionError { operation, reason } => {
                format!("Session store error during {}: {}\n💡 Check permissions of the session file", operation, reason)
            }
            Self::NotAuthorized { reason } => {
                format!("Not logged in: {}\n💡 Run 'revostay login' with your RevoStay credentials", reason)
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Failed to parse {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for RevostayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for RevostayError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for revostay operations
pub type RevostayResult<T> = Result<T, RevostayError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &RevostayError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for RevostayError {
    fn from(error: std::io::Error) -> Self {
        RevostayError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RevostayError {
    fn from(error: serde_json::Error) -> Self {
        RevostayError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl RevostayError {
    /// TOML parse failure, with the 1-based line located from the error span.
    pub fn toml_error(error: &toml::de::Error, source: &str) -> Self {
        let line_number = error.span().map(|span| {
            let end = span.start.min(source.len());
            source.as_bytes()[..end].iter().filter(|byte| **byte == b'\n').count() + 1
        });

        RevostayError::ParseError {
            content_type: "TOML".to_string(),
            line_number,
            reason: error.message().to_string(),
        }
    }

    /// A failed backend call, tagged with the endpoint it was sent to.
    pub fn api_error(operation: &str, url: &str, error: &ApiError) -> Self {
        let status_code = match error {
            ApiError::Forbidden => Some(403),
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        };

        RevostayError::NetworkError {
            operation: operation.to_string(),
            url: Some(url.to_string()),
            status_code,
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for RevostayError {
    fn from(error: reqwest::Error) -> Self {
        RevostayError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

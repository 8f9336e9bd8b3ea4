use thiserror::Error;

/// Failures of a call to the RevoStay backend, classified the way the
/// console reacts to them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 403: the session is invalid or expired.
    #[error("permission denied by server")]
    Forbidden,

    #[error("server rejected the request with HTTP {status}")]
    Rejected { status: u16, message: Option<String> },

    /// No response was received at all.
    #[error("failed to connect to server: {0}")]
    Connection(String),

    /// Transport succeeded but the body was empty or falsy.
    #[error("server returned an empty response body")]
    EmptyBody,

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Text shown to the user, falling back to `generic` where the server
    /// gave no message.
    pub fn notification_message(&self, generic: &str) -> String {
        match self {
            Self::Forbidden => "Session expired. Please login again.".to_string(),
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Connection(_) => "Failed to connect to server".to_string(),
            Self::Rejected { .. } | Self::EmptyBody | Self::Decode(_) => generic.to_string(),
        }
    }
}

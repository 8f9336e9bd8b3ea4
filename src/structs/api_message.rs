use serde::Deserialize;

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

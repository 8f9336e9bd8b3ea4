use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SessionConfig {
    /// Session file location; `~/revostay/session.json` when unset.
    #[serde(default)]
    pub path: Option<String>,
}

use serde::{Deserialize, Serialize};
use crate::enums::role::Role;

/// Client-held credentials identifying the current user.
///
/// Every field is optional because the store can be empty or only partly
/// written by an older client; gating treats any gap as "not logged in".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Session {
    pub fn new(token: String, role: Role, username: String, full_name: Option<String>) -> Self {
        Self {
            token: Some(token),
            username: Some(username),
            role: Some(role),
            full_name,
        }
    }

    /// The bearer token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.trim().is_empty())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.username.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.username.is_none() && self.role.is_none() && self.full_name.is_none()
    }
}

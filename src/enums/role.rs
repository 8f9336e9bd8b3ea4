use std::fmt;
use serde::{Deserialize, Serialize};

/// Platform role stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
    Unrecognized(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "ADMIN",
            Self::Seller => "SELLER",
            Self::Buyer => "BUYER",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

/// Exact match only; `"seller"` is not `SELLER`.
impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "ADMIN" => Self::Admin,
            "SELLER" => Self::Seller,
            "BUYER" => Self::Buyer,
            _ => Self::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use std::fmt;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a property-visit booking as reported by the backend.
///
/// Unknown strings are kept verbatim in `Unrecognized` so that a new backend
/// status never breaks decoding of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rejected,
    Cancelled,
    Unrecognized(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "REJECTED" => Self::Rejected,
            "CANCELLED" => Self::Cancelled,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

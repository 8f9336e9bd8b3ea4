use std::fmt;
use crate::enums::role::Role;

/// Reason a session did not pass a role gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDenial {
    MissingToken,
    RoleMismatch { required: Role, actual: Option<Role> },
}

impl fmt::Display for GateDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "no session token"),
            Self::RoleMismatch { required, actual: Some(actual) } => {
                write!(f, "role {} cannot open a {} view", actual, required)
            }
            Self::RoleMismatch { required, actual: None } => {
                write!(f, "no role in session, {} required", required)
            }
        }
    }
}

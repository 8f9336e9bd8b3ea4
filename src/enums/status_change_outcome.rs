use crate::enums::api_error::ApiError;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum StatusChangeOutcome {
    /// The write succeeded with the given response body; the collection must
    /// be re-fetched.
    Applied(Value),
    /// The write failed and nothing changed; the seller may retry.
    Failed(ApiError),
    /// The session was rejected and the view must redirect to login.
    Redirected,
}

impl StatusChangeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

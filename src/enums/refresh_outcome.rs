use crate::enums::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A fresh collection replaced the rendered one.
    Updated { count: usize },
    /// The fetch failed; the previously rendered collection is still shown.
    Kept(ApiError),
    Redirected,
}

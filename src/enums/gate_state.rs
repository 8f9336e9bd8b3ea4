/// Verification state of a role-gated view.
///
/// `RedirectToLogin` is terminal: once reached the view stops polling and
/// renders nothing but the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unverified,
    Verified,
    RedirectToLogin,
}

impl GateState {
    pub fn is_verified(self) -> bool {
        self == Self::Verified
    }

    pub fn is_redirect(self) -> bool {
        self == Self::RedirectToLogin
    }
}

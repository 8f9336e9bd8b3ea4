use std::sync::Arc;
use crate::enums::gate_state::GateState;
use crate::enums::role::Role;
use crate::services::session_gate::SessionGate;
use crate::services::session_store::SessionStore;

/// Role-gated landing page: the seller dashboard or the admin dashboard.
pub struct DashboardPage {
    session: Arc<SessionStore>,
    role: Role,
    state: GateState,
}

impl DashboardPage {
    pub fn seller(session: Arc<SessionStore>) -> Self {
        Self::new(session, Role::Seller)
    }

    pub fn admin(session: Arc<SessionStore>) -> Self {
        Self::new(session, Role::Admin)
    }

    fn new(session: Arc<SessionStore>, role: Role) -> Self {
        Self { session, role, state: GateState::Unverified }
    }

    pub fn activate(&mut self) -> GateState {
        if self.state == GateState::Unverified {
            self.state = SessionGate::verify(&self.session.get(), &self.role);
        }
        self.state
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// `None` unless the gate passed; a redirected page renders nothing.
    pub fn render(&self) -> Option<String> {
        if !self.state.is_verified() {
            return None;
        }

        let name = self.session.display_name().unwrap_or_default();
        let (brand, title, body) = match self.role {
            Role::Admin => (
                "RevoStay Admin",
                "Admin Dashboard",
                "Review listings, sellers and buyers across the platform.",
            ),
            _ => (
                "RevoStay",
                "Seller Dashboard",
                "Your seller dashboard is ready. Here you can list new properties, manage existing listings, and view inquiries from potential buyers.",
            ),
        };

        Some(format!(
            "{brand}  |  Welcome, {name}\n{rule}\n{title}\n{body}\n",
            brand = brand,
            name = name,
            rule = "━".repeat(40),
            title = title,
            body = body,
        ))
    }
}

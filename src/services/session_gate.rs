use crate::enums::gate_denial::GateDenial;
use crate::enums::gate_state::GateState;
use crate::enums::role::Role;
use crate::structs::session::Session;

pub struct SessionGate;

impl SessionGate {

    /// A view requiring `required` opens only with a token and that exact role.
    pub fn check(session: &Session, required: &Role) -> Result<(), GateDenial> {
        if session.token().is_none() {
            return Err(GateDenial::MissingToken);
        }

        match &session.role {
            Some(role) if role == required => Ok(()),
            actual => Err(GateDenial::RoleMismatch {
                required: required.clone(),
                actual: actual.clone(),
            }),
        }
    }

    pub fn verify(session: &Session, required: &Role) -> GateState {
        match Self::check(session, required) {
            Ok(()) => GateState::Verified,
            Err(denial) => {
                log::warn!("🔒 Redirecting to login: {}", denial);
                GateState::RedirectToLogin
            }
        }
    }
}

use std::sync::Arc;
use crate::enums::api_error::ApiError;
use crate::enums::gate_denial::GateDenial;
use crate::enums::role::Role;
use crate::enums::status_change_outcome::StatusChangeOutcome;
use crate::enums::status_decision::StatusDecision;
use crate::services::session_gate::SessionGate;
use crate::services::session_store::SessionStore;
use crate::structs::notification::Notification;
use crate::traits::booking_api::BookingApi;
use crate::traits::notifier::Notifier;

const UPDATE_FAILED: &str = "Failed to update booking status";

/// Sends a seller's confirm/reject decision for one booking.
///
/// The controller never touches the displayed collection; callers re-fetch
/// after an `Applied` outcome.
pub struct BookingStatusController {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl BookingStatusController {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, session, notifier }
    }

    pub async fn set_status(&self, booking_id: u64, decision: StatusDecision) -> StatusChangeOutcome {
        let session = self.session.get();

        let token = match SessionGate::check(&session, &Role::Seller) {
            Ok(()) => session.token().unwrap_or_default().to_string(),
            Err(denial) => {
                if let GateDenial::RoleMismatch { .. } = denial {
                    self.notifier.notify(Notification::error("Only sellers can update booking status"));
                }
                log::warn!("🔒 Status change for booking {} refused: {}", booking_id, denial);
                return StatusChangeOutcome::Redirected;
            }
        };

        let target = decision.target_status();
        log::info!("📝 Updating booking {} to {}", booking_id, target);

        match self.api.update_booking_status(&token, booking_id, &target).await {
            Ok(body) => {
                self.notifier.notify(Notification::success(format!("Booking {} successfully", decision.past_tense())));
                StatusChangeOutcome::Applied(body)
            }
            Err(ApiError::Forbidden) => {
                self.expire_session();
                StatusChangeOutcome::Redirected
            }
            Err(error) => {
                log::error!("❌ Failed to update booking {}: {}", booking_id, error);
                self.notifier.notify(Notification::error(error.notification_message(UPDATE_FAILED)));
                StatusChangeOutcome::Failed(error)
            }
        }
    }

    fn expire_session(&self) {
        if let Err(e) = self.session.expire() {
            log::error!("❌ Could not clear expired session: {}", e);
        }
        self.notifier.notify(Notification::error(ApiError::Forbidden.notification_message(UPDATE_FAILED)));
    }
}

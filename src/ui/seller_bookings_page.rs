use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use crate::config::constants::DEFAULT_POLL_INTERVAL_SECS;
use crate::enums::api_error::ApiError;
use crate::enums::gate_denial::GateDenial;
use crate::enums::gate_state::GateState;
use crate::enums::page_action::PageAction;
use crate::enums::refresh_outcome::RefreshOutcome;
use crate::enums::role::Role;
use crate::enums::status_change_outcome::StatusChangeOutcome;
use crate::enums::status_decision::StatusDecision;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::booking_status_controller::BookingStatusController;
use crate::services::session_gate::SessionGate;
use crate::services::session_store::SessionStore;
use crate::structs::booking::Booking;
use crate::structs::notification::Notification;
use crate::traits::booking_api::BookingApi;
use crate::traits::notifier::Notifier;
use crate::ui::booking_renderer::BookingRenderer;

const FETCH_FAILED: &str = "Failed to fetch bookings";

/// The seller's booking requests view.
///
/// Holds the collection from the last successful fetch and nothing else;
/// status changes are never applied locally, the view re-fetches instead.
pub struct SellerBookingsPage {
    api: Arc<dyn BookingApi>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    controller: BookingStatusController,
    bookings: Vec<Booking>,
    state: GateState,
    loading: bool,
    poll_interval: Duration,
    interactive: bool,
}

impl SellerBookingsPage {
    pub fn new(api: Arc<dyn BookingApi>, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        let controller = BookingStatusController::new(Arc::clone(&api), Arc::clone(&session), Arc::clone(&notifier));
        Self {
            api,
            session,
            notifier,
            controller,
            bookings: Vec::new(),
            state: GateState::Unverified,
            loading: false,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            interactive: false,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Show a spinner while loading and print the page after each change.
    pub fn with_terminal_output(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn render(&self, renderer: &BookingRenderer) -> String {
        if self.state.is_redirect() {
            return "Redirecting to login...\n".to_string();
        }
        renderer.render_page(&self.bookings, self.loading)
    }

    /// Gates on the seller role and performs the initial fetch. A failed gate
    /// issues no request at all.
    pub async fn activate(&mut self) -> GateState {
        if self.state != GateState::Unverified {
            return self.state;
        }

        self.state = SessionGate::verify(&self.session.get(), &Role::Seller);
        if self.state.is_redirect() {
            return self.state;
        }

        self.loading = true;
        let spinner = self.interactive.then(|| AnimatedLogger::start("Loading bookings..."));
        self.refresh().await;
        if let Some(spinner) = spinner {
            spinner.stop().await;
        }
        self.loading = false;

        self.state
    }

    pub async fn refresh(&mut self) -> RefreshOutcome {
        if self.state.is_redirect() {
            return RefreshOutcome::Redirected;
        }

        let session = self.session.get();
        if let Err(denial) = SessionGate::check(&session, &Role::Seller) {
            if let GateDenial::RoleMismatch { .. } = denial {
                self.notifier.notify(Notification::error("Only sellers can view booking requests"));
            }
            log::warn!("🔒 Refresh refused: {}", denial);
            self.state = GateState::RedirectToLogin;
            return RefreshOutcome::Redirected;
        }
        let token = session.token().unwrap_or_default().to_string();

        log::debug!("🔄 Fetching seller bookings");
        match self.api.fetch_seller_bookings(&token).await {
            Ok(bookings) => {
                let count = bookings.len();
                log::info!("📋 Received {} booking requests", count);
                self.bookings = bookings;
                RefreshOutcome::Updated { count }
            }
            Err(ApiError::Forbidden) => {
                self.expire_session();
                RefreshOutcome::Redirected
            }
            Err(error) => {
                log::error!("❌ Error fetching bookings: {}", error);
                self.notifier.notify(Notification::error(error.notification_message(FETCH_FAILED)));
                RefreshOutcome::Kept(error)
            }
        }
    }

    /// Sends the decision, then re-fetches exactly once if and only if the
    /// write succeeded.
    pub async fn set_status(&mut self, booking_id: u64, decision: StatusDecision) -> StatusChangeOutcome {
        if self.state.is_redirect() {
            return StatusChangeOutcome::Redirected;
        }

        let outcome = self.controller.set_status(booking_id, decision).await;
        match &outcome {
            StatusChangeOutcome::Applied(_) => {
                self.refresh().await;
            }
            StatusChangeOutcome::Redirected => {
                self.state = GateState::RedirectToLogin;
            }
            StatusChangeOutcome::Failed(_) => {}
        }

        outcome
    }

    /// Polls every `poll_interval` and applies user actions until the user
    /// quits, the action channel closes or the session is rejected.
    ///
    /// The timer lives only inside this call, so every way out of the loop
    /// releases it.
    pub async fn run(&mut self, mut actions: UnboundedReceiver<PageAction>) -> GateState {
        self.activate().await;
        self.publish();

        let mut ticker = time::interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.state.is_redirect() {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh().await;
                }
                action = actions.recv() => match action {
                    Some(PageAction::SetStatus { booking_id, decision }) => {
                        self.set_status(booking_id, decision).await;
                    }
                    Some(PageAction::Refresh) => {
                        self.refresh().await;
                    }
                    Some(PageAction::Quit) | None => break,
                },
            }
            self.publish();
        }

        log::debug!("⏹️ Stopped polling seller bookings");
        self.state
    }

    fn publish(&self) {
        if self.interactive {
            println!("\n{}", self.render(&BookingRenderer::for_terminal()));
        }
    }

    fn expire_session(&mut self) {
        if let Err(e) = self.session.expire() {
            log::error!("❌ Could not clear expired session: {}", e);
        }
        self.notifier.notify(Notification::error(ApiError::Forbidden.notification_message(FETCH_FAILED)));
        self.state = GateState::RedirectToLogin;
    }
}

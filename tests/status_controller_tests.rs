use std::sync::Arc;
use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use revostay_cli::enums::api_error::ApiError;
use revostay_cli::enums::booking_status::BookingStatus;
use revostay_cli::enums::role::Role;
use revostay_cli::enums::status_change_outcome::StatusChangeOutcome;
use revostay_cli::enums::status_decision::StatusDecision;
use revostay_cli::services::booking_status_controller::BookingStatusController;
use revostay_cli::structs::booking::Booking;
use revostay_cli::structs::session::Session;
use revostay_cli::traits::booking_api::BookingApi;
use serde_json::Value;
use crate::support::{seller_session, store, updated, RecordingNotifier};

mock! {
    pub Api {}

    #[async_trait]
    impl BookingApi for Api {
        async fn fetch_seller_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError>;
        async fn update_booking_status(&self, token: &str, booking_id: u64, status: &BookingStatus) -> Result<Value, ApiError>;
    }
}

#[tokio::test]
async fn reject_sends_rejected_status_with_bearer_token() {
    let mut api = MockApi::new();
    api.expect_update_booking_status()
        .withf(|token, booking_id, status| {
            token.to_string() == "t1" && *booking_id == 12 && status.to_string() == "REJECTED"
        })
        .times(1)
        .returning(|_, _, _| Ok(updated(12, "REJECTED")));
    api.expect_fetch_seller_bookings().never();

    let notifier = RecordingNotifier::new();
    let controller = BookingStatusController::new(Arc::new(api), store(seller_session()), notifier.clone());

    let outcome = controller.set_status(12, StatusDecision::Reject).await;

    assert_eq!(outcome, StatusChangeOutcome::Applied(updated(12, "REJECTED")));
    assert_eq!(notifier.messages(), vec!["Booking rejected successfully".to_string()]);
}

#[tokio::test]
async fn server_message_is_shown_on_business_failure() {
    let mut api = MockApi::new();
    api.expect_update_booking_status()
        .with(eq("t1"), eq(4u64), eq(BookingStatus::Confirmed))
        .times(1)
        .returning(|_, _, _| Err(ApiError::Rejected { status: 409, message: Some("Booking is no longer pending".into()) }));

    let notifier = RecordingNotifier::new();
    let session = store(seller_session());
    let controller = BookingStatusController::new(Arc::new(api), Arc::clone(&session), notifier.clone());

    let outcome = controller.set_status(4, StatusDecision::Confirm).await;

    assert!(matches!(outcome, StatusChangeOutcome::Failed(ApiError::Rejected { status: 409, .. })));
    assert_eq!(notifier.messages(), vec!["Booking is no longer pending".to_string()]);
    assert_eq!(session.get(), seller_session());
}

#[tokio::test]
async fn forbidden_write_expires_the_session() {
    let mut api = MockApi::new();
    api.expect_update_booking_status()
        .times(1)
        .returning(|_, _, _| Err(ApiError::Forbidden));

    let notifier = RecordingNotifier::new();
    let session = store(seller_session());
    let controller = BookingStatusController::new(Arc::new(api), Arc::clone(&session), notifier.clone());

    assert_eq!(controller.set_status(7, StatusDecision::Confirm).await, StatusChangeOutcome::Redirected);
    assert!(session.get().is_empty());
    assert_eq!(notifier.messages(), vec!["Session expired. Please login again.".to_string()]);
}

#[tokio::test]
async fn buyers_cannot_change_status() {
    let mut api = MockApi::new();
    api.expect_update_booking_status().never();

    let notifier = RecordingNotifier::new();
    let session = store(Session::new("t5".into(), Role::Buyer, "buyer".into(), None));
    let controller = BookingStatusController::new(Arc::new(api), Arc::clone(&session), notifier.clone());

    assert_eq!(controller.set_status(7, StatusDecision::Confirm).await, StatusChangeOutcome::Redirected);
    assert_eq!(notifier.messages(), vec!["Only sellers can update booking status".to_string()]);
    assert!(!session.get().is_empty());
}

#[tokio::test]
async fn no_token_means_no_request_and_no_toast() {
    let mut api = MockApi::new();
    api.expect_update_booking_status().never();

    let notifier = RecordingNotifier::new();
    let controller = BookingStatusController::new(Arc::new(api), store(Session::default()), notifier.clone());

    assert_eq!(controller.set_status(7, StatusDecision::Reject).await, StatusChangeOutcome::Redirected);
    assert!(notifier.messages().is_empty());
}

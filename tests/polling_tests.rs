use std::sync::Arc;
use std::time::Duration;
use revostay_cli::enums::api_error::ApiError;
use revostay_cli::enums::booking_status::BookingStatus;
use revostay_cli::enums::gate_state::GateState;
use revostay_cli::enums::page_action::PageAction;
use revostay_cli::enums::status_decision::StatusDecision;
use revostay_cli::ui::seller_bookings_page::SellerBookingsPage;
use tokio::sync::mpsc;
use crate::support::{booking, seller_session, store, updated, ApiCall, FakeBookingApi, RecordingNotifier};

#[tokio::test(start_paused = true)]
async fn polls_every_thirty_seconds_until_quit() {
    let api = FakeBookingApi::new();
    api.serve(vec![booking(7, "PENDING")]);
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(seller_session()), notifier.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let quit_later = async move {
        tokio::time::sleep(Duration::from_secs(65)).await;
        tx.send(PageAction::Quit).unwrap();
    };

    let (state, ()) = tokio::join!(page.run(rx), quit_later);

    assert_eq!(state, GateState::Verified);
    // activation at 0s, ticks at 30s and 60s
    assert_eq!(api.fetch_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn custom_interval_is_honoured() {
    let api = FakeBookingApi::new();
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(seller_session()), notifier.clone())
        .with_poll_interval(Duration::from_secs(10));

    let (tx, rx) = mpsc::unbounded_channel();
    let quit_later = async move {
        tokio::time::sleep(Duration::from_secs(35)).await;
        tx.send(PageAction::Quit).unwrap();
    };

    tokio::join!(page.run(rx), quit_later);

    assert_eq!(api.fetch_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn failed_poll_does_not_stop_polling() {
    let api = FakeBookingApi::new();
    api.queue_fetch(Ok(vec![booking(7, "PENDING")]));
    api.queue_fetch(Err(ApiError::Connection("timed out".into())));
    api.queue_fetch(Ok(vec![booking(7, "PENDING"), booking(8, "PENDING")]));
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(seller_session()), notifier.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let quit_later = async move {
        tokio::time::sleep(Duration::from_secs(65)).await;
        tx.send(PageAction::Quit).unwrap();
    };

    tokio::join!(page.run(rx), quit_later);

    assert_eq!(api.fetch_count(), 3);
    assert_eq!(page.bookings().len(), 2);
    assert_eq!(notifier.messages(), vec!["Failed to connect to server".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn forbidden_poll_ends_the_loop_on_its_own() {
    let api = FakeBookingApi::new();
    api.queue_fetch(Ok(vec![booking(7, "PENDING")]));
    api.queue_fetch(Err(ApiError::Forbidden));
    let notifier = RecordingNotifier::new();
    let session = store(seller_session());
    let mut page = SellerBookingsPage::new(api.clone(), Arc::clone(&session), notifier.clone());

    let (_tx, rx) = mpsc::unbounded_channel();
    let state = page.run(rx).await;

    assert_eq!(state, GateState::RedirectToLogin);
    assert_eq!(api.fetch_count(), 2);
    assert!(session.get().is_empty());
}

#[tokio::test(start_paused = true)]
async fn user_action_between_ticks_is_followed_by_refresh() {
    let api = FakeBookingApi::new();
    api.queue_fetch(Ok(vec![booking(7, "PENDING")]));
    api.queue_update(Ok(updated(7, "REJECTED")));
    api.serve(vec![booking(7, "REJECTED")]);
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(seller_session()), notifier.clone());

    let (tx, rx) = mpsc::unbounded_channel();
    let act = async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        tx.send(PageAction::SetStatus { booking_id: 7, decision: StatusDecision::Reject }).unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        tx.send(PageAction::Quit).unwrap();
    };

    tokio::join!(page.run(rx), act);

    assert_eq!(
        api.calls(),
        vec![
            ApiCall::Fetch { token: "t1".into() },
            ApiCall::Update { token: "t1".into(), booking_id: 7, status: BookingStatus::Rejected },
            ApiCall::Fetch { token: "t1".into() },
        ]
    );
    assert_eq!(page.bookings()[0].status, BookingStatus::Rejected);
}

#[tokio::test]
async fn closed_action_channel_deactivates_the_view() {
    let api = FakeBookingApi::new();
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(seller_session()), notifier.clone());

    let (tx, rx) = mpsc::unbounded_channel::<PageAction>();
    drop(tx);

    assert_eq!(page.run(rx).await, GateState::Verified);
    assert_eq!(api.fetch_count(), 1);
}

#[tokio::test]
async fn unauthenticated_run_returns_before_polling() {
    let api = FakeBookingApi::new();
    let notifier = RecordingNotifier::new();
    let mut page = SellerBookingsPage::new(api.clone(), store(Default::default()), notifier.clone());

    let (_tx, rx) = mpsc::unbounded_channel();

    assert_eq!(page.run(rx).await, GateState::RedirectToLogin);
    assert!(api.calls().is_empty());
}

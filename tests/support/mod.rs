use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use revostay_cli::enums::api_error::ApiError;
use revostay_cli::enums::booking_status::BookingStatus;
use revostay_cli::enums::role::Role;
use revostay_cli::services::session_store::SessionStore;
use revostay_cli::structs::booking::Booking;
use revostay_cli::structs::notification::Notification;
use revostay_cli::structs::session::Session;
use revostay_cli::traits::booking_api::BookingApi;
use revostay_cli::traits::notifier::Notifier;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Fetch { token: String },
    Update { token: String, booking_id: u64, status: BookingStatus },
}

/// In-process backend that answers from queued responses and records every
/// request in the order it was issued.
#[derive(Default)]
pub struct FakeBookingApi {
    calls: Mutex<Vec<ApiCall>>,
    fetch_responses: Mutex<VecDeque<Result<Vec<Booking>, ApiError>>>,
    update_responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    fallback_bookings: Mutex<Vec<Booking>>,
}

impl FakeBookingApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer for fetches once the queue is drained.
    pub fn serve(&self, bookings: Vec<Booking>) {
        *self.fallback_bookings.lock().unwrap() = bookings;
    }

    pub fn queue_fetch(&self, response: Result<Vec<Booking>, ApiError>) {
        self.fetch_responses.lock().unwrap().push_back(response);
    }

    pub fn queue_update(&self, response: Result<Value, ApiError>) {
        self.update_responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, ApiCall::Fetch { .. })).count()
    }
}

#[async_trait]
impl BookingApi for FakeBookingApi {
    async fn fetch_seller_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Fetch { token: token.to_string() });
        let queued = self.fetch_responses.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(self.fallback_bookings.lock().unwrap().clone()))
    }

    async fn update_booking_status(&self, token: &str, booking_id: u64, status: &BookingStatus) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(ApiCall::Update {
            token: token.to_string(),
            booking_id,
            status: status.clone(),
        });
        let queued = self.update_responses.lock().unwrap().pop_front();
        queued.unwrap_or(Err(ApiError::EmptyBody))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|n| n.message.clone()).collect()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

pub fn booking(id: u64, status: &str) -> Booking {
    serde_json::from_value(json!({
        "id": id,
        "property": {"id": 100 + id, "title": format!("Listing {}", id)},
        "buyer": {"id": 200 + id, "fullName": "Anil Varma"},
        "visitDate": "2024-05-18",
        "amount": 1500,
        "message": null,
        "status": status,
        "createdAt": "2024-05-10T09:15:30"
    }))
    .unwrap()
}

/// The updated record as the backend echoes it after a status change.
pub fn updated(id: u64, status: &str) -> Value {
    json!({"id": id, "status": status})
}

pub fn seller_session() -> Session {
    Session::new("t1".to_string(), Role::Seller, "ravi".to_string(), Some("Ravi Kumar".to_string()))
}

pub fn store(session: Session) -> Arc<SessionStore> {
    Arc::new(SessionStore::in_memory(session))
}

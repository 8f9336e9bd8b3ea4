use async_trait::async_trait;
use serde_json::Value;
use crate::enums::api_error::ApiError;
use crate::enums::booking_status::BookingStatus;
use crate::structs::booking::Booking;

/// The slice of the RevoStay backend the seller console talks to.
#[async_trait]
pub trait BookingApi: Send + Sync {

    /// `GET /api/bookings/seller`, in the order the backend returns them.
    async fn fetch_seller_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError>;

    /// `PUT /api/bookings/{id}/status?status=<STATUS>` with an empty body.
    /// Any truthy response body counts as success and is returned as is.
    async fn update_booking_status(&self, token: &str, booking_id: u64, status: &BookingStatus) -> Result<Value, ApiError>;
}

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use crate::config::constants::{booking_status_path, SELLER_BOOKINGS_PATH};
use crate::enums::api_error::ApiError;
use crate::enums::booking_status::BookingStatus;
use crate::errors::RevostayResult;
use crate::structs::api_message::ApiMessage;
use crate::structs::booking::Booking;
use crate::structs::config::api_config::ApiConfig;
use crate::traits::booking_api::BookingApi;

/// HTTP client for the RevoStay backend. Every request carries the session's
/// bearer token.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> RevostayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiMessage>(&body)
                .ok()
                .and_then(|payload| payload.message);

            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn body_text(response: Response) -> Result<String, ApiError> {
        response
            .text()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))
    }
}

/// The write endpoint signals success through a truthy body, so an empty,
/// `null`, `false`, `0` or `""` payload is a failure even on HTTP 2xx.
pub fn is_falsy_body(body: &str) -> bool {
    truthy_body(body).is_none()
}

/// The body as JSON when it is truthy. A non-JSON body that is not blank
/// is kept as a string.
pub fn truthy_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = serde_json::from_str::<Value>(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string()));
    let falsy = match &value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    };

    (!falsy).then_some(value)
}

#[async_trait]
impl BookingApi for ApiClient {
    async fn fetch_seller_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        let url = self.url(SELLER_BOOKINGS_PATH);
        log::debug!("📥 GET {}", url);

        let request = self.authorized(self.client.get(&url), token);
        let response = self.send(request).await?;
        let body = Self::body_text(response).await?;

        serde_json::from_str::<Vec<Booking>>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_booking_status(&self, token: &str, booking_id: u64, status: &BookingStatus) -> Result<Value, ApiError> {
        let url = self.url(&booking_status_path(booking_id));
        log::debug!("📤 PUT {}?status={}", url, status);

        let request = self
            .authorized(self.client.put(&url), token)
            .query(&[("status", status.as_str())]);
        let response = self.send(request).await?;
        let body = Self::body_text(response).await?;

        truthy_body(&body).ok_or(ApiError::EmptyBody)
    }
}

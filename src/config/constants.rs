use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:2509";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const RUNTIME_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

pub const CONFIG_DIR_NAME: &str = "revostay";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.json";

pub const API_URL_ENV: &str = "REVOSTAY_API_URL";
pub const SESSION_FILE_ENV: &str = "REVOSTAY_SESSION_FILE";

pub const SELLER_BOOKINGS_PATH: &str = "/api/bookings/seller";

pub fn booking_status_path(booking_id: u64) -> String {
    format!("/api/bookings/{}/status", booking_id)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

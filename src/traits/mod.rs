pub mod booking_api;
pub mod notifier;
pub mod session_persistence;

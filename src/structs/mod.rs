pub mod api_message;
pub mod booking;
pub mod buyer_summary;
pub mod cli;
pub mod config;
pub mod notification;
pub mod property_summary;
pub mod session;

pub mod api_config;
pub mod config;
pub mod polling_config;
pub mod session_config;

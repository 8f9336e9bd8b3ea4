pub mod api_client;
pub mod booking_status_controller;
pub mod file_session_persistence;
pub mod memory_session_persistence;
pub mod session_gate;
pub mod session_store;

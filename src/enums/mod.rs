pub mod api_error;
pub mod booking_status;
pub mod commands;
pub mod gate_denial;
pub mod gate_state;
pub mod notification_level;
pub mod page_action;
pub mod refresh_outcome;
pub mod role;
pub mod status_change_outcome;
pub mod status_decision;
pub mod status_style;

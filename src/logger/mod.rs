pub mod animated_logger;
pub mod toast_logger;

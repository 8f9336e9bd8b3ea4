use crate::enums::notification_level::NotificationLevel;
use crate::structs::notification::Notification;
use crate::traits::notifier::Notifier;

/// Prints notifications to stderr, one line per toast.
#[derive(Default)]
pub struct ToastLogger;

impl ToastLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ToastLogger {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => log::debug!("toast error: {}", notification.message),
            _ => log::debug!("toast: {}", notification.message),
        }
        eprintln!("{} {}", notification.level.emoji(), notification.message);
    }
}

use crate::domain::model::{Notification, NotificationLevel};
use crate::domain::ports::Notifier;

/// Sends notifications to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let at = notification.at.to_rfc3339();
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(at = %at, "🔔 {}", notification.message)
            }
            NotificationLevel::Error => tracing::warn!(at = %at, "🔔 {}", notification.message),
        }
    }
}

/// Prints notifications for a terminal user.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notification: &Notification) -> String {
        let icon = match notification.level {
            NotificationLevel::Success => "✅",
            NotificationLevel::Info => "ℹ️",
            NotificationLevel::Error => "❌",
        };
        format!(
            "[{}] {} {}",
            notification.at.format("%H:%M:%S"),
            icon,
            notification.message
        )
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = Self::format(&notification);
        match notification.level {
            NotificationLevel::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

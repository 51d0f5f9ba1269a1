use portal_notifications_config::NotificationsConfig;
use portal_notifications_util::{NotificationOptions, presets};

/// Toolbar entries, one per categorized constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Success,
    Info,
    Warning,
    Error,
    NetworkError,
    ServerError,
    ValidationError,
    SessionExpired,
}

impl Trigger {
    pub const ALL: [Trigger; 8] = [
        Trigger::Success,
        Trigger::Info,
        Trigger::Warning,
        Trigger::Error,
        Trigger::NetworkError,
        Trigger::ServerError,
        Trigger::ValidationError,
        Trigger::SessionExpired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Trigger::Success => "Success",
            Trigger::Info => "Info",
            Trigger::Warning => "Warning",
            Trigger::Error => "Error",
            Trigger::NetworkError => "Network error",
            Trigger::ServerError => "Server error",
            Trigger::ValidationError => "Validation error",
            Trigger::SessionExpired => "Session expired",
        }
    }

    pub fn options(self, config: &NotificationsConfig) -> NotificationOptions {
        match self {
            Trigger::Success => presets::success("Event saved").title("Events"),
            Trigger::Info => presets::info("New shelter registrations are awaiting review"),
            Trigger::Warning => presets::warning("The banner image is larger than recommended")
                .description("Images over 2 MB may load slowly on mobile"),
            Trigger::Error => presets::error("Could not delete the banner"),
            Trigger::NetworkError => {
                presets::network_error("Unable to reach the server. Check your connection.")
            }
            Trigger::ServerError => {
                presets::server_error("The server could not process the request")
            }
            Trigger::ValidationError => {
                presets::validation_error("Enter a valid phone number", Some("phone"))
            }
            Trigger::SessionExpired => presets::session_expired(
                "Your session has expired. Sign in again to continue.",
                config.login_url.clone(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_notifications_util::{ActionKind, Position, Severity};

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Trigger::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Trigger::ALL.len());
    }

    #[test]
    fn test_session_expired_uses_configured_login() {
        let config = NotificationsConfig {
            login_url: "https://members.example.net/sign-in".to_string(),
            ..Default::default()
        };

        let options = Trigger::SessionExpired.options(&config);
        assert_eq!(
            options.action.map(|a| a.kind),
            Some(ActionKind::Navigate("https://members.example.net/sign-in".to_string()))
        );
    }

    #[test]
    fn test_trigger_severities() {
        let config = NotificationsConfig::default();
        assert_eq!(Trigger::Success.options(&config).severity, Severity::Success);
        assert_eq!(Trigger::ServerError.options(&config).severity, Severity::Error);
        assert_eq!(
            Trigger::ValidationError.options(&config).position,
            Some(Position::TopRight)
        );
    }
}

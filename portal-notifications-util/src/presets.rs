//! Categorized constructors.
//!
//! Each function returns [`NotificationOptions`] with a fixed severity and
//! tuned defaults. Callers may keep chaining builder methods; anything they set
//! replaces the preset's value.

use crate::{NotificationAction, NotificationOptions, Position, Severity};

/// Label of the reload action carried by network errors
pub const RETRY_LABEL: &str = "Retry";

/// Label of the login action carried by session-expired notifications
pub const SIGN_IN_LABEL: &str = "Sign in";

/// Auto-dismiss delay of server errors, in milliseconds
pub const SERVER_ERROR_DURATION: u32 = 10_000;

pub const VALIDATION_TITLE: &str = "Validation error";

fn categorized(severity: Severity, message: impl Into<String>) -> NotificationOptions {
    NotificationOptions::new(severity, message)
        .duration(severity.default_duration_ms())
        .variant(severity.default_variant())
}

pub fn error(message: impl Into<String>) -> NotificationOptions {
    categorized(Severity::Error, message)
}

pub fn success(message: impl Into<String>) -> NotificationOptions {
    categorized(Severity::Success, message)
}

pub fn warning(message: impl Into<String>) -> NotificationOptions {
    categorized(Severity::Warning, message)
}

pub fn info(message: impl Into<String>) -> NotificationOptions {
    categorized(Severity::Info, message)
}

/// Error shown when the backend could not be reached at all.
///
/// Stays on screen until acted upon and offers a reload of the portal.
pub fn network_error(message: impl Into<String>) -> NotificationOptions {
    error(message)
        .persistent(true)
        .position(Position::TopCenter)
        .action(NotificationAction::reload(RETRY_LABEL))
}

/// Error reported by the backend itself (5xx responses)
pub fn server_error(message: impl Into<String>) -> NotificationOptions {
    error(message).duration(SERVER_ERROR_DURATION)
}

/// Warning about invalid form input, titled after the offending field when known
pub fn validation_error(message: impl Into<String>, field: Option<&str>) -> NotificationOptions {
    let title = match field {
        Some(field) if !field.trim().is_empty() => format!("Invalid field: {}", field.trim()),
        _ => VALIDATION_TITLE.to_string(),
    };

    warning(message).position(Position::TopRight).title(title)
}

/// Notice that the member session ended; points at the login entry point
pub fn session_expired(message: impl Into<String>, login_url: impl Into<String>) -> NotificationOptions {
    warning(message)
        .persistent(true)
        .position(Position::TopCenter)
        .action(NotificationAction::navigate(SIGN_IN_LABEL, login_url))
}

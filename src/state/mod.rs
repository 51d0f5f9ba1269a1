pub mod notifications;

pub use notifications::{ActionOutcome, NotificationState};

pub mod messages;
pub mod triggers;

pub use messages::Message;
pub use triggers::Trigger;

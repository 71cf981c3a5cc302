use crate::event::KeyMessage;
use crate::publisher::{KeySink, PublishError};
use tracing::info;

/// A sink that reports every forwarded key message through `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        LogSink
    }
}

impl KeySink for LogSink {
    fn publish(&mut self, msg: &KeyMessage) -> Result<(), PublishError> {
        info!(
            key_code = msg.key_code,
            key_name = %msg.key_name,
            key_pressed = msg.key_pressed,
            "key event"
        );
        Ok(())
    }
}

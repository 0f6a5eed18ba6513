use std::sync::Arc;

use crate::services::telegram::MessageChannel;

/// Delivers messages to one chat.
///
/// Delivery failures are logged and reported as `false`, never returned as
/// errors: a missed message must not stop the polling loop.
#[derive(Clone)]
pub struct Notifier {
    channel: Arc<dyn MessageChannel>,
    chat_id: String,
}

impl Notifier {
    pub fn new(channel: Arc<dyn MessageChannel>, chat_id: String) -> Self {
        Self { channel, chat_id }
    }

    pub async fn notify(&self, text: &str) -> bool {
        tracing::info!(chat_id = %self.chat_id, "Sending message");

        match self.channel.send_message(&self.chat_id, text).await {
            Ok(()) => {
                tracing::debug!(message = %text, "Message sent");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send Telegram message");
                false
            }
        }
    }
}

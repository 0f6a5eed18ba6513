use serde::{Deserialize, Serialize};

/// Body of a Bot API `sendMessage` call
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Telegram API returned status {status}: {description}")]
    Api { status: u16, description: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

use async_trait::async_trait;
use reqwest::Client;

use crate::services::telegram::{ApiResponse, SendMessageRequest, TelegramError};

/// Outbound text channel
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

/// Telegram Bot API client
pub struct TelegramBot {
    client: Client,
    api_url: String,
    token: String,
}

impl TelegramBot {
    pub fn new(client: Client, api_url: String, token: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }
}

#[async_trait]
impl MessageChannel for TelegramBot {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // without_url keeps the bot token out of logs
            .map_err(|e| TelegramError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body: ApiResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(TelegramError::Parse(e.without_url().to_string()))
            }
            Err(_) => {
                return Err(TelegramError::Api {
                    status: status.as_u16(),
                    description: "no description".to_string(),
                })
            }
        };

        if !status.is_success() || !body.ok {
            return Err(TelegramError::Api {
                status: status.as_u16(),
                description: body
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            });
        }

        Ok(())
    }
}

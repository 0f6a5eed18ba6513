use async_trait::async_trait;
use reqwest::Client;

use crate::services::homework::HomeworkError;

/// Source of raw homework status responses
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch statuses changed since `from_date` (unix seconds).
    /// The body is returned as-is; shape checks happen in the validator.
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, HomeworkError>;
}

/// Practicum homework status API client
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(client: Client, endpoint: String, token: String) -> Self {
        Self {
            client,
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, HomeworkError> {
        tracing::info!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| HomeworkError::Connection {
                endpoint: self.endpoint.clone(),
                from_date,
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HomeworkError::UpstreamCall(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| HomeworkError::MalformedResponse(format!("body is not valid JSON: {}", e)))?;

        tracing::info!(from_date, "Homework statuses received");
        Ok(body)
    }
}

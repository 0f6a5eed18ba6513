use std::env;
use std::time::Duration;

use crate::config::verdicts::VerdictTable;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Отсутствуют переменные окружения: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),
    #[error("Некорректное значение {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Environment configuration
/// Loads and validates environment variables once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub practicum_endpoint: String,
    pub telegram_api_url: String,
    pub retry_period_secs: u64,
    pub from_date: i64,
    pub verdicts: VerdictTable,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    /// Every missing credential is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| non_empty(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let required = |key: &'static str| non_empty(key).ok_or(ConfigError::MissingVars(vec![key]));

        let retry_period_secs = match non_empty("RETRY_PERIOD") {
            Some(val) => {
                let secs: u64 = val.parse().map_err(|e| ConfigError::Invalid {
                    var: "RETRY_PERIOD",
                    reason: format!("{}", e),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: "RETRY_PERIOD",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                secs
            }
            None => DEFAULT_RETRY_PERIOD_SECS,
        };

        let from_date = match non_empty("POLL_FROM_DATE") {
            Some(val) => {
                let ts: i64 = val.parse().map_err(|e| ConfigError::Invalid {
                    var: "POLL_FROM_DATE",
                    reason: format!("{}", e),
                })?;
                if ts < 0 {
                    return Err(ConfigError::Invalid {
                        var: "POLL_FROM_DATE",
                        reason: "must not be negative".to_string(),
                    });
                }
                ts
            }
            None => 0,
        };

        let verdicts = match non_empty("HOMEWORK_VERDICTS_PATH") {
            Some(path) => VerdictTable::from_file(&path).map_err(|reason| ConfigError::Invalid {
                var: "HOMEWORK_VERDICTS_PATH",
                reason,
            })?,
            None => VerdictTable::default(),
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            practicum_endpoint: non_empty("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: non_empty("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period_secs,
            from_date,
            verdicts,
        })
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }
}

pub mod config;
pub mod services;

use std::sync::Arc;

use config::environment::Config;
use services::homework::PracticumClient;
use services::poller::HomeworkPoller;
use services::telegram::{Notifier, TelegramBot};

/// Wire the production collaborators from a loaded configuration.
pub fn create_poller(config: &Config) -> HomeworkPoller {
    let http_client = reqwest::Client::new();

    let source = Arc::new(PracticumClient::new(
        http_client.clone(),
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
    ));
    let channel = Arc::new(TelegramBot::new(
        http_client,
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
    ));
    let notifier = Notifier::new(channel, config.telegram_chat_id.clone());

    HomeworkPoller::new(
        source,
        config.verdicts.clone(),
        notifier,
        config.retry_period(),
        config.from_date,
    )
}

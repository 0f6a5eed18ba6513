use homework_status_bot::config::environment::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_status_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(severity = "critical", error = %e, "Invalid environment configuration");
            eprintln!("Некоторые переменные окружения недоступны. Продолжение работы невозможно: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        endpoint = %config.practicum_endpoint,
        retry_period_secs = config.retry_period_secs,
        "Homework status bot started"
    );

    let poller = homework_status_bot::create_poller(&config);

    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, stopping");
        }
    }
}

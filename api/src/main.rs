use api::{App, Config, telemetry::Telemetry};
use api::http::server::ApiError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // Variables already set in the environment win over .env entries
    let dotenv = dotenvy::dotenv();
    let config = Config::parse();

    // The exporter must exist before the subscriber so spans reach it from the start
    let telemetry = Telemetry::init(&config.telemetry)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().json().with_target(true))
        .with(telemetry.as_ref().map(|telemetry| telemetry.layer()))
        .init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(_) => info!("no .env file found, using system environment variables"),
    }
    info!(
        address = %config.server.bind_address(),
        environment = ?config.environment,
        otlp_endpoint = ?config.telemetry.otlp_endpoint,
        "configuration loaded"
    );

    App::new(config)
        .await?
        .with_telemetry(telemetry)
        .start()
        .await
}

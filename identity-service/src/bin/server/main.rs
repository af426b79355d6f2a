use std::sync::Arc;

use auth::SystemClock;
use auth::TokenCodec;
use chrono::Duration;
use identity_service::config::Config;
use identity_service::domain::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::directory::InMemoryDirectory;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        refresh_ttl_days = config.jwt.refresh_ttl_days,
        "Configuration loaded"
    );

    let codec = Arc::new(TokenCodec::new(config.jwt.secret.as_bytes()));
    let directory = Arc::new(InMemoryDirectory::new());

    let auth_service = Arc::new(AuthService::new(
        directory,
        codec,
        Arc::new(SystemClock),
        Duration::minutes(config.jwt.access_ttl_minutes),
        Duration::days(config.jwt.refresh_ttl_days),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}

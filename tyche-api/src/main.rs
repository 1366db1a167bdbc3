use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tyche_api::{app, AppState};
use tyche_core::Storage;
use tyche_store::{Config, MemStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let storage: Arc<dyn Storage> = if config.business_rules.seed_catalog {
        Arc::new(MemStorage::seeded())
    } else {
        Arc::new(MemStorage::new())
    };
    tracing::info!(
        seeded = config.business_rules.seed_catalog,
        enforce_date_order = config.business_rules.enforce_date_order,
        "Storage ready"
    );

    let app = app(AppState::from_config(storage, &config));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

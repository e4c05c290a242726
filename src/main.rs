use std::sync::Arc;

use popreel_api::{
    api::{create_router, AppState},
    config::Config,
    db,
    recommend::Recommender,
    services::{InMemoryCatalog, PgCatalog, VideoCatalog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("popreel_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Choose the catalog backend
    let catalog: Arc<dyn VideoCatalog> = match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url).await?;
            Arc::new(PgCatalog::new(pool))
        }
        None => Arc::new(InMemoryCatalog::from_json_file(&config.catalog_path).await?),
    };

    tracing::info!(
        catalog = catalog.name(),
        title_limit = config.title_limit,
        neighbor_count = config.neighbor_count,
        "Catalog ready"
    );

    let state = AppState::new(
        catalog,
        Recommender::new(config.recommend_options()),
        config.genre_delimiter,
    );
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

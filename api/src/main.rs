use anyhow::Context;
use posts_api::{AppState, Config, fixtures, store::{MemoryStore, PostStore}};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let store = Arc::new(MemoryStore::new());

    if config.seed_posts > 0 {
        let seeded = store
            .insert_many(fixtures::random_posts(config.seed_posts))
            .await
            .context("seeding posts")?;
        info!("Seeded {} posts", seeded.len());
    }

    let app = posts_api::app(AppState::new(store), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health           - Health check");
    info!("  GET    /posts            - List posts");
    info!("  POST   /posts            - Create post");
    info!("  GET    /posts/{{id}}       - Get specific post");
    info!("  PUT    /posts/{{id}}       - Update post");
    info!("  DELETE /posts/{{id}}       - Delete post");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

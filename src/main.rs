use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::shutdown::shutdown_signal;
use activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv().ok();

    // 1. Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 2. Config and seed data
    let config = AppConfig::from_env().context("reading configuration")?;
    let store = config.build_store().context("loading activities")?;
    info!(
        activities = store.activity_names().len(),
        seed = ?config.seed_path,
        "activity directory ready"
    );

    // 3. Router
    let app = web::app(store, &config.static_dir);

    // 4. Bind, falling back to the next port once
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}; trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

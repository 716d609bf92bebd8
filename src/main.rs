use std::sync::Arc;

use eestikeelt_core::config::Config;
use eestikeelt_core::protocol;
use eestikeelt_core::services::fetch::HttpFetcher;
use eestikeelt_core::services::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::from_env()?;

    // The rule table is complete (or known empty) before the first request.
    let pipeline = Pipeline::start(Arc::new(HttpFetcher::default()), config.endpoints).await;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, protocol::router(pipeline))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

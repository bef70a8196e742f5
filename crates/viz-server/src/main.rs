// File: crates/viz-server/src/main.rs
// Summary: Entry point: tracing setup, configuration, router, serve loop.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod chrome;
mod config;
mod pages;
mod routes;
mod state;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viz_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting viz gallery");

    let state = state::AppState::new(config.data_dir, viz_core::theme::find(&config.theme));
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

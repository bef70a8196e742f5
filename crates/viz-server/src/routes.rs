// File: crates/viz-server/src/routes.rs
// Summary: Application router: chart pages, static data assets, health, middleware.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::pages;
use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let data_dir = state.data_dir.clone();
    Router::new()
        .route("/", get(pages::top::page))
        .route("/bar-chart", get(pages::bar_chart::page))
        .route("/chord-diagram", get(pages::chord_diagram::page))
        .route("/choropleth-map", get(pages::choropleth_map::page))
        .route("/density-plot", get(pages::density_plot::page))
        .route("/line-chart", get(pages::line_chart::page))
        .route("/node-link-diagram", get(pages::node_link_diagram::page))
        .route("/scatter-plot", get(pages::scatter_plot::page))
        .route("/treemap", get(pages::treemap::page))
        .route("/hexbin-plot", get(pages::hexbin_plot::page))
        .route("/health", get(health_check))
        .nest_service("/data", ServeDir::new(data_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

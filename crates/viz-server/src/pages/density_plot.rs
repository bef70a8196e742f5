// File: crates/viz-server/src/pages/density_plot.rs
// Summary: Density plot page: distribution of monthly rainfall.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let samples = state.rainfall().await;
    let svg = viz_charts::density_plot(&samples, &Frame::default(), &state.theme);
    Html(chrome::page("Distribution of monthly rainfall", &svg.to_svg_string()))
}

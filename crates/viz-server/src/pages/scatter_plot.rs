// File: crates/viz-server/src/pages/scatter_plot.rs
// Summary: Scatter plot page: city income vs consumption.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let records = state.cities().await;
    let svg = viz_charts::scatter_plot(&records, &Frame::default(), &state.theme);
    Html(chrome::page("City income and consumption", &svg.to_svg_string()))
}

// File: crates/viz-server/src/pages/choropleth_map.rs
// Summary: Choropleth map page: regional statistics.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let regions = state.regions().await;
    let svg = viz_charts::choropleth_map(&regions, &Frame::default(), &state.theme);
    Html(chrome::page("Regional statistics map", &svg.to_svg_string()))
}

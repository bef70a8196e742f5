// File: crates/viz-server/src/pages/bar_chart.rs
// Summary: Bar chart page: population per prefecture.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let records = state.population().await;
    let svg = viz_charts::bar_chart(&records, &Frame::default(), &state.theme);
    Html(chrome::page("Population by prefecture", &svg.to_svg_string()))
}

// File: crates/viz-server/src/pages/line_chart.rs
// Summary: Line chart page: tourism visitor trend.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let records = state.trend().await;
    let svg = viz_charts::line_chart(&records, &Frame::default(), &state.theme);
    Html(chrome::page("Tourism visitor trend", &svg.to_svg_string()))
}

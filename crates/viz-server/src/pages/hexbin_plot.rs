// File: crates/viz-server/src/pages/hexbin_plot.rs
// Summary: Hexbin plot page: business openings and closures by municipality.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let records = state.census().await;
    let svg = viz_charts::hexbin_plot(&records, &Frame::default(), &state.theme);
    Html(chrome::page(
        "Business openings and closures by municipality, 2019",
        &svg.to_svg_string(),
    ))
}

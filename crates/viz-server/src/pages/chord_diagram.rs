// File: crates/viz-server/src/pages/chord_diagram.rs
// Summary: Chord diagram page: migration flows between regions.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let flows = state.flows().await;
    let svg = viz_charts::chord_diagram(&flows, &Frame::default(), &state.theme);
    Html(chrome::page("Inter-regional migration flows", &svg.to_svg_string()))
}

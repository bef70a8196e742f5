// File: crates/viz-server/src/pages/treemap.rs
// Summary: Treemap page: industry share of employment.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let root = state.industry().await;
    let svg = viz_charts::treemap_chart(&root, &Frame::default(), &state.theme);
    Html(chrome::page("Industry share of employment", &svg.to_svg_string()))
}

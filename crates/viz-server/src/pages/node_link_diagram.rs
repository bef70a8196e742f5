// File: crates/viz-server/src/pages/node_link_diagram.rs
// Summary: Node-link diagram page: research collaboration network.

use axum::extract::State;
use axum::response::Html;
use viz_core::Frame;

use crate::chrome;
use crate::state::AppState;

pub async fn page(State(state): State<AppState>) -> Html<String> {
    let network = state.network().await;
    let svg = viz_charts::node_link_diagram(&network, &Frame::default(), &state.theme);
    Html(chrome::page("Research collaboration network", &svg.to_svg_string()))
}

// File: crates/viz-server/src/pages/top.rs
// Summary: Index page listing every chart page.

use axum::response::Html;

use crate::chrome;

pub async fn page() -> Html<String> {
    Html(chrome::index())
}

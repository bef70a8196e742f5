// File: crates/viz-core/src/error.rs
// Summary: Error type shared by dataset loading and layout code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

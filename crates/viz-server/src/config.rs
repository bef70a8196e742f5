// File: crates/viz-server/src/config.rs
// Summary: Environment-based configuration with .env support.

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub data_dir: PathBuf,
    pub theme: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            data_dir: PathBuf::from(std::env::var("VIZ_DATA_DIR").unwrap_or_else(|_| "data".to_string())),
            theme: std::env::var("VIZ_THEME").unwrap_or_else(|_| "light".to_string()),
        }
    }
}

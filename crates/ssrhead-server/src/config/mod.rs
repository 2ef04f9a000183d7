//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use ssrhead_core::error::{HeadError, Result};

pub use schema::{RouteConfig, ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HeadError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| HeadError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        tracing::info!(%path, "config file not found, using defaults");
        let cfg = ServerConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}

//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use memstat_core::error::{MemstatError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "MEMSTAT_CONFIG";
/// Looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "memstat.yaml";

/// Resolve the config for the binary.
///
/// An explicit path must exist; the default path is optional and falls back
/// to built-in defaults.
pub fn load() -> Result<ServerConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_from_file(&path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from_file(DEFAULT_CONFIG_PATH);
    }
    tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
    Ok(ServerConfig::default())
}

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MemstatError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| MemstatError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

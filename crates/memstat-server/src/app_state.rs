//! Shared application state for the memstat server.
//!
//! The metric store is built once here and injected into handlers through
//! `Router::with_state`; nothing reaches it through a global.

use std::sync::Arc;

use memstat_core::MemStorage;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    storage: Arc<MemStorage>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build application state with a fresh, empty store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_storage(cfg, Arc::new(MemStorage::new()))
    }

    /// Build application state around an existing store (tests read it back).
    pub fn with_storage(cfg: ServerConfig, storage: Arc<MemStorage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            storage,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn storage(&self) -> Arc<MemStorage> {
        Arc::clone(&self.storage)
    }
}

//! Shared application state for the ssrhead server.
//!
//! Site and per-route metadata are resolved once at startup. Handlers only
//! read from the state, so it is shared behind a single `Arc` without locks.

use std::collections::HashMap;
use std::sync::Arc;

use ssrhead_core::error::Result;
use ssrhead_core::MetadataConfig;

use crate::config::schema::normalize_path;
use crate::config::{ServerConfig, ServerSection};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    site: MetadataConfig,
    routes: HashMap<String, MetadataConfig>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;

        let site = cfg.site_metadata();
        let mut routes = HashMap::with_capacity(cfg.routes.len());
        for r in &cfg.routes {
            let meta = site.with_override(&r.metadata);
            tracing::debug!(path = %r.path, title = %meta.long_title, "route metadata registered");
            routes.insert(normalize_path(&r.path).to_string(), meta);
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, site, routes }),
        })
    }

    pub fn server(&self) -> &ServerSection {
        &self.inner.cfg.server
    }

    pub fn site(&self) -> &MetadataConfig {
        &self.inner.site
    }

    /// Metadata for a request path: exact route override, else site metadata.
    pub fn metadata_for(&self, path: &str) -> &MetadataConfig {
        self.inner
            .routes
            .get(normalize_path(path))
            .unwrap_or(&self.inner.site)
    }

    pub fn route_count(&self) -> usize {
        self.inner.routes.len()
    }
}

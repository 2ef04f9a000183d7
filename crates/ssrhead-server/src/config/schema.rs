use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;
use ssrhead_core::error::{HeadError, Result};
use ssrhead_core::{MetadataConfig, MetadataOverride};

use crate::router::RESERVED_PATHS;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    /// Site-wide metadata, layered over the built-in defaults.
    #[serde(default)]
    pub site: MetadataOverride,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            site: MetadataOverride::default(),
            routes: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HeadError::UnsupportedVersion(self.version));
        }

        self.server.validate()?;

        let site = self.site_metadata();
        site.validate()?;

        let mut seen = HashSet::new();
        for r in &self.routes {
            if !r.path.starts_with('/') {
                return Err(HeadError::BadRequest(format!(
                    "routes.path must start with '/': {}",
                    r.path
                )));
            }
            if RESERVED_PATHS.contains(&normalize_path(&r.path)) {
                return Err(HeadError::BadRequest(format!(
                    "routes.path is served by the server itself: {}",
                    r.path
                )));
            }
            if !seen.insert(normalize_path(&r.path)) {
                return Err(HeadError::BadRequest(format!("duplicate route path: {}", r.path)));
            }
            site.with_override(&r.metadata).validate().map_err(|e| {
                HeadError::InvalidMetadata(format!("route {}: {e}", r.path))
            })?;
        }
        Ok(())
    }

    /// Built-in defaults with the `site` section applied.
    pub fn site_metadata(&self) -> MetadataConfig {
        MetadataConfig::default().with_override(&self.site)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// `lang` attribute of the `<html>` element.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Id of the mount point the client bundle hydrates.
    #[serde(default = "default_root_id")]
    pub root_id: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            lang: default_lang(),
            root_id: default_root_id(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !is_token(&self.lang) {
            return Err(HeadError::BadRequest(
                "server.lang must be non-empty and contain only [A-Za-z0-9-_]".into(),
            ));
        }
        if !is_token(&self.root_id) {
            return Err(HeadError::BadRequest(
                "server.root_id must be non-empty and contain only [A-Za-z0-9-_]".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| {
                HeadError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
            })
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_lang() -> String {
    "en".into()
}
fn default_root_id() -> String {
    "root".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub path: String,
    #[serde(default)]
    pub metadata: MetadataOverride,
}

/// Trailing slashes do not distinguish routes: `/about/` and `/about` are the same page.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

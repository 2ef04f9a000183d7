//! Page metadata record and partial overrides.
//!
//! [`MetadataConfig`] is the only input of the head renderer. Its default is
//! the starter-pack metadata; per-route values are built by layering a
//! [`MetadataOverride`] on top of a base config.

use serde::Deserialize;

use crate::error::{HeadError, Result};

pub const SHORT_TITLE: &str = "SSR Starter Pack";
pub const LONG_TITLE: &str = "Server Side Rendering Starter Pack";
pub const DESCRIPTION: &str = "A starter pack to help you implement your handmade solution for SSR";
pub const KEYWORDS: &str = "react, ssr, server, side, rendering, webpack";
pub const VIEWPORT: &str = "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no";

/// Immutable metadata for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataConfig {
    /// Used for the `title`, `author` and `application-name` meta tags.
    pub short_title: String,
    /// Used for the `<title>` element.
    pub long_title: String,
    pub description: String,
    pub keywords: String,
    pub viewport: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            short_title: SHORT_TITLE.into(),
            long_title: LONG_TITLE.into(),
            description: DESCRIPTION.into(),
            keywords: KEYWORDS.into(),
            viewport: VIEWPORT.into(),
        }
    }
}

impl MetadataConfig {
    pub fn validate(&self) -> Result<()> {
        if self.short_title.trim().is_empty() {
            return Err(HeadError::InvalidMetadata("short_title must not be empty".into()));
        }
        if self.long_title.trim().is_empty() {
            return Err(HeadError::InvalidMetadata("long_title must not be empty".into()));
        }
        if self.viewport.trim().is_empty() {
            return Err(HeadError::InvalidMetadata("viewport must not be empty".into()));
        }
        Ok(())
    }

    /// Layer `ov` on top of `self`. Fields missing from the override keep the base value.
    pub fn with_override(&self, ov: &MetadataOverride) -> Self {
        Self {
            short_title: ov.short_title.clone().unwrap_or_else(|| self.short_title.clone()),
            long_title: ov.long_title.clone().unwrap_or_else(|| self.long_title.clone()),
            description: ov.description.clone().unwrap_or_else(|| self.description.clone()),
            keywords: ov.keywords.clone().unwrap_or_else(|| self.keywords.clone()),
            viewport: ov.viewport.clone().unwrap_or_else(|| self.viewport.clone()),
        }
    }
}

/// Partial metadata, as written in config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataOverride {
    #[serde(default)]
    pub short_title: Option<String>,
    #[serde(default)]
    pub long_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub viewport: Option<String>,
}

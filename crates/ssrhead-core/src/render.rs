//! Head metadata renderer.
//!
//! Pure mapping from [`MetadataConfig`] to the ordered tag set:
//! `<title>`, then charset, compatibility mode, `title`, `author`,
//! `application-name`, `description`, `keywords` and `viewport` meta tags.

use crate::collector::HeadSink;
use crate::metadata::MetadataConfig;
use crate::tag::{HeadTag, MetadataTagSet};

/// Appended to the long title in the `<title>` element.
pub const TITLE_SUFFIX: &str = " ⚡";

pub const CHARSET: &str = "utf-8";
pub const COMPAT_HTTP_EQUIV: &str = "X-UA-Compatible";
pub const COMPAT_CONTENT: &str = "IE=edge";

/// Number of tags every render produces (1 title + 8 meta).
pub const TAG_COUNT: usize = 9;

/// Renders head metadata for one [`MetadataConfig`].
#[derive(Debug, Clone, Default)]
pub struct HeadMetadataRenderer {
    cfg: MetadataConfig,
}

impl HeadMetadataRenderer {
    pub fn new(cfg: MetadataConfig) -> Self {
        Self { cfg }
    }

    pub fn render(&self) -> MetadataTagSet {
        render_head(&self.cfg)
    }

    /// Hand the rendered tags to a head-management sink.
    pub fn render_into(&self, sink: &mut dyn HeadSink) {
        render_into(&self.cfg, sink)
    }
}

pub fn render_head(cfg: &MetadataConfig) -> MetadataTagSet {
    let mut tags = Vec::with_capacity(TAG_COUNT);
    tags.push(HeadTag::title(format!("{}{TITLE_SUFFIX}", cfg.long_title)));

    tags.push(HeadTag::charset(CHARSET));
    tags.push(HeadTag::http_equiv(COMPAT_HTTP_EQUIV, COMPAT_CONTENT));

    tags.push(HeadTag::named("title", &cfg.short_title));
    tags.push(HeadTag::named("author", &cfg.short_title));
    tags.push(HeadTag::named("application-name", &cfg.short_title));
    tags.push(HeadTag::named("description", &cfg.description));
    tags.push(HeadTag::named("keywords", &cfg.keywords));
    tags.push(HeadTag::named("viewport", &cfg.viewport));
    tags
}

pub fn render_into(cfg: &MetadataConfig, sink: &mut dyn HeadSink) {
    let tags = render_head(cfg);
    tracing::trace!(count = tags.len(), title = %cfg.long_title, "head tags rendered");
    sink.commit(&tags);
}

/// Serialize tags as HTML, one element per line.
pub fn render_head_html(tags: &[HeadTag]) -> String {
    tags.iter().map(HeadTag::to_html).collect::<Vec<_>>().join("\n")
}
